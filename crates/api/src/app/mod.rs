//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: storage wiring (which `ItemStore` backs the API)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs and user-facing messages
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: AppServices) -> Router {
    let services = Arc::new(services);

    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
