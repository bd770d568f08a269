use axum::http::{Method, StatusCode, Uri};

use crate::app::errors::ApiError;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    tracing::info!(%method, %uri, "no route");
    ApiError::RouteNotFound
}
