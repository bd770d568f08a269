//! `shelf-core` — shared building blocks for the items service.
//!
//! Identifiers and the domain error model. No IO, no HTTP, no storage.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
