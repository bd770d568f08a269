//! Error responses.
//!
//! | variant | status | body |
//! |---------|--------|------|
//! | `InvalidInput` | 400 | `{message, hint, error}` |
//! | `NotFound` | 404 | `{message, id}` |
//! | `Backend` | 500 | `{message, error}` (+ `hint` on create/update) |
//! | `RouteNotFound` | 404 | `{message}` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use shelf_core::DomainError;
use shelf_infra::item_store::StoreError;

use crate::app::dto::{RESPONSE_ERROR, RESPONSE_HINT, RESPONSE_ITEM_NOT_FOUND, RESPONSE_NOT_FOUND};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not a valid item.
    #[error("invalid item: {0}")]
    InvalidInput(String),

    /// The path id does not resolve to a stored item. `id` is echoed as sent.
    #[error("item {id} not found")]
    NotFound { id: String },

    #[error("storage failure: {error}")]
    Backend { error: String, hint: bool },

    #[error("route not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn invalid_input(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::InvalidInput(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Attach the item-shape hint to backend failures (create/update routes).
    pub fn with_hint(self) -> Self {
        match self {
            Self::Backend { error, .. } => Self::Backend { error, hint: true },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Backend { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::not_found(id.to_string()),
            StoreError::Backend(error) => Self::Backend { error, hint: false },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::InvalidInput(error) => {
                tracing::debug!(%error, "rejected item body");
                json!({ "message": RESPONSE_ERROR, "hint": RESPONSE_HINT, "error": error })
            }
            Self::NotFound { id } => json!({ "message": RESPONSE_ITEM_NOT_FOUND, "id": id }),
            Self::Backend { error, hint } => {
                tracing::error!(%error, "storage operation failed");
                if hint {
                    json!({ "message": RESPONSE_ERROR, "hint": RESPONSE_HINT, "error": error })
                } else {
                    json!({ "message": RESPONSE_ERROR, "error": error })
                }
            }
            Self::RouteNotFound => json!({ "message": RESPONSE_NOT_FOUND }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::ItemId;

    #[test]
    fn store_errors_map_to_statuses() {
        let id = ItemId::new();
        let nf: ApiError = StoreError::NotFound(id).into();
        assert_eq!(nf.status(), StatusCode::NOT_FOUND);
        assert!(matches!(nf, ApiError::NotFound { id: ref s } if *s == id.to_string()));

        let backend: ApiError = StoreError::backend("boom").into();
        assert_eq!(backend.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_is_a_client_error() {
        let err = ApiError::invalid_input(DomainError::validation("price must be a number"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid item: price must be a number");
    }

    #[test]
    fn with_hint_only_touches_backend_errors() {
        let err = ApiError::from(StoreError::backend("boom")).with_hint();
        assert!(matches!(err, ApiError::Backend { hint: true, .. }));

        let err = ApiError::not_found("abc").with_hint();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }
}
