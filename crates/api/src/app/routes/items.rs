//! Item handlers. One storage call per request (plus an existence check on
//! by-id routes).

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::instrument;

use shelf_core::ItemId;
use shelf_infra::item_store::ItemStore;
use shelf_inventory::ItemFields;

use crate::app::dto::{BulkDeleted, ItemAck, ItemUpdated};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

type Body = Result<Json<Value>, JsonRejection>;
type IdSegment = Result<Path<String>, PathRejection>;

/// The path id as text. A segment axum cannot decode (e.g. `%FF`) is an
/// unresolvable id like any other; it is echoed back still percent-encoded.
fn path_id(segment: IdSegment, uri: &Uri) -> Result<String, ApiError> {
    match segment {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            let raw = uri.path().rsplit('/').next().unwrap_or_default();
            tracing::debug!(%rejection, raw, "undecodable item id");
            Err(ApiError::not_found(raw))
        }
    }
}

/// Parse a path id and confirm the item exists.
///
/// Ids that do not parse are treated exactly like ids that parse but are
/// absent: both are "not found", never a client error about the id's shape.
pub async fn resolve_existing(
    store: &dyn ItemStore,
    raw_id: &str,
) -> Result<(ItemId, ItemFields), ApiError> {
    let Ok(id) = raw_id.parse::<ItemId>() else {
        return Err(ApiError::not_found(raw_id));
    };

    match store.get(&id).await? {
        Some(fields) => Ok((id, fields)),
        None => Err(ApiError::not_found(raw_id)),
    }
}

fn parse_body(body: Body) -> Result<ItemFields, ApiError> {
    let Json(value) = body.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    ItemFields::from_json(&value).map_err(ApiError::invalid_input)
}

#[instrument(skip(services))]
pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Response, ApiError> {
    let items = services.store().list().await?;
    tracing::debug!(count = items.len(), "listed items");
    Ok((StatusCode::OK, Json(items)).into_response())
}

#[instrument(skip(services, segment))]
pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    uri: Uri,
    segment: IdSegment,
) -> Result<Response, ApiError> {
    let id = path_id(segment, &uri)?;
    let (_, fields) = resolve_existing(services.store(), &id).await?;
    Ok((StatusCode::OK, Json(fields)).into_response())
}

#[instrument(skip(services, body))]
pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Body,
) -> Result<Response, ApiError> {
    let fields = parse_body(body)?;

    let id = services
        .store()
        .create(fields)
        .await
        .map_err(|e| ApiError::from(e).with_hint())?;

    tracing::info!(item_id = %id, "item created");
    Ok((StatusCode::OK, Json(ItemAck::created(id))).into_response())
}

#[instrument(skip(services, segment, body))]
pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    uri: Uri,
    segment: IdSegment,
    body: Body,
) -> Result<Response, ApiError> {
    let fields = parse_body(body)?;
    let id = path_id(segment, &uri)?;
    let store = services.store();

    let (id, _) = resolve_existing(store, &id)
        .await
        .map_err(ApiError::with_hint)?;
    store
        .update(&id, fields.clone())
        .await
        .map_err(|e| ApiError::from(e).with_hint())?;

    tracing::info!(item_id = %id, "item updated");
    Ok((StatusCode::OK, Json(ItemUpdated::new(id, fields))).into_response())
}

#[instrument(skip(services, segment))]
pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    uri: Uri,
    segment: IdSegment,
) -> Result<Response, ApiError> {
    let id = path_id(segment, &uri)?;
    let store = services.store();

    let (id, _) = resolve_existing(store, &id).await?;
    store.delete(&id).await?;

    tracing::info!(item_id = %id, "item deleted");
    Ok((StatusCode::OK, Json(ItemAck::deleted(id))).into_response())
}

/// Deletes are awaited before responding; any failed deletion turns the
/// response into a 500 that still reports both counts.
#[instrument(skip(services))]
pub async fn delete_all_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Response, ApiError> {
    let report = services.store().delete_all().await?;

    let status = if report.is_complete() {
        tracing::info!(deleted = report.deleted, "all items deleted");
        StatusCode::OK
    } else {
        tracing::warn!(
            deleted = report.deleted,
            failed = report.failed,
            "bulk delete left items behind"
        );
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok((status, Json(BulkDeleted::new(report))).into_response())
}
