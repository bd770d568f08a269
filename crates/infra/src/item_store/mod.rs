//! Item storage abstraction.
//!
//! The HTTP layer talks to storage exclusively through [`ItemStore`]. The store
//! owns identifier generation; callers never pick ids.
//!
//! ## Not found vs. failure
//!
//! - `get` returns `Ok(None)` for an unknown id and `Err` only for transport/backend failures.
//! - `update` and `delete` return [`StoreError::NotFound`] for an unknown id.
//!
//! ## Implementations
//!
//! | type | backing | notes |
//! |------|---------|-------|
//! | [`InMemoryItemStore`] | `RwLock<HashMap>` | dev/tests |
//! | `PostgresItemStore` | sqlx `PgPool` | feature `postgres`, batched `delete_all` |

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use shelf_core::{Entity, ItemId};
use shelf_inventory::{Item, ItemFields};

pub use in_memory::InMemoryItemStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresItemStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("item {0} not found")]
    NotFound(ItemId),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Outcome of a bulk delete.
///
/// Deletions are independent; a non-zero `failed` means the collection was
/// only partially cleared.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteAllReport {
    pub deleted: u64,
    pub failed: u64,
}

impl DeleteAllReport {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Single flat collection of items.
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item and return its freshly generated id.
    async fn create(&self, fields: ItemFields) -> Result<ItemId, StoreError>;

    /// Fetch the fields stored under `id`, if any.
    async fn get(&self, id: &ItemId) -> Result<Option<ItemFields>, StoreError>;

    /// Every item in the collection (order is backend-defined).
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Replace all fields of an existing item.
    async fn update(&self, id: &ItemId, fields: ItemFields) -> Result<(), StoreError>;

    async fn delete(&self, id: &ItemId) -> Result<(), StoreError>;

    /// Delete every item, awaiting each deletion.
    ///
    /// The default enumerates the collection and deletes items one by one,
    /// counting failures instead of stopping at the first one. Backends with a
    /// native bulk delete should override this.
    async fn delete_all(&self) -> Result<DeleteAllReport, StoreError> {
        let items = self.list().await?;
        let mut report = DeleteAllReport::default();

        for item in items {
            let id = item.id();
            match self.delete(id).await {
                Ok(()) => report.deleted += 1,
                // Already gone (concurrent delete): the goal state holds.
                Err(StoreError::NotFound(_)) => report.deleted += 1,
                Err(e) => {
                    tracing::warn!(item_id = %id, error = %e, "bulk delete: item deletion failed");
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}

#[async_trait::async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn create(&self, fields: ItemFields) -> Result<ItemId, StoreError> {
        (**self).create(fields).await
    }

    async fn get(&self, id: &ItemId) -> Result<Option<ItemFields>, StoreError> {
        (**self).get(id).await
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list().await
    }

    async fn update(&self, id: &ItemId, fields: ItemFields) -> Result<(), StoreError> {
        (**self).update(id, fields).await
    }

    async fn delete(&self, id: &ItemId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }

    async fn delete_all(&self) -> Result<DeleteAllReport, StoreError> {
        (**self).delete_all().await
    }
}
