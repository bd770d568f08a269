//! Postgres-backed item store.
//!
//! ## Schema
//!
//! One row per item in `items`. `ensure_schema()` creates the table if it is
//! missing; run it once at startup.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | `RowNotFound` | `Backend` (queries use `fetch_optional`, so this is unexpected) |
//! | `PoolClosed` | `Backend` |
//! | Database / other | `Backend` with the operation name |
//!
//! Unknown ids on update/delete are detected via `rows_affected() == 0` and
//! reported as `NotFound`.

use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::instrument;
use uuid::Uuid;

use shelf_core::ItemId;
use shelf_inventory::{Item, ItemFields};

use super::{DeleteAllReport, ItemStore, StoreError};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id          UUID PRIMARY KEY,
    name        TEXT NOT NULL,
    item_type   TEXT NOT NULL,
    price       DOUBLE PRECISION NOT NULL,
    amount      BIGINT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Item store over a shared SQLx pool (`Send + Sync`, cheap to clone).
#[derive(Debug, Clone)]
pub struct PostgresItemStore {
    pool: PgPool,
}

impl PostgresItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `items` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }
}

fn fields_from_row(row: &PgRow) -> Result<ItemFields, sqlx::Error> {
    Ok(ItemFields {
        name: row.try_get("name")?,
        item_type: row.try_get("item_type")?,
        price: row.try_get("price")?,
        amount: row.try_get("amount")?,
    })
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => StoreError::Backend(format!(
            "database error in {}: {}",
            operation,
            db_err.message()
        )),
        sqlx::Error::PoolClosed => {
            StoreError::Backend(format!("connection pool closed in {}", operation))
        }
        sqlx::Error::RowNotFound => {
            StoreError::Backend(format!("unexpected row not found in {}", operation))
        }
        _ => StoreError::Backend(format!("sqlx error in {}: {}", operation, err)),
    }
}

#[async_trait::async_trait]
impl ItemStore for PostgresItemStore {
    #[instrument(skip(self, fields), err)]
    async fn create(&self, fields: ItemFields) -> Result<ItemId, StoreError> {
        let id = ItemId::new();
        sqlx::query(
            r#"
            INSERT INTO items (id, name, item_type, price, amount)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&fields.name)
        .bind(&fields.item_type)
        .bind(fields.price)
        .bind(fields.amount)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_item", e))?;

        Ok(id)
    }

    #[instrument(skip(self), err)]
    async fn get(&self, id: &ItemId) -> Result<Option<ItemFields>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT name, item_type, price, amount
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_item", e))?;

        row.as_ref()
            .map(fields_from_row)
            .transpose()
            .map_err(|e| map_sqlx_error("get_item", e))
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, item_type, price, amount
            FROM items
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_items", e))?;

        rows.iter()
            .map(|row| {
                let id: Uuid = row.try_get("id")?;
                Ok(Item::new(ItemId::from_uuid(id), fields_from_row(row)?))
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| map_sqlx_error("list_items", e))
    }

    #[instrument(skip(self, fields), err)]
    async fn update(&self, id: &ItemId, fields: ItemFields) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, item_type = $3, price = $4, amount = $5
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(&fields.name)
        .bind(&fields.item_type)
        .bind(fields.price)
        .bind(fields.amount)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_item", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(*id));
        }
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: &ItemId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_item", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(*id));
        }
        Ok(())
    }

    /// Single statement, so the collection is either fully cleared or untouched.
    #[instrument(skip(self), err)]
    async fn delete_all(&self) -> Result<DeleteAllReport, StoreError> {
        let result = sqlx::query("DELETE FROM items")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_all_items", e))?;

        Ok(DeleteAllReport {
            deleted: result.rows_affected(),
            failed: 0,
        })
    }
}
