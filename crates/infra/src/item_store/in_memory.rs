use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shelf_core::ItemId;
use shelf_inventory::{Item, ItemFields};

use super::{DeleteAllReport, ItemStore, StoreError};

/// In-memory item collection.
///
/// Intended for tests/dev. Ids are UUIDv7 so `list` returns items in creation
/// order.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<HashMap<ItemId, ItemFields>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ItemId, ItemFields>>, StoreError> {
        self.items
            .read()
            .map_err(|_| StoreError::backend("in-memory item store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ItemId, ItemFields>>, StoreError> {
        self.items
            .write()
            .map_err(|_| StoreError::backend("in-memory item store lock poisoned"))
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn create(&self, fields: ItemFields) -> Result<ItemId, StoreError> {
        let id = ItemId::new();
        self.write()?.insert(id, fields);
        Ok(id)
    }

    async fn get(&self, id: &ItemId) -> Result<Option<ItemFields>, StoreError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let map = self.read()?;
        let mut items: Vec<Item> = map
            .iter()
            .map(|(id, fields)| Item::new(*id, fields.clone()))
            .collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn update(&self, id: &ItemId, fields: ItemFields) -> Result<(), StoreError> {
        let mut map = self.write()?;
        match map.get_mut(id) {
            Some(existing) => {
                *existing = fields;
                Ok(())
            }
            None => Err(StoreError::NotFound(*id)),
        }
    }

    async fn delete(&self, id: &ItemId) -> Result<(), StoreError> {
        match self.write()?.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(*id)),
        }
    }

    async fn delete_all(&self) -> Result<DeleteAllReport, StoreError> {
        let mut map = self.write()?;
        let deleted = map.len() as u64;
        map.clear();
        Ok(DeleteAllReport { deleted, failed: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            item_type: "Limpieza".to_string(),
            price: 1.80,
            amount: 18000,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let store = InMemoryItemStore::new();
        let id = store.create(fields("Bolsa de basura")).await.unwrap();

        let got = store.get(&id).await.unwrap();
        assert_eq!(got, Some(fields("Bolsa de basura")));
    }

    #[tokio::test]
    async fn get_unknown_is_none() {
        let store = InMemoryItemStore::new();
        assert_eq!(store.get(&ItemId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_returns_items_in_creation_order() {
        let store = InMemoryItemStore::new();
        let a = store.create(fields("a")).await.unwrap();
        let b = store.create(fields("b")).await.unwrap();
        let c = store.create(fields("c")).await.unwrap();

        let ids: Vec<ItemId> = store.list().await.unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let store = InMemoryItemStore::new();
        let id = store.create(fields("Hamburguesa")).await.unwrap();

        let replacement = ItemFields {
            name: "Hamburguesa con queso".to_string(),
            item_type: "Alimentación".to_string(),
            price: 3.10,
            amount: 12,
        };
        store.update(&id, replacement.clone()).await.unwrap();

        assert_eq!(store.get(&id).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let store = InMemoryItemStore::new();
        let id = ItemId::new();
        let err = store.update(&id, fields("x")).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound(id));
    }

    #[tokio::test]
    async fn delete_removes_and_second_delete_is_not_found() {
        let store = InMemoryItemStore::new();
        let id = store.create(fields("x")).await.unwrap();

        store.delete(&id).await.unwrap();
        assert_eq!(store.get(&id).await.unwrap(), None);
        assert_eq!(store.delete(&id).await.unwrap_err(), StoreError::NotFound(id));
    }

    #[tokio::test]
    async fn delete_all_clears_and_counts() {
        let store = InMemoryItemStore::new();
        for name in ["a", "b", "c", "d"] {
            store.create(fields(name)).await.unwrap();
        }

        let report = store.delete_all().await.unwrap();
        assert_eq!(report, DeleteAllReport { deleted: 4, failed: 0 });
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryItemStore::new();
        let first = store.create(fields("x")).await.unwrap();
        store.delete(&first).await.unwrap();
        let second = store.create(fields("x")).await.unwrap();
        assert_ne!(first, second);
    }
}
