use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::export::CsvExport;
use crate::item::{Item, NewItem};
use crate::pagination::PageRequest;

/// Authoritative owner of all inventory items.
///
/// Implementations must keep every operation atomic with respect to the
/// others: a reader never observes a half-applied create, update or delete.
pub trait InventoryStore: Send + Sync {
    /// Insert a new item at the end of the ordered sequence and return its id.
    fn create(&self, candidate: NewItem) -> ItemId;

    /// Items in insertion order, optionally narrowed to a pagination window.
    fn list(&self, page: PageRequest) -> DomainResult<Vec<Item>>;

    fn get(&self, id: ItemId) -> DomainResult<Item>;

    /// Replace every field except the id. The item keeps its position.
    fn update(&self, id: ItemId, replacement: NewItem) -> DomainResult<Item>;

    /// Remove the item, returning it. Remaining items keep their order.
    fn delete(&self, id: ItemId) -> DomainResult<Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fresh snapshot of the inventory as CSV records.
    fn export_csv(&self) -> CsvExport;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn create(&self, candidate: NewItem) -> ItemId {
        (**self).create(candidate)
    }

    fn list(&self, page: PageRequest) -> DomainResult<Vec<Item>> {
        (**self).list(page)
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        (**self).get(id)
    }

    fn update(&self, id: ItemId, replacement: NewItem) -> DomainResult<Item> {
        (**self).update(id, replacement)
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        (**self).delete(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn export_csv(&self) -> CsvExport {
        (**self).export_csv()
    }
}

#[derive(Debug)]
struct Inventory {
    // Insertion-ordered: doubles as the id index and the listing sequence.
    items: IndexMap<ItemId, Item>,
    next_id: ItemId,
}

/// In-memory store guarded by a single read/write lock.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after deletes.
#[derive(Debug)]
pub struct InMemoryInventoryStore {
    inner: RwLock<Inventory>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inventory {
                items: IndexMap::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }

    // Critical sections never leave the map half-updated, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inventory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryInventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn create(&self, candidate: NewItem) -> ItemId {
        let mut inv = self.write();
        let id = inv.next_id;
        inv.next_id = id.next();
        inv.items.insert(id, candidate.with_id(id));

        tracing::info!(item_id = %id, size = inv.items.len(), "item created");
        id
    }

    fn list(&self, page: PageRequest) -> DomainResult<Vec<Item>> {
        let inv = self.read();
        let window = page.window(inv.items.len()).inspect_err(|_| {
            tracing::debug!(
                page = page.page,
                size = page.size,
                len = inv.items.len(),
                "pagination window out of range"
            );
        })?;

        Ok(window.map(|i| inv.items[i].clone()).collect())
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        self.read()
            .items
            .get(&id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    fn update(&self, id: ItemId, replacement: NewItem) -> DomainResult<Item> {
        let mut inv = self.write();
        let item = inv.items.get_mut(&id).ok_or_else(DomainError::not_found)?;
        item.replace_with(replacement);

        tracing::info!(item_id = %id, "item updated");
        Ok(item.clone())
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        let mut inv = self.write();
        let removed = inv
            .items
            .shift_remove(&id)
            .ok_or_else(DomainError::not_found)?;

        tracing::info!(item_id = %id, size = inv.items.len(), "item deleted");
        Ok(removed)
    }

    fn len(&self) -> usize {
        self.read().items.len()
    }

    fn export_csv(&self) -> CsvExport {
        let snapshot: Vec<Item> = self.read().items.values().cloned().collect();
        tracing::debug!(rows = snapshot.len(), "csv export snapshot taken");
        CsvExport::from_items(snapshot)
    }
}
