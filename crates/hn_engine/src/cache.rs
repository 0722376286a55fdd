use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use hn_core::{Item, ItemId};

/// Memo of resolved items, shared by every request for the life of the
/// process.
///
/// There is no eviction or expiry. The first item stored under an id wins;
/// later `put` calls for the same id are ignored, so readers never see an
/// entry change under them.
#[derive(Debug, Default)]
pub struct ItemCache {
    items: RwLock<HashMap<ItemId, Arc<Item>>>,
}

impl ItemCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ItemId) -> Option<Arc<Item>> {
        // Every write is a single insert, so a poisoned map is still whole.
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items.get(&id).cloned()
    }

    /// Store `item` under `id` unless an entry exists; returns the entry that
    /// is cached afterwards.
    pub fn put(&self, id: ItemId, item: Arc<Item>) -> Arc<Item> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.entry(id).or_insert(item).clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
