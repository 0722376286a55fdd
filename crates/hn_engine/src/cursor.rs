use std::sync::{Arc, Mutex, PoisonError};

use hn_core::ItemId;

/// Hands out candidate ids to workers in input order, each exactly once.
#[derive(Debug)]
pub struct WorkCursor {
    ids: Arc<[ItemId]>,
    next: Mutex<usize>,
}

impl WorkCursor {
    pub fn new(ids: impl Into<Arc<[ItemId]>>) -> Self {
        Self {
            ids: ids.into(),
            next: Mutex::new(0),
        }
    }

    /// The next id, or `None` once the input is exhausted.
    pub fn next(&self) -> Option<ItemId> {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let id = self.ids.get(*next).copied()?;
        *next += 1;
        Some(id)
    }

    /// Number of ids handed out so far.
    pub fn dispatched(&self) -> usize {
        *self.next.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
