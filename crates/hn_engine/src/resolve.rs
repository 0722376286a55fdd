use std::sync::Arc;

use engine_logging::engine_debug;
use hn_core::{is_story_link, EnrichedItem, ItemId};

use crate::{FailureKind, FetchError, ItemCache, ItemSource};

/// Outcome of resolving one candidate id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A story with an external link.
    Story(EnrichedItem),
    /// Resolved, but not a qualifying story.
    Filtered(ItemId),
    /// Fetch or decode failed. Nothing was cached for `id`.
    Unresolved { id: ItemId, error: FetchError },
}

impl Resolution {
    pub fn id(&self) -> ItemId {
        match self {
            Resolution::Story(item) => item.id(),
            Resolution::Filtered(id) | Resolution::Unresolved { id, .. } => *id,
        }
    }
}

/// Turns ids into items through the shared cache, fetching on a miss.
#[derive(Clone)]
pub struct Resolver {
    source: Arc<dyn ItemSource>,
    cache: Arc<ItemCache>,
}

impl Resolver {
    pub fn new(source: Arc<dyn ItemSource>, cache: Arc<ItemCache>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &Arc<ItemCache> {
        &self.cache
    }

    /// Resolve and classify `id`. Returns whether the item came from the
    /// cache alongside the outcome.
    pub async fn resolve(&self, id: ItemId) -> (Resolution, bool) {
        let (item, cached) = match self.cache.get(id) {
            Some(item) => (item, true),
            None => match self.source.item(id).await {
                Ok(Some(item)) => (self.cache.put(id, Arc::new(item)), false),
                Ok(None) => {
                    let error = FetchError::new(FailureKind::Missing, format!("no item {id}"));
                    return (self.unresolved(id, error), false);
                }
                Err(error) => return (self.unresolved(id, error), false),
            },
        };

        let enriched = EnrichedItem::new(item);
        let resolution = if is_story_link(&enriched) {
            Resolution::Story(enriched)
        } else {
            Resolution::Filtered(id)
        };
        (resolution, cached)
    }

    fn unresolved(&self, id: ItemId, error: FetchError) -> Resolution {
        engine_debug!("Skipping item {}: {}", id, error);
        Resolution::Unresolved { id, error }
    }
}
