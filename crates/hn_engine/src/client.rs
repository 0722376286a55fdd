use std::sync::Arc;
use std::time::{Duration, Instant};

use engine_logging::engine_error;
use hn_core::{EnrichedItem, ItemId};

use crate::{
    FetchError, FetchSettings, ItemCache, ItemSource, PoolSettings, ReqwestItemSource, Resolver,
    StoryBatch, StoryPool,
};

/// Entry point for request handlers.
///
/// Clones share the same source and cache, so one client built at startup
/// serves every request for the life of the process.
#[derive(Clone)]
pub struct HnClient {
    source: Arc<dyn ItemSource>,
    pool: StoryPool,
}

/// Stories for one page view plus how long they took to gather.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontPage {
    pub batch: StoryBatch,
    pub elapsed: Duration,
}

impl HnClient {
    pub fn new(source: Arc<dyn ItemSource>, cache: Arc<ItemCache>, settings: PoolSettings) -> Self {
        let resolver = Resolver::new(source.clone(), cache);
        Self {
            source,
            pool: StoryPool::new(resolver, settings),
        }
    }

    /// Client against the HTTP API with default pool settings.
    pub fn with_settings(settings: FetchSettings, cache: Arc<ItemCache>) -> Result<Self, FetchError> {
        let source = ReqwestItemSource::new(settings)?;
        Ok(Self::new(Arc::new(source), cache, PoolSettings::default()))
    }

    pub async fn top_items(&self) -> Result<Vec<ItemId>, FetchError> {
        self.source.top_stories().await
    }

    /// Up to `num_stories` qualifying stories from `ids`, ascending by id.
    pub async fn retrieve_stories(&self, num_stories: usize, ids: &[ItemId]) -> Vec<EnrichedItem> {
        self.retrieve_batch(num_stories, ids).await.stories
    }

    pub async fn retrieve_batch(&self, num_stories: usize, ids: &[ItemId]) -> StoryBatch {
        self.pool.run(num_stories, ids).await
    }

    /// Fetch the current top stories and resolve the first `num_stories`
    /// linked ones.
    pub async fn front_page(&self, num_stories: usize) -> Result<FrontPage, FetchError> {
        let start = Instant::now();
        let ids = self.top_items().await.inspect_err(|err| {
            engine_error!("Could not load top stories: {}", err);
        })?;
        let batch = self.retrieve_batch(num_stories, &ids).await;
        Ok(FrontPage {
            batch,
            elapsed: start.elapsed(),
        })
    }
}
