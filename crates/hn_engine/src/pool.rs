use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use engine_logging::{engine_debug, engine_info, engine_warn};
use hn_core::{EnrichedItem, ItemId};
use tokio::sync::mpsc;

use crate::{Countdown, Resolution, Resolver, WorkCursor};

/// Workers started per batch.
pub const POOL_SIZE: usize = 12;
/// Story channel capacity as a multiple of the requested count.
pub const CHANNEL_SLACK: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub workers: usize,
    pub channel_slack: usize,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            workers: POOL_SIZE,
            channel_slack: CHANNEL_SLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    /// Ids taken from the cursor.
    pub dispatched: usize,
    /// Qualifying stories sent by workers, before truncation.
    pub stories_emitted: usize,
    pub filtered: usize,
    pub unresolved: usize,
    pub cache_hits: usize,
}

/// Result of one pool run: qualifying stories sorted by id, at most
/// `requested` of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryBatch {
    pub stories: Vec<EnrichedItem>,
    pub requested: usize,
    pub stats: PoolStats,
}

impl StoryBatch {
    /// The ids ran out before enough qualifying stories were found.
    pub fn is_short(&self) -> bool {
        self.stories.len() < self.requested
    }
}

/// Fixed-size pool of workers draining one shared cursor per run.
#[derive(Clone)]
pub struct StoryPool {
    resolver: Resolver,
    settings: PoolSettings,
}

#[derive(Default)]
struct Tally {
    emitted: AtomicUsize,
    filtered: AtomicUsize,
    unresolved: AtomicUsize,
    cache_hits: AtomicUsize,
}

/// State shared by the workers of one run.
///
/// Each worker sends through its own clone of the story sender, but the
/// channel stays open until `closer` is also released. Only the worker whose
/// exit finishes `workers_alive` releases it, so the channel closes exactly
/// once, after every worker is gone.
struct RunState {
    resolver: Resolver,
    cursor: WorkCursor,
    stories_needed: Countdown,
    workers_alive: Countdown,
    closer: Mutex<Option<mpsc::Sender<EnrichedItem>>>,
    tally: Tally,
}

/// Counts a worker out when its task ends, including by panic or by the task
/// being dropped unpolled.
struct WorkerExit {
    worker: usize,
    state: Arc<RunState>,
}

impl Drop for WorkerExit {
    fn drop(&mut self) {
        if self.state.workers_alive.decrement() {
            engine_debug!("Worker {} was the last to exit; closing story channel", self.worker);
            let mut closer = self.state.closer.lock().unwrap_or_else(PoisonError::into_inner);
            closer.take();
        }
    }
}

impl StoryPool {
    pub fn new(resolver: Resolver, settings: PoolSettings) -> Self {
        Self { resolver, settings }
    }

    /// Find the first `num_stories` qualifying stories among `ids`, returned
    /// in ascending id order.
    ///
    /// Must be called within a tokio runtime; workers run as spawned tasks.
    pub async fn run(&self, num_stories: usize, ids: &[ItemId]) -> StoryBatch {
        if num_stories == 0 {
            return StoryBatch {
                stories: Vec::new(),
                requested: 0,
                stats: PoolStats::default(),
            };
        }

        let workers = self.settings.workers.max(1);
        // Workers can never send more stories than there are candidates.
        let capacity = num_stories
            .saturating_mul(self.settings.channel_slack)
            .min(ids.len())
            .max(1);
        let (tx, mut rx) = mpsc::channel(capacity);
        let state = Arc::new(RunState {
            resolver: self.resolver.clone(),
            cursor: WorkCursor::new(ids),
            stories_needed: Countdown::new(num_stories),
            workers_alive: Countdown::new(workers),
            closer: Mutex::new(Some(tx.clone())),
            tally: Tally::default(),
        });

        engine_info!(
            "Retrieving {} stories from {} candidates with {} workers",
            num_stories,
            ids.len(),
            workers
        );

        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let exit = WorkerExit {
                    worker,
                    state: state.clone(),
                };
                tokio::spawn(run_worker(exit, tx.clone()))
            })
            .collect();
        drop(tx);

        let mut stories = Vec::with_capacity(num_stories.min(ids.len()));
        while let Some(story) = rx.recv().await {
            stories.push(story);
        }
        for handle in handles {
            if let Err(err) = handle.await {
                engine_warn!("Story worker failed: {}", err);
            }
        }

        stories.sort_by_key(EnrichedItem::id);
        stories.truncate(num_stories);

        let tally = &state.tally;
        let stats = PoolStats {
            dispatched: state.cursor.dispatched(),
            stories_emitted: tally.emitted.load(Ordering::Relaxed),
            filtered: tally.filtered.load(Ordering::Relaxed),
            unresolved: tally.unresolved.load(Ordering::Relaxed),
            cache_hits: tally.cache_hits.load(Ordering::Relaxed),
        };
        let batch = StoryBatch {
            stories,
            requested: num_stories,
            stats,
        };
        if batch.is_short() {
            engine_warn!(
                "Only {} of {} stories found after exhausting {} candidates",
                batch.stories.len(),
                num_stories,
                ids.len()
            );
        }
        engine_info!("Story batch done: {:?}", batch.stats);
        batch
    }
}

async fn run_worker(exit: WorkerExit, tx: mpsc::Sender<EnrichedItem>) {
    let (worker, state) = (exit.worker, &exit.state);
    let tally = &state.tally;
    while !state.stories_needed.is_done() {
        let Some(id) = state.cursor.next() else {
            engine_debug!("Worker {} found no candidates left", worker);
            break;
        };
        let (resolution, cached) = state.resolver.resolve(id).await;
        if cached {
            tally.cache_hits.fetch_add(1, Ordering::Relaxed);
        }
        match resolution {
            Resolution::Story(story) => {
                // The receiver only goes away when the caller dropped the run.
                if tx.send(story).await.is_err() {
                    break;
                }
                tally.emitted.fetch_add(1, Ordering::Relaxed);
                state.stories_needed.decrement();
            }
            Resolution::Filtered(_) => {
                tally.filtered.fetch_add(1, Ordering::Relaxed);
            }
            Resolution::Unresolved { .. } => {
                tally.unresolved.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
