//! HN engine: upstream fetching, the shared item cache and the story pool.
mod cache;
mod client;
mod counter;
mod cursor;
mod decode;
mod fetch;
mod pool;
mod resolve;
mod types;

pub use cache::ItemCache;
pub use client::{FrontPage, HnClient};
pub use counter::Countdown;
pub use cursor::WorkCursor;
pub use decode::{decode_item, decode_top_stories, DecodeError};
pub use fetch::{FetchSettings, ItemSource, ReqwestItemSource, DEFAULT_API_BASE};
pub use pool::{PoolSettings, PoolStats, StoryBatch, StoryPool, CHANNEL_SLACK, POOL_SIZE};
pub use resolve::{Resolution, Resolver};
pub use types::{FailureKind, FetchError};
