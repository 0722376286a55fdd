//! HN core: pure item model, story classification and view-model helpers.
mod item;
mod story;
mod view_model;

pub use item::{Item, ItemId, ItemType};
pub use story::{derive_host, is_story_link, EnrichedItem};
pub use view_model::{format_age, FrontPageView, StoryRowView, DISCUSSION_BASE};
