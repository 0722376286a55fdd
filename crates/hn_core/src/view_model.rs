use std::time::Duration;

use crate::{EnrichedItem, ItemId};

pub const DISCUSSION_BASE: &str = "https://news.ycombinator.com/item?id=";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrontPageView {
    pub rows: Vec<StoryRowView>,
    pub requested: usize,
    pub elapsed: Duration,
    pub elapsed_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRowView {
    pub rank: usize,
    pub id: ItemId,
    pub title: String,
    pub url: String,
    pub host: String,
    pub score: i64,
    pub by: String,
    pub comments: u64,
    pub age: String,
    pub discussion_url: String,
}

impl FrontPageView {
    /// Build rows in the order given; ranks start at 1.
    pub fn new(stories: &[EnrichedItem], requested: usize, elapsed: Duration, now_unix: i64) -> Self {
        let rows = stories
            .iter()
            .enumerate()
            .map(|(index, story)| StoryRowView::new(index + 1, story, now_unix))
            .collect();
        Self {
            rows,
            requested,
            elapsed,
            elapsed_label: format!("{:.2?}", elapsed),
        }
    }

    /// Fewer stories than requested were available.
    pub fn is_short(&self) -> bool {
        self.rows.len() < self.requested
    }
}

impl StoryRowView {
    fn new(rank: usize, story: &EnrichedItem, now_unix: i64) -> Self {
        let item = &story.item;
        Self {
            rank,
            id: item.id,
            title: item.title.clone(),
            url: item.url.clone(),
            host: story.host.clone(),
            score: item.score,
            by: item.by.clone(),
            comments: item.descendants,
            age: format_age(item.time, now_unix),
            discussion_url: format!("{DISCUSSION_BASE}{}", item.id),
        }
    }
}

/// Relative age label such as `3 hours ago`. Timestamps in the future read
/// as `just now`.
pub fn format_age(created_unix: i64, now_unix: i64) -> String {
    let secs = now_unix.saturating_sub(created_unix);
    let (value, unit) = match secs {
        s if s < 60 => return "just now".to_string(),
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s => (s / 86_400, "day"),
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}
