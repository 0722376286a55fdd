use std::sync::Arc;

use url::Url;

use crate::{Item, ItemId, ItemType};

/// An item paired with the display host of its link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedItem {
    pub item: Arc<Item>,
    pub host: String,
}

impl EnrichedItem {
    pub fn new(item: Arc<Item>) -> Self {
        let host = derive_host(&item.url);
        Self { item, host }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }
}

/// Hostname of `raw` without a leading `www.`; empty when `raw` is empty or
/// does not parse as an absolute URL.
pub fn derive_host(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw.trim()) else {
        return String::new();
    };
    let host = parsed
        .host_str()
        .unwrap_or_default()
        .trim_start_matches('[')
        .trim_end_matches(']');
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// A qualifying story: type `story` with a non-empty link.
pub fn is_story_link(item: &EnrichedItem) -> bool {
    item.item.kind == ItemType::Story && !item.item.url.is_empty()
}
