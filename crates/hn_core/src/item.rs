use std::fmt;

use serde::Deserialize;

pub type ItemId = u64;

/// Kind of an upstream item.
///
/// Values the API may add later are kept verbatim in `Other` so nothing is
/// lost when an item round-trips through the cache.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ItemType {
    Story,
    Comment,
    Job,
    Poll,
    PollOpt,
    Ask,
    Other(String),
}

impl Default for ItemType {
    fn default() -> Self {
        ItemType::Other(String::new())
    }
}

impl ItemType {
    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Story => "story",
            ItemType::Comment => "comment",
            ItemType::Job => "job",
            ItemType::Poll => "poll",
            ItemType::PollOpt => "pollopt",
            ItemType::Ask => "ask",
            ItemType::Other(raw) => raw,
        }
    }
}

impl From<String> for ItemType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "story" => ItemType::Story,
            "comment" => ItemType::Comment,
            "job" => ItemType::Job,
            "poll" => ItemType::Poll,
            "pollopt" => ItemType::PollOpt,
            "ask" => ItemType::Ask,
            _ => ItemType::Other(raw),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record as served by `item/{id}.json`.
///
/// Missing fields decode to their zero value. Items are never mutated once
/// they leave the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: ItemId,
    pub by: String,
    pub descendants: u64,
    pub kids: Vec<ItemId>,
    pub score: i64,
    /// Creation time, unix seconds.
    pub time: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ItemType,
    pub text: String,
    pub url: String,
}
