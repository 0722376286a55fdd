use std::sync::Arc;

use hn_core::{derive_host, is_story_link, EnrichedItem, Item, ItemType};

fn enriched(kind: ItemType, url: &str) -> EnrichedItem {
    EnrichedItem::new(Arc::new(Item {
        id: 1,
        kind,
        url: url.to_string(),
        score: 900,
        time: 1_700_000_000,
        ..Item::default()
    }))
}

#[test]
fn host_strips_leading_www() {
    assert_eq!(derive_host("http://www.example.com/x"), "example.com");
}

#[test]
fn host_keeps_plain_subdomain() {
    assert_eq!(derive_host("https://sub.example.org"), "sub.example.org");
}

#[test]
fn host_is_empty_for_missing_or_malformed_url() {
    assert_eq!(derive_host(""), "");
    assert_eq!(derive_host("not a url"), "");
    assert_eq!(derive_host("example.com/no-scheme"), "");
}

#[test]
fn story_with_link_qualifies() {
    let item = enriched(ItemType::Story, "https://example.com/post");
    assert_eq!(item.host, "example.com");
    assert!(is_story_link(&item));
}

#[test]
fn malformed_link_still_qualifies_with_empty_host() {
    let item = enriched(ItemType::Story, "::garbage::");
    assert_eq!(item.host, "");
    assert!(is_story_link(&item));
}

#[test]
fn comments_and_linkless_stories_never_qualify() {
    assert!(!is_story_link(&enriched(ItemType::Comment, "https://example.com")));
    assert!(!is_story_link(&enriched(ItemType::Story, "")));
    assert!(!is_story_link(&enriched(ItemType::Job, "https://example.com/jobs")));
    assert!(!is_story_link(&enriched(
        ItemType::Other("story ".to_string()),
        "https://example.com"
    )));
}
