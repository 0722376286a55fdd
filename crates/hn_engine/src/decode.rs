use hn_core::{Item, ItemId};

use crate::{FailureKind, FetchError};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed {what} json at line {line}, column {column}: {message}")]
    Malformed {
        what: &'static str,
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<DecodeError> for FetchError {
    fn from(err: DecodeError) -> Self {
        FetchError::new(FailureKind::Decode, err.to_string())
    }
}

/// Decode a `topstories.json` body: a JSON array of ids, in rank order.
pub fn decode_top_stories(bytes: &[u8]) -> Result<Vec<ItemId>, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| malformed("top stories", err))
}

/// Decode an `item/{id}.json` body. The API answers `null` for ids it does
/// not know, which decodes to `None`.
pub fn decode_item(bytes: &[u8]) -> Result<Option<Item>, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| malformed("item", err))
}

fn malformed(what: &'static str, err: serde_json::Error) -> DecodeError {
    DecodeError::Malformed {
        what,
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_item_is_none() {
        assert_eq!(decode_item(b"null"), Ok(None));
    }

    #[test]
    fn truncated_item_is_malformed() {
        let err = decode_item(br#"{"id": 1, "type": "sto"#).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { what: "item", .. }));
    }

    #[test]
    fn top_stories_keep_rank_order() {
        assert_eq!(decode_top_stories(b"[9, 3, 5]"), Ok(vec![9, 3, 5]));
    }

    #[test]
    fn top_stories_reject_objects() {
        assert!(decode_top_stories(br#"{"ids": []}"#).is_err());
    }
}
