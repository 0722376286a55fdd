use std::time::Duration;

use bytes::BytesMut;
use futures_util::StreamExt;
use hn_core::{Item, ItemId};

use crate::decode::{decode_item, decode_top_stories};
use crate::{FailureKind, FetchError};

pub const DEFAULT_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub api_base: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
        }
    }
}

/// Upstream the pool reads from.
#[async_trait::async_trait]
pub trait ItemSource: Send + Sync {
    /// Ranked ids from `topstories.json`.
    async fn top_stories(&self) -> Result<Vec<ItemId>, FetchError>;

    /// A single item; `Ok(None)` when upstream has no record for `id`.
    async fn item(&self, id: ItemId) -> Result<Option<Item>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestItemSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestItemSource {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, FetchError> {
        let base = self.settings.api_base.trim_end_matches('/');
        reqwest::Url::parse(&format!("{base}/{path}"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_body(&self, url: reqwest::Url) -> Result<BytesMut, FetchError> {
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl ItemSource for ReqwestItemSource {
    async fn top_stories(&self) -> Result<Vec<ItemId>, FetchError> {
        let url = self.endpoint("topstories.json")?;
        let body = self.get_body(url).await?;
        Ok(decode_top_stories(&body)?)
    }

    async fn item(&self, id: ItemId) -> Result<Option<Item>, FetchError> {
        let url = self.endpoint(&format!("item/{id}.json"))?;
        let body = self.get_body(url).await?;
        Ok(decode_item(&body)?)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
