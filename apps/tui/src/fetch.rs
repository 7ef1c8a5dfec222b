//! HTTP access to the remote API.
//!
//! Components never talk to `reqwest` directly: they go through [`Fetcher`],
//! which lets the whole render pipeline run against an in-memory fake.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::ApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Error: {status} from {url}")]
    Status { status: u16, url: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and decode the body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("multiverse/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Fetch `url` and decode it into `T`.
///
/// Any failure (transport, status, or a body of the wrong shape) is logged and
/// collapses to `None`; callers substitute their own placeholder.
pub async fn fetch_data<T, F>(fetcher: &F, url: &str) -> Option<T>
where
    T: DeserializeOwned,
    F: Fetcher + ?Sized,
{
    debug!(url, "fetching");

    let value = match fetcher.get_json(url).await {
        Ok(value) => value,
        Err(e) => {
            error!(url, error = %e, "fetch failed");
            return None;
        }
    };

    match serde_json::from_value(value) {
        Ok(data) => Some(data),
        Err(e) => {
            let e = FetchError::Decode(e.to_string());
            error!(url, error = %e, "fetch returned unusable data");
            None
        }
    }
}
