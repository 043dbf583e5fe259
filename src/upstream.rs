use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.chucknorris.io";

/// Raw outcome of one upstream GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

/// HTTP access to the joke API.
///
/// Transport failures are returned as errors; any HTTP status, including
/// 4xx/5xx, is a successful [`UpstreamReply`].
#[async_trait]
pub trait JokeApi: Send + Sync {
    fn base_url(&self) -> &str;

    async fn get(&self, url: &str) -> anyhow::Result<UpstreamReply>;
}

/// Builds the random-joke endpoint, filtered by `category` when one is given
pub fn random_joke_url(base_url: &str, category: Option<&str>) -> String {
    let base_url = base_url.trim_end_matches('/');
    match category {
        Some(category) => format!(
            "{}/jokes/random?category={}",
            base_url,
            urlencoding::encode(category)
        ),
        None => format!("{}/jokes/random", base_url),
    }
}

/// `reqwest`-backed client for api.chucknorris.io
#[derive(Clone)]
pub struct ChuckNorrisApi {
    client: reqwest::Client,
    base_url: String,
}

impl ChuckNorrisApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl JokeApi for ChuckNorrisApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> anyhow::Result<UpstreamReply> {
        info!("Calling joke API: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        info!("Received response status: {}", status);

        // Read the body on every status so the connection goes back to the pool
        let body = response.text().await?;
        debug!("Response body: {}", body);

        Ok(UpstreamReply { status, body })
    }
}
