//! Native HTTP transport for the core data client.

use std::time::Duration;

use async_trait::async_trait;
use film_stats_core::{FetchError, HttpTransport, RawResponse};
use reqwest::{Client, ClientBuilder};

const USER_AGENT: &str = concat!("film-stats/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| FetchError::Transport {
                message: error.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|error| FetchError::Transport {
            message: format!("Failed to read response text: {error}"),
        })?;

        Ok(RawResponse::new(status, body))
    }
}
