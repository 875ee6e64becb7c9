//! Data client for the statistics API.
//!
//! The network itself sits behind [`HttpTransport`] so the same client runs
//! on the browser `fetch` API and on a native HTTP stack.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::endpoints::Endpoint;
use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}

/// One GET request, resolved to a status and a text body.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
    base_url: String,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Rc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint, limit: Option<u32>) -> String {
        endpoint.url(&self.base_url, limit)
    }

    /// Single attempt: no retry, no timeout beyond the transport's own.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        limit: Option<u32>,
    ) -> Result<T, FetchError> {
        let url = self.url(endpoint, limit);
        log::debug!("GET {url}");

        let response = self.transport.get(&url).await?;
        decode_response(response)
    }
}

pub fn decode_response<T: DeserializeOwned>(response: RawResponse) -> Result<T, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Http {
            status: response.status,
            body: response.body.trim().to_string(),
        });
    }

    serde_json::from_str(&response.body).map_err(|error| FetchError::Decode {
        issue: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChartPayload, TotalCount};
    use crate::test_support::ScriptedTransport;

    #[test]
    fn non_success_status_keeps_body() {
        let result = decode_response::<TotalCount>(RawResponse::new(503, " db unavailable\n"));
        assert_eq!(
            result,
            Err(FetchError::Http {
                status: 503,
                body: "db unavailable".to_string()
            })
        );
    }

    #[test]
    fn boundary_statuses() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(299, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(300, "").is_success());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let result = decode_response::<TotalCount>(RawResponse::new(200, "<html>"));
        assert!(matches!(result, Err(FetchError::Decode { .. })));

        let result = decode_response::<TotalCount>(RawResponse::new(200, r#"{"total":3}"#));
        match result {
            Err(FetchError::Decode { issue }) => assert!(issue.contains("count")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_json_requests_the_endpoint_url() -> Result<(), FetchError> {
        let transport = Rc::new(ScriptedTransport::default());
        transport.respond(
            "http://api.test/api/top-actors?limit=5",
            200,
            r#"{"labels":["A","B"],"datasets":[{"label":"Films","data":[3,5]}]}"#,
        );
        let client = ApiClient::new(transport.clone(), "http://api.test/");

        let payload: ChartPayload = client.fetch_json(Endpoint::TopActors, Some(5)).await?;

        assert_eq!(payload.labels, vec!["A", "B"]);
        assert_eq!(
            transport.requests(),
            vec!["http://api.test/api/top-actors?limit=5".to_string()]
        );
        Ok(())
    }

    #[tokio::test]
    async fn transport_failures_pass_through() {
        let transport = Rc::new(ScriptedTransport::default());
        let client = ApiClient::new(transport, "");

        let result = client
            .fetch_json::<TotalCount>(Endpoint::TotalWatched, None)
            .await;
        assert!(matches!(result, Err(FetchError::Transport { .. })));
    }
}
