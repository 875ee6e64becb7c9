use std::rc::Rc;

use async_trait::async_trait;
use film_stats_core::{ApiClient, Dashboard, FetchError, HttpTransport, RawResponse, StyleOverrides};

use crate::app::App;

struct Offline;

#[async_trait(?Send)]
impl HttpTransport for Offline {
    async fn get(&self, _url: &str) -> Result<RawResponse, FetchError> {
        Err(FetchError::Transport {
            message: "offline".to_string(),
        })
    }
}

/// An app whose every request fails with a transport error.
pub fn offline_app() -> App {
    let client = ApiClient::new(Rc::new(Offline), "http://localhost:3000");
    match Dashboard::new(client, &StyleOverrides::default()) {
        Ok(dashboard) => App::new(dashboard),
        Err(error) => panic!("dashboard: {error}"),
    }
}
