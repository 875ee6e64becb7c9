//! `HttpTransport` over the browser's `fetch`.

use async_trait::async_trait;
use film_stats_core::{FetchError, HttpTransport, RawResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Same-origin GET requests; the body is read as text and decoded by the core.
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let window = web_sys::window().ok_or_else(|| FetchError::Transport {
            message: "no window to fetch from".to_string(),
        })?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        Ok(RawResponse::new(response.status(), body.as_string().unwrap_or_default()))
    }
}

fn js_error(value: JsValue) -> FetchError {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    FetchError::Transport { message }
}

/// Base URL of the API: the page's own origin.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
