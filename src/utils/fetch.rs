//! Network fetching utilities with timeout support.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::FetchError;
use crate::config::FETCH_TIMEOUT_MS;

// =============================================================================
// Timeout
// =============================================================================

/// Await `promise`, giving up with [`FetchError::Timeout`] after `timeout_ms`.
///
/// The timer promise resolves to `undefined`, which a fetch never does.
async fn await_with_timeout(promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let first = JsFuture::from(Promise::race(&Array::of2(&promise, &timer)))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
        })?;

    if first.is_undefined() {
        Err(FetchError::Timeout)
    } else {
        Ok(first)
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch text from a URL using the Fetch API.
///
/// Returns `FetchError::Timeout` if the request takes longer than
/// `FETCH_TIMEOUT_MS`.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let response: Response =
        await_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS)
            .await?
            .dyn_into()
            .map_err(|_| FetchError::InvalidContent)?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
