//! Score sheet retrieval.

use crate::LoadError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, RequestInit, Response};

/// Fetch `url` and return the response body as text.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let request_error = |reason: String| LoadError::Request {
        url: url.to_string(),
        reason,
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| request_error(format!("{e:?}")))?;

    let window = window().ok_or_else(|| request_error("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| request_error(format!("{e:?}")))?
        .dyn_into::<Response>()
        .map_err(|_| request_error("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body_error = |e: JsValue| LoadError::Body {
        url: url.to_string(),
        reason: format!("{e:?}"),
    };
    let text = JsFuture::from(response.text().map_err(body_error)?)
        .await
        .map_err(body_error)?;
    text.as_string().ok_or_else(|| LoadError::Body {
        url: url.to_string(),
        reason: "body is not text".to_string(),
    })
}
