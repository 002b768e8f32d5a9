//! HTTP access to the planning backend.
//!
//! Every call races a timeout; failures are mapped into [`ApiError`] so page
//! controllers only deal with one error type.

use std::future::Future;

use contracts::shared::api::ApiError;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, File, FormData};

use super::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Full URL with a typed query string; `None` fields are left out.
    pub fn url_with<Q: Serialize>(&self, path: &str, query: &Q) -> Result<String, ApiError> {
        let qs = serde_qs::to_string(query)
            .map_err(|e| ApiError::Validation(format!("invalid query: {e}")))?;
        Ok(if qs.is_empty() {
            self.url(path)
        } else {
            format!("{}?{}", self.url(path), qs)
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Request::get(&self.url(path))).await?;
        decode(response).await
    }

    pub async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let url = self.url_with(path, query)?;
        let response = self.send(Request::get(&url)).await?;
        decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send_with(Request::post(&self.url(path)), |b| b.json(body))
            .await?;
        decode(response).await
    }

    /// POST without a body (sync triggers, generate, reset).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Request::post(&self.url(path))).await?;
        decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send_with(Request::put(&self.url(path)), |b| b.json(body))
            .await?;
        decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Request::delete(&self.url(path))).await?;
        decode::<serde_json::Value>(response).await.map(|_| ())
    }

    /// DELETE addressed by query parameters instead of a path id.
    pub async fn delete_with<Q: Serialize>(&self, path: &str, query: &Q) -> Result<(), ApiError> {
        let url = self.url_with(path, query)?;
        let response = self.send(Request::delete(&url)).await?;
        decode::<serde_json::Value>(response).await.map(|_| ())
    }

    /// Multipart upload with the file under the `file` field.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, file: &File) -> Result<T, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_error)?;
        let response = self
            .send_with(Request::post(&self.url(path)), move |b| b.body(form))
            .await?;
        decode(response).await
    }

    /// Direct navigation for server-generated downloads.
    pub fn open_in_new_tab(&self, url: &str) -> Result<(), ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        window
            .open_with_url_and_target(url, "_blank")
            .map(|_| ())
            .map_err(js_error)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        self.send_with(builder, |b| b.build()).await
    }

    async fn send_with<F>(&self, builder: RequestBuilder, finish: F) -> Result<Response, ApiError>
    where
        F: FnOnce(RequestBuilder) -> Result<Request, gloo_net::Error>,
    {
        let controller = AbortController::new().map_err(js_error)?;
        let request = finish(builder.abort_signal(Some(&controller.signal())))
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let timeout_ms = self.timeout_ms;
        let url = request.url();
        match within(request.send(), TimeoutFuture::new(timeout_ms)).await {
            Some(Ok(response)) => {
                log::debug!("{url} -> {}", response.status());
                Ok(response)
            }
            Some(Err(e)) => {
                log::error!("request failed: {url}: {e}");
                Err(ApiError::Network(e.to_string()))
            }
            None => {
                controller.abort();
                log::warn!("request timed out after {timeout_ms} ms: {url}");
                Err(ApiError::Network("timeout".into()))
            }
        }
    }
}

/// Output of `work`, or `None` when `deadline` finishes first. The loser is
/// dropped, which also clears a pending timer.
async fn within<W, D>(work: W, deadline: D) -> Option<W::Output>
where
    W: Future,
    D: Future<Output = ()>,
{
    pin_mut!(work);
    pin_mut!(deadline);
    match select(work, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::from_response(status, &text));
    }
    let body = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn test_within_returns_finished_work() {
        assert_eq!(block_on(within(ready(7), pending::<()>())), Some(7));
    }

    #[test]
    fn test_within_gives_up_at_deadline() {
        assert_eq!(block_on(within(pending::<i32>(), ready(()))), None);
    }
}
