//! fetch()-based adapters for the chat backend, via gloo-net.
//!
//! Every call is a single attempt raced against the configured timeout.
//! Non-2xx statuses, transport failures and bad bodies all come back as
//! `WidgetError`; deciding what the visitor sees is left to the core.

pub mod chat;
pub mod seminars;

pub use chat::HttpChatClient;
pub use seminars::HttpSeminarClient;

use std::future::Future;
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};

use widget_types::{Result, WidgetError};

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T> {
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| WidgetError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| WidgetError::Network(e.to_string()))?;
    read_json(response).await
}

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| WidgetError::Network(e.to_string()))?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(WidgetError::Http { status, body });
    }

    response
        .json()
        .await
        .map_err(|e| WidgetError::Decode(e.to_string()))
}

/// Race `fut` against a timer. A zero timeout disables the race.
pub async fn with_timeout<T>(timeout_ms: u64, fut: impl Future<Output = Result<T>>) -> Result<T> {
    if timeout_ms == 0 {
        return fut.await;
    }
    let timer = TimeoutFuture::new(timeout_ms.min(u32::MAX as u64) as u32);
    match select(Box::pin(fut), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(WidgetError::Timeout(timeout_ms)),
    }
}
