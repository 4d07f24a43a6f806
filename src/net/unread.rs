//! Unread message count endpoint.
//!
//! The server answers `GET /messages/unread_count` with
//! `{"unread_count": <non-negative integer>}`. Anything else is a failed
//! cycle, reported and skipped.

#[cfg(test)]
#[path = "unread_test.rs"]
mod unread_test;

use futures::future::LocalBoxFuture;
use serde::Deserialize;

use crate::error::EnhanceError;

#[derive(Debug, Deserialize)]
struct UnreadResponse {
    unread_count: u32,
}

/// Extract the count from a response body.
///
/// # Errors
///
/// Returns [`EnhanceError::UnreadParse`] for non-JSON bodies, a missing
/// field, or a negative / non-integer count.
pub fn parse_unread_body(body: &str) -> Result<u32, EnhanceError> {
    serde_json::from_str::<UnreadResponse>(body)
        .map(|resp| resp.unread_count)
        .map_err(|e| EnhanceError::UnreadParse(e.to_string()))
}

/// Where unread counts come from. Tests substitute canned results.
pub trait UnreadSource {
    fn fetch_unread(&self) -> LocalBoxFuture<'static, Result<u32, EnhanceError>>;
}

/// Same-origin HTTP source via `gloo-net`.
#[cfg(feature = "hydrate")]
pub struct HttpUnreadSource {
    endpoint: String,
}

#[cfg(feature = "hydrate")]
impl HttpUnreadSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[cfg(feature = "hydrate")]
impl UnreadSource for HttpUnreadSource {
    fn fetch_unread(&self) -> LocalBoxFuture<'static, Result<u32, EnhanceError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let resp = gloo_net::http::Request::get(&endpoint)
                .send()
                .await
                .map_err(|e| EnhanceError::UnreadRequest(e.to_string()))?;
            let status = resp.status();
            if !(200..300).contains(&status) {
                return Err(EnhanceError::UnreadStatus { status });
            }
            let body = resp.text().await.map_err(|e| EnhanceError::UnreadRequest(e.to_string()))?;
            parse_unread_body(&body)
        })
    }
}
