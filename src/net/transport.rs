//! HTTP transports.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Other builds: every send fails with a network error, since the endpoints
//! are only reachable from the browser bundle.

#![allow(clippy::unused_async)]

use std::future::Future;

#[cfg(any(test, feature = "csr"))]
use serde_json::Value;

use super::types::{ApiError, ApiRequest, ApiResponse};
#[cfg(feature = "csr")]
use http::{Method, StatusCode};

/// Sends one fully-prepared request and reports the response verbatim.
///
/// Non-success statuses are returned as `Ok`; classifying them is the
/// client's job.
pub trait Transport: Send + Sync {
    fn send(&self, url: &str, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, url: &str, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = match request.method {
                Method::GET => gloo_net::http::Request::get(url),
                Method::POST => gloo_net::http::Request::post(url),
                Method::PUT => gloo_net::http::Request::put(url),
                Method::DELETE => gloo_net::http::Request::delete(url),
                other => return Err(ApiError::Network(format!("unsupported method {other}"))),
            };
            for (name, value) in &request.headers {
                match value.to_str() {
                    Ok(value) => builder = builder.header(name.as_str(), value),
                    Err(_) => log::warn!("dropping non-ASCII header {name}"),
                }
            }
            let resp = match &request.body {
                Some(body) => {
                    builder
                        .json(body)
                        .map_err(|e| ApiError::Network(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = StatusCode::from_u16(resp.status()).map_err(|e| ApiError::Decode(e.to_string()))?;
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse::new(status, parse_body(&text)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, request);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}

/// Parse a response body as JSON, keeping non-JSON text as a string value.
#[cfg(any(test, feature = "csr"))]
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_body_handles_empty_json_and_text() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  \n"), Value::Null);
        assert_eq!(parse_body(r#"{"message":"nope"}"#), json!({"message": "nope"}));
        assert_eq!(parse_body("Bad Gateway"), json!("Bad Gateway"));
    }

    #[cfg(not(feature = "csr"))]
    #[test]
    fn fetch_transport_is_unavailable_off_browser() {
        let result = futures::executor::block_on(
            FetchTransport.send("http://localhost/api/x", ApiRequest::new(http::Method::GET, "/x")),
        );
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
