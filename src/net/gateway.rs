//! The request gateway: the single chokepoint for all outbound API calls.
//!
//! ARCHITECTURE
//! ============
//! Every request is assembled here (base URL join, JSON content type,
//! request id, bearer header) and every response or transport failure is
//! interpreted here. Centralizing both directions gives cross-cutting
//! concerns one home; today that is logging, and a forced logout on 401
//! would land in `exchange` without touching any call site.
//!
//! The gateway does not know how login works. It reads the current bearer
//! token through an injected [`TokenSource`], so it depends on "get the
//! current token" and nothing else of the session.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged once at the chokepoint and then propagated
//! unchanged as [`ApiError`]; nothing is swallowed or retried.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Default per-request timeout applied by the browser transport.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Capability to read the current bearer token. Injected by the session
/// layer; returns `None` when no operator is logged in.
pub type TokenSource = Rc<dyn Fn() -> Option<String>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully assembled outbound request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First value of the named header, case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A raw inbound response before interpretation.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Failure below the HTTP layer: no response reached the client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("cannot reach server")]
    Unreachable(String),
    #[error("request timed out")]
    TimedOut,
}

/// What a caller of the gateway can observe going wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response received at all.
    #[error("cannot reach server")]
    Unreachable,
    /// The transport gave up waiting and aborted the request.
    #[error("the server took too long to respond")]
    TimedOut,
    /// The server answered with a non-success status.
    #[error("{}", .message.as_deref().unwrap_or("request rejected by server"))]
    Rejected { status: u16, message: Option<String> },
    /// A success response whose body could not be decoded.
    #[error("unexpected response from server: {0}")]
    Decode(String),
}

/// Transport seam under the gateway.
///
/// The browser implementation lives in [`crate::net::browser`]; tests use
/// an in-memory stub. Futures are not `Send`: everything here runs on the
/// single browser thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Base URL for the REST API, from the `FLEETDESK_API_URL` compile-time
/// environment value, defaulting to same-origin `/api`.
#[must_use]
pub fn api_base_url() -> String {
    option_env!("FLEETDESK_API_URL").unwrap_or("/api").to_owned()
}

pub struct Gateway<T: Transport> {
    base_url: String,
    transport: T,
    token_source: TokenSource,
}

impl<T: Transport> Gateway<T> {
    pub fn new(base_url: impl Into<String>, transport: T, token_source: TokenSource) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport, token_source }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.exchange(self.build_request(Method::Get, path, None)).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = encode_body(body)?;
        self.exchange(self.build_request(Method::Post, path, Some(body))).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = encode_body(body)?;
        self.exchange(self.build_request(Method::Put, path, Some(body))).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.exchange(self.build_request(Method::Delete, path, None)).await
    }

    /// Assemble an outbound request. The bearer header is attached only
    /// when a token is currently available; unauthenticated endpoints see
    /// no authorization header at all.
    fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("X-Request-Id".to_owned(), uuid::Uuid::new_v4().to_string()),
        ];
        if let Some(token) = (self.token_source)() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }

    /// Send one request and interpret the outcome. Single inbound hook:
    /// every response and every transport failure passes through here.
    async fn exchange<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let label = format!("{} {}", request.method.as_str(), request.url);

        let result = match self.transport.send(request).await {
            Ok(response) => interpret_response(&response),
            Err(TransportError::TimedOut) => Err(ApiError::TimedOut),
            Err(TransportError::Unreachable(detail)) => {
                leptos::logging::warn!("{label}: transport failure: {detail}");
                Err(ApiError::Unreachable)
            }
        };

        if let Err(error) = &result {
            leptos::logging::warn!("{label}: {error}");
        }
        result
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|error| ApiError::Decode(error.to_string()))
}

/// Map a raw response to a typed result. Success statuses decode the body;
/// everything else becomes [`ApiError::Rejected`] carrying whatever
/// message the error payload offers.
fn interpret_response<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    if (200..300).contains(&response.status) {
        serde_json::from_str(&response.body).map_err(|error| ApiError::Decode(error.to_string()))
    } else {
        Err(ApiError::Rejected {
            status: response.status,
            message: error_message(&response.body),
        })
    }
}

/// Extract a human-readable message from an error payload, preferring
/// `error`, then `message`, then `msg`. `None` when the body is not JSON
/// or carries none of those fields.
fn error_message(body: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(body).ok()?;
    ["error", "message", "msg"]
        .iter()
        .find_map(|key| payload.get(key).and_then(Value::as_str))
        .map(ToOwned::to_owned)
}
