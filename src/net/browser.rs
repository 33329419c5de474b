//! Browser transport for the request gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! timeout. On timeout the in-flight fetch is aborted through an
//! `AbortController` so a hung request cannot hold the UI's loading state
//! open. Server-side (SSR): a stub returning an error, since the REST API
//! is only reachable from the browser.

use async_trait::async_trait;

use crate::net::gateway::{HttpRequest, HttpResponse, REQUEST_TIMEOUT_MS, Transport, TransportError};

/// The transport used by the running application.
#[derive(Clone, Copy, Debug)]
pub struct ClientTransport {
    timeout_ms: u32,
}

impl ClientTransport {
    #[must_use]
    pub fn new() -> Self {
        Self { timeout_ms: REQUEST_TIMEOUT_MS }
    }

    #[must_use]
    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Default for ClientTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Transport for ClientTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::FutureExt;

            use crate::net::gateway::Method;

            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(web_sys::AbortController::signal);

            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
                Method::Put => gloo_net::http::Request::put(&request.url),
                Method::Delete => gloo_net::http::Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            builder = builder.abort_signal(signal.as_ref());

            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|error| TransportError::Unreachable(error.to_string()))?;

            let send = prepared.send().fuse();
            let timeout = gloo_timers::future::TimeoutFuture::new(self.timeout_ms).fuse();
            futures::pin_mut!(send, timeout);

            let response = futures::select! {
                outcome = send => {
                    outcome.map_err(|error| TransportError::Unreachable(error.to_string()))?
                }
                () = timeout => {
                    if let Some(controller) = &controller {
                        controller.abort();
                    }
                    return Err(TransportError::TimedOut);
                }
            };

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, self.timeout_ms);
            Err(TransportError::Unreachable("not available on server".to_owned()))
        }
    }
}
