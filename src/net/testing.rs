//! In-memory transport stub shared by the native test suites.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::net::gateway::{HttpRequest, HttpResponse, TokenSource, Transport, TransportError};

/// Scripted transport: plays back queued responses in order and records
/// every request it sees for later assertions.
#[derive(Default)]
pub struct StubTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    log: Rc<RefCell<Vec<HttpRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail(self, error: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    /// Handle onto the request log; clone before handing the transport to
    /// a gateway.
    pub fn log(&self) -> Rc<RefCell<Vec<HttpRequest>>> {
        Rc::clone(&self.log)
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.log.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Unreachable("no stub response queued".to_owned())))
    }
}

pub fn no_token() -> TokenSource {
    Rc::new(|| None)
}

pub fn fixed_token(token: &str) -> TokenSource {
    let token = token.to_owned();
    Rc::new(move || Some(token.clone()))
}
