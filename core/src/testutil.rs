//! Recording transport fake for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Records every executed request and replays queued responses in order.
/// Queue an `Err` via [`MockTransport::push_transport_error`] to simulate a
/// network-level failure.
pub struct MockTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            responses: RefCell::new(VecDeque::new()),
        }
    }

    /// Queue a response with `status` and `body` (headers empty).
    pub fn push(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    /// Queue a transport-level failure.
    pub fn push_transport_error(&self, msg: &str) {
        self.responses.borrow_mut().push_back(Err(msg.to_string()));
    }

    /// Number of requests executed so far.
    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    /// The `i`-th executed request.
    pub fn request(&self, i: usize) -> HttpRequest {
        self.requests.borrow()[i].clone()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(msg)) => Err(ApiError::Transport(msg)),
            None => panic!("MockTransport: no queued response for request"),
        }
    }
}
