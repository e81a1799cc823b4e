//! Transport stand-in for unit tests: records every request and replays
//! queued responses, so request construction can be asserted without a
//! network.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::TadoApiError;
use crate::http::{TadoRequest, Transport};

#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<TadoRequest>>,
    responses: RefCell<VecDeque<Result<Value, TadoApiError>>>,
}

impl MockTransport {
    pub fn new() -> Rc<MockTransport> {
        Rc::new(MockTransport::default())
    }

    /// Queue a response for the next request; with an empty queue requests
    /// answer `null`, which is what write endpoints return anyway.
    pub fn push_response(&self, value: Value) {
        self.responses.borrow_mut().push_back(Ok(value));
    }

    pub fn push_error(&self, error: TadoApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<TadoRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> TadoRequest {
        self.requests.borrow().last().expect("a request was issued").clone()
    }
}

impl Transport for MockTransport {
    fn request(&self, req: &TadoRequest) -> Result<Value, TadoApiError> {
        self.requests.borrow_mut().push(req.clone());
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(Value::Null))
    }
}
