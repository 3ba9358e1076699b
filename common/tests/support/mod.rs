//! Scripted transport: answers by `(method, url)` and records every request.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use common::client::{ApiClient, HttpTransport};
use common::config::ApiConfig;
use common::error::{Error, Result};
use common::requests::{ApiRequest, ApiResponse, Method};

pub const API: &str = "http://api.test";
pub const GEO: &str = "http://geo.test";

#[derive(Default)]
pub struct MockTransport {
    answers: RefCell<HashMap<(Method, String), VecDeque<Result<ApiResponse>>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn answer(&self, method: Method, url: &str, status: u16, body: &str) -> &Self {
        self.answers
            .borrow_mut()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self, method: Method, url: &str) -> &Self {
        self.answers
            .borrow_mut()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(Err(Error::Transport("connection refused".into())));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn count(&self, method: Method, url: &str) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let key = (request.method, request.url.clone());
        self.sent.borrow_mut().push(request);
        self.answers
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(ApiResponse::new(404, "")))
    }
}

pub fn client() -> ApiClient<MockTransport> {
    ApiClient::new(MockTransport::default(), ApiConfig::new(API, GEO))
}

pub fn api(path: &str) -> String {
    format!("{API}{path}")
}

pub fn geo(path: &str) -> String {
    format!("{GEO}{path}")
}
