//! Recording transport for tests.
//!
//! Responses are queued per (method, url). The last queued response for a
//! route keeps answering once the queue is down to one entry.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use super::error::{ApiError, ApiResult};
use super::http::{HttpRequest, HttpResponse, Method, Transport};

pub const TEST_BASE_URL: &str = "http://api.test/api/";

/// Absolute URL for an endpoint under `TEST_BASE_URL`
pub fn url(path: &str) -> String {
    format!("{}{}", TEST_BASE_URL, path)
}

type SendHook = Rc<dyn Fn(&HttpRequest)>;

#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<(Method, String), VecDeque<ApiResult<HttpResponse>>>>,
    requests: RefCell<Vec<HttpRequest>>,
    on_send: RefCell<Option<SendHook>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, method: Method, path: &str, error: ApiError) {
        self.push(method, path, Err(error));
    }

    fn push(&self, method: Method, path: &str, result: ApiResult<HttpResponse>) {
        self.routes
            .borrow_mut()
            .entry((method, url(path)))
            .or_default()
            .push_back(result);
    }

    /// Runs while a request is "in flight", before its response is produced
    pub fn on_send<F>(&self, hook: F)
    where
        F: Fn(&HttpRequest) + 'static,
    {
        *self.on_send.borrow_mut() = Some(Rc::new(hook));
    }

    /// Every request sent so far, in order
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        let target = url(path);
        self.requests
            .borrow()
            .iter()
            .filter(|request| request.method == method && request.url == target)
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let key = (request.method, request.url.clone());
        let hook = self.on_send.borrow().clone();
        if let Some(hook) = hook {
            hook(&request);
        }
        self.requests.borrow_mut().push(request);

        let mut routes = self.routes.borrow_mut();
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().expect("queue has entries"),
            Some(queue) => match queue.front() {
                Some(result) => result.clone(),
                None => Err(ApiError::Network(format!("no mock response for {}", key.1))),
            },
            None => Err(ApiError::Http {
                status: 404,
                body: format!("no mock route for {} {}", key.0.as_str(), key.1),
            }),
        }
    }
}
