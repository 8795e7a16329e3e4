//! Scripted `HttpClient` for driving the page controller in tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use taskdesk::http::{HttpClient, HttpError, HttpResponse, RequestBody};
use taskdesk::page::{Page, PageState};

pub struct MockHttp {
    replies: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    calls: Mutex<Vec<(String, RequestBody)>>,
    observed: Mutex<Vec<PageState>>,
    page: Option<Page>,
    delay: Option<Duration>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            observed: Mutex::new(Vec::new()),
            page: None,
            delay: None,
        }
    }

    /// Records a page snapshot whenever a request is issued.
    pub fn observing(page: &Page) -> Self {
        Self {
            page: Some(page.clone()),
            ..Self::new()
        }
    }

    /// Holds every reply back for `delay` before answering.
    pub fn with_delay(self, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..self
        }
    }

    pub fn reply_json(self, body: &str) -> Self {
        self.push(Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        }))
    }

    pub fn reply_status(self, status: u16, body: &str) -> Self {
        self.push(Err(HttpError::Status {
            status,
            body: body.to_string(),
        }))
    }

    pub fn reply_transport_error(self) -> Self {
        self.push(Err(HttpError::Transport("connection refused".into())))
    }

    fn push(self, reply: Result<HttpResponse, HttpError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<(String, RequestBody)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn observed(&self) -> Vec<PageState> {
        self.observed.lock().unwrap().clone()
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl HttpClient for MockHttp {
    async fn post(&self, path: &str, body: RequestBody) -> Result<HttpResponse, HttpError> {
        if let Some(page) = &self.page {
            self.observed.lock().unwrap().push(page.snapshot());
        }
        self.calls.lock().unwrap().push((path.to_string(), body));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Transport("no scripted reply".into())))
    }
}
