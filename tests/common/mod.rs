#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderValue;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;
use wikiviews::application::services::PageviewService;
use wikiviews::domain::http_client::{
    HttpClient, TransportError, UpstreamRequest, UpstreamResponse,
};
use wikiviews::state::AppState;

pub const BASE_URL: &str = "http://upstream.test/per-article/en.wikipedia.org/all-access/all-agents";

pub const ORCA_BODY: &str = r#"{"items":[{"project":"en.wikipedia","article":"Orca","granularity":"monthly","timestamp":"2024020100","access":"all-access","agent":"all-agents","views":250000}]}"#;

/// Upstream stand-in that replays one canned result and records every request.
pub struct StubClient {
    reply: Result<UpstreamResponse, TransportError>,
    requests: Mutex<Vec<UpstreamRequest>>,
}

impl StubClient {
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(UpstreamResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(TransportError(message.to_string())),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubClient {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

pub fn create_test_state(client: Arc<StubClient>) -> AppState {
    let service = PageviewService::new(
        client as Arc<dyn HttpClient>,
        Url::parse(BASE_URL).unwrap(),
        HeaderValue::from_static("WikiViews/1.0"),
        Duration::from_secs(5),
    );

    AppState::new(Arc::new(service))
}
