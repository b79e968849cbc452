//! Scripted fakes for the storage, navigation, and transport seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use http::StatusCode;
use serde_json::Value;

use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::{ApiError, ApiRequest, ApiResponse};
use crate::util::navigation::Navigator;
use crate::util::storage::{KeyValueStore, MemoryStorage};

/// Replies with queued results in order and records every request sent.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    sent: Mutex<Vec<(String, ApiRequest)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(ApiResponse::new(StatusCode::from_u16(status).unwrap(), body)));
        self
    }

    pub fn fail(self, err: ApiError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn sent(&self) -> Vec<(String, ApiRequest)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for Arc<MockTransport> {
    async fn send(&self, url: &str, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.lock().unwrap().push((url.to_owned(), request));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

/// Memory storage that also counts removals per key.
#[derive(Default)]
pub struct RecordingStorage {
    inner: MemoryStorage,
    removals: Mutex<Vec<String>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn removals_of(&self, key: &str) -> usize {
        self.removals.lock().unwrap().iter().filter(|k| k.as_str() == key).count()
    }

    pub fn total_removals(&self) -> usize {
        self.removals.lock().unwrap().len()
    }
}

impl KeyValueStore for RecordingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.inner.set(key, value);
    }

    fn remove(&self, key: &str) {
        self.removals.lock().unwrap().push(key.to_owned());
        self.inner.remove(key);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

/// Handles to every fake wired into one client.
pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub storage: Arc<RecordingStorage>,
    pub navigator: Arc<RecordingNavigator>,
    pub api: Arc<ApiClient<Arc<MockTransport>>>,
}

pub fn harness(transport: MockTransport) -> Harness {
    let transport = Arc::new(transport);
    let storage = Arc::new(RecordingStorage::new());
    let navigator = Arc::new(RecordingNavigator::default());
    let api = Arc::new(ApiClient::new(
        "http://api.test/api",
        transport.clone(),
        storage.clone(),
        navigator.clone(),
    ));
    Harness { transport, storage, navigator, api }
}
