#![allow(dead_code)]

use async_trait::async_trait;
use link_shortener::domain::StoreError;
use link_shortener::domain::entities::LinkRecord;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::MemoryLinkRepository;
use link_shortener::state::AppState;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// State over a fresh in-memory store with a fixed base URL.
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryLinkRepository::new()),
        Some(TEST_BASE_URL.to_string()),
        false,
    )
}

/// State whose short URLs are derived from the request `Host` header.
pub fn create_host_derived_state() -> AppState {
    AppState::new(Arc::new(MemoryLinkRepository::new()), None, false)
}

/// State that prefixes `https://` onto scheme-less input.
pub fn create_assume_https_state() -> AppState {
    AppState::new(
        Arc::new(MemoryLinkRepository::new()),
        Some(TEST_BASE_URL.to_string()),
        true,
    )
}

/// State over a backend that is unreachable.
pub fn create_unavailable_state() -> AppState {
    AppState::new(Arc::new(UnavailableRepository), None, false)
}

/// Seeds a link directly into the store behind `state`.
pub async fn create_test_link(state: &AppState, url: &str) -> LinkRecord {
    state.link_service.shorten(url).await.unwrap()
}

/// Backend whose every operation fails.
pub struct UnavailableRepository;

#[async_trait]
impl LinkRepository for UnavailableRepository {
    async fn insert_if_absent(&self, _record: LinkRecord) -> Result<bool, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<LinkRecord>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn record_click(&self, _code: &str) -> Result<Option<LinkRecord>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "unavailable"
    }
}
