//! Repository trait for the short-link store.

use crate::domain::entities::LinkRecord;
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Storage contract for short links.
///
/// Implementations own the synchronization: callers may share one instance
/// across any number of concurrent tasks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - process-local map
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - external key-value backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores `record` unless its code is already taken.
    ///
    /// The existence check and the insert happen as one atomic step with
    /// respect to every other call on the same repository.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the record was stored
    /// - `Ok(false)` if another record already owns the code (nothing changes)
    async fn insert_if_absent(&self, record: LinkRecord) -> Result<bool, StoreError>;

    /// Finds a record by exact code match without touching its counter.
    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, StoreError>;

    /// Atomically adds one click to the record and returns it.
    ///
    /// The returned `click_count` includes the increment made by this call.
    /// Returns `Ok(None)` when no record owns `code`; no state is created.
    async fn record_click(&self, code: &str) -> Result<Option<LinkRecord>, StoreError>;

    /// Number of stored records.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Checks that the backend can serve requests.
    async fn health_check(&self) -> bool;

    /// Short backend identifier for logs and health output.
    fn backend_name(&self) -> &'static str;
}
