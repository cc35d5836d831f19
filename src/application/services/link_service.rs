//! Short link creation, resolution and statistics.

use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

use crate::domain::StoreError;
use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{code_from_counter, generate_code};
use crate::utils::url_normalizer::validate_target_url;

/// Random attempts before switching to counter-derived codes.
const MAX_RANDOM_ATTEMPTS: usize = 10;

/// Service implementing the three short-link operations.
///
/// Atomicity lives in the repository; this service owns the allocation
/// policy: up to [`MAX_RANDOM_ATTEMPTS`] random codes, then codes derived from
/// a monotonically increasing counter until one is free.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    fallback_counter: AtomicU64,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            link_repository,
            fallback_counter: AtomicU64::new(0),
        }
    }

    /// Creates a short link for `target_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUrl`] if the URL is not an absolute
    /// `http`/`https` URL. Nothing is stored in that case.
    ///
    /// Returns [`StoreError::Backend`] if an external backend fails.
    pub async fn shorten(&self, target_url: &str) -> Result<LinkRecord, StoreError> {
        validate_target_url(target_url).map_err(|e| StoreError::invalid_url(e.to_string()))?;

        let created_at = Utc::now();

        for attempt in 1..=MAX_RANDOM_ATTEMPTS {
            let record = LinkRecord::new(generate_code(), target_url.to_string(), created_at);
            let code = record.code.clone();

            if self.link_repository.insert_if_absent(record.clone()).await? {
                info!("Created short link {} -> {}", code, target_url);
                return Ok(record);
            }

            debug!("Short code collision on attempt {}: {}", attempt, code);
        }

        warn!(
            "No free random code after {} attempts, falling back to counter codes",
            MAX_RANDOM_ATTEMPTS
        );

        loop {
            let counter = self.fallback_counter.fetch_add(1, Ordering::Relaxed);
            let record = LinkRecord::new(
                code_from_counter(counter),
                target_url.to_string(),
                created_at,
            );

            if self.link_repository.insert_if_absent(record.clone()).await? {
                info!(
                    "Created short link {} -> {} (counter {})",
                    record.code, target_url, counter
                );
                return Ok(record);
            }
        }
    }

    /// Resolves `code` for a redirect and counts the click.
    ///
    /// The returned record's `click_count` includes this click.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link owns `code`.
    pub async fn resolve(&self, code: &str) -> Result<LinkRecord, StoreError> {
        match self.link_repository.record_click(code).await? {
            Some(record) => {
                debug!("Resolved {} (clicks: {})", code, record.click_count);
                Ok(record)
            }
            None => {
                debug!("Resolve miss for {}", code);
                Err(StoreError::not_found(code))
            }
        }
    }

    /// Returns the current state of the link owning `code` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link owns `code`.
    pub async fn stats(&self, code: &str) -> Result<LinkRecord, StoreError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| StoreError::not_found(code))
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<u64, StoreError> {
        self.link_repository.count().await
    }

    /// Checks that the storage backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.link_repository.health_check().await
    }

    /// Name of the storage backend.
    pub fn backend_name(&self) -> &'static str {
        self.link_repository.backend_name()
    }
}
