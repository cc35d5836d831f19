//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::StoreError;
use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;

/// A stored link. Everything but the counter is fixed at insert time.
#[derive(Debug)]
struct StoredLink {
    target_url: String,
    created_at: DateTime<Utc>,
    clicks: AtomicU64,
}

impl StoredLink {
    fn to_record(&self, code: &str, click_count: u64) -> LinkRecord {
        LinkRecord {
            code: code.to_string(),
            target_url: self.target_url.clone(),
            created_at: self.created_at,
            click_count,
        }
    }
}

/// Process-local short-link store.
///
/// Backed by a sharded [`DashMap`]: inserts go through the entry API, which
/// holds the shard write lock across the existence check and the insert, so
/// two writers can never claim the same code. Each record carries an
/// [`AtomicU64`] counter; increments and reads both use `SeqCst`, which makes
/// every `Stats` read observe all increments that completed before it.
///
/// No lock is held beyond the map operation itself.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, StoredLink>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert_if_absent(&self, record: LinkRecord) -> Result<bool, StoreError> {
        match self.links.entry(record.code) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(StoredLink {
                    target_url: record.target_url,
                    created_at: record.created_at,
                    clicks: AtomicU64::new(record.click_count),
                });
                Ok(true)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, StoreError> {
        Ok(self.links.get(code).map(|link| {
            let clicks = link.clicks.load(Ordering::SeqCst);
            link.to_record(link.key(), clicks)
        }))
    }

    async fn record_click(&self, code: &str) -> Result<Option<LinkRecord>, StoreError> {
        Ok(self.links.get(code).map(|link| {
            let clicks = link.clicks.fetch_add(1, Ordering::SeqCst) + 1;
            link.to_record(link.key(), clicks)
        }))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.links.len() as u64)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
