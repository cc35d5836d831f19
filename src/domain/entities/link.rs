//! Link record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its metadata.
///
/// `code`, `target_url` and `created_at` never change after creation.
/// `click_count` only ever grows, one step per successful redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: u64,
}

impl LinkRecord {
    /// Creates a record that has not been clicked yet.
    pub fn new(code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target_url,
            created_at,
            click_count: 0,
        }
    }

    /// Returns a copy of the record carrying the given click count.
    pub fn with_click_count(mut self, click_count: u64) -> Self {
        self.click_count = click_count;
        self
    }
}
