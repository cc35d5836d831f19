//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::LinkRecord;

/// Statistics for a single short link.
///
/// `created_at` serializes as RFC 3339 in UTC.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub short_code: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<LinkRecord> for StatsResponse {
    fn from(record: LinkRecord) -> Self {
        Self {
            url: record.target_url,
            short_code: record.code,
            clicks: record.click_count,
            created_at: record.created_at,
        }
    }
}
