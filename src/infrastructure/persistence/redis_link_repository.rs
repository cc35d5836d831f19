//! Redis implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use redis::{AsyncCommands, Client, Script, aio::ConnectionManager};
use tracing::{debug, error, info};

use crate::domain::StoreError;
use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;

/// Claims a code only if its hash does not exist yet, and bumps the record count.
const INSERT_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 1 then
    return 0
end
redis.call('HSET', KEYS[1], 'url', ARGV[1], 'created_at', ARGV[2], 'clicks', ARGV[3])
redis.call('INCR', KEYS[2])
return 1
"#;

/// Increments the counter of an existing record and returns the whole record.
const CLICK_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 0 then
    return false
end
local clicks = redis.call('HINCRBY', KEYS[1], 'clicks', 1)
local fields = redis.call('HMGET', KEYS[1], 'url', 'created_at')
return {fields[1], fields[2], clicks}
"#;

/// Raw record fields as stored in the hash.
type RawRecord = (String, String, u64);

/// Short-link store kept in Redis, one hash per code.
///
/// Layout (with the default `shortlink:` prefix):
///
/// - `shortlink:code:{code}` - hash with `url`, `created_at` (RFC 3339), `clicks`
/// - `shortlink:meta:count` - number of stored records
///
/// Insert and click increment run as Lua scripts, so each is atomic on the
/// server. Reads use a single `HMGET`, which returns one consistent snapshot.
pub struct RedisLinkRepository {
    client: ConnectionManager,
    key_prefix: String,
    insert_script: Script,
    click_script: Script,
}

impl RedisLinkRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> Result<Self, StoreError> {
        info!("Connecting to Redis link store");

        let client = Client::open(redis_url)
            .map_err(|e| StoreError::Backend(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Backend(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis link store");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.to_string(),
            insert_script: Script::new(INSERT_SCRIPT),
            click_script: Script::new(CLICK_SCRIPT),
        })
    }

    fn code_key(&self, code: &str) -> String {
        format!("{}code:{}", self.key_prefix, code)
    }

    fn count_key(&self) -> String {
        format!("{}meta:count", self.key_prefix)
    }
}

fn backend_error(operation: &str, code: &str, e: redis::RedisError) -> StoreError {
    error!("Redis {} error for {}: {}", operation, code, e);
    StoreError::Backend(format!("{} failed: {}", operation, e))
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_record(code: &str, raw: RawRecord) -> Result<LinkRecord, StoreError> {
    let (target_url, created_at, clicks) = raw;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| {
            StoreError::Backend(format!("Corrupt created_at for '{}': {}", code, e))
        })?
        .with_timezone(&Utc);

    Ok(LinkRecord::new(code.to_string(), target_url, created_at).with_click_count(clicks))
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn insert_if_absent(&self, record: LinkRecord) -> Result<bool, StoreError> {
        let key = self.code_key(&record.code);
        let mut conn = self.client.clone();

        let inserted: i64 = self
            .insert_script
            .key(&key)
            .key(self.count_key())
            .arg(&record.target_url)
            .arg(format_timestamp(record.created_at))
            .arg(record.click_count)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| backend_error("INSERT", &record.code, e))?;

        if inserted == 0 {
            debug!("Redis code collision: {}", record.code);
        }

        Ok(inserted == 1)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, StoreError> {
        let key = self.code_key(code);
        let mut conn = self.client.clone();

        let (url, created_at, clicks): (Option<String>, Option<String>, Option<u64>) =
            redis::cmd("HMGET")
                .arg(&key)
                .arg("url")
                .arg("created_at")
                .arg("clicks")
                .query_async(&mut conn)
                .await
                .map_err(|e| backend_error("HMGET", code, e))?;

        match (url, created_at, clicks) {
            (Some(url), Some(created_at), Some(clicks)) => {
                parse_record(code, (url, created_at, clicks)).map(Some)
            }
            _ => Ok(None),
        }
    }

    async fn record_click(&self, code: &str) -> Result<Option<LinkRecord>, StoreError> {
        let key = self.code_key(code);
        let mut conn = self.client.clone();

        let raw: Option<RawRecord> = self
            .click_script
            .key(&key)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| backend_error("CLICK", code, e))?;

        raw.map(|raw| parse_record(code, raw)).transpose()
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let mut conn = self.client.clone();

        let count: Option<u64> = conn
            .get(self.count_key())
            .await
            .map_err(|e| backend_error("GET", "count", e))?;

        Ok(count.unwrap_or(0))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
