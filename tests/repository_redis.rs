//! Runs against a live Redis when `REDIS_URL` is set; otherwise each test
//! returns early. Every test works under its own key prefix.

use chrono::Utc;
use link_shortener::domain::entities::LinkRecord;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::RedisLinkRepository;
use rand::Rng;
use rand::distr::Alphanumeric;
use std::sync::Arc;

struct TestRedis {
    repo: RedisLinkRepository,
    conn: redis::aio::MultiplexedConnection,
    prefix: String,
}

impl TestRedis {
    async fn connect() -> Option<Self> {
        let Ok(url) = std::env::var("REDIS_URL") else {
            eprintln!("REDIS_URL not set, skipping Redis repository test");
            return None;
        };

        let suffix: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(12)
            .map(char::from)
            .collect();
        let prefix = format!("test:{}:", suffix);

        let repo = RedisLinkRepository::connect(&url, &prefix).await.unwrap();
        let conn = redis::Client::open(url.as_str())
            .unwrap()
            .get_multiplexed_async_connection()
            .await
            .unwrap();

        Some(Self { repo, conn, prefix })
    }

    fn code_key(&self, code: &str) -> String {
        format!("{}code:{}", self.prefix, code)
    }

    async fn cleanup(mut self) {
        delete_prefixed(&mut self.conn, &self.prefix).await;
    }
}

async fn delete_prefixed(conn: &mut redis::aio::MultiplexedConnection, prefix: &str) {
    let keys: Vec<String> = redis::cmd("KEYS")
        .arg(format!("{}*", prefix))
        .query_async(conn)
        .await
        .unwrap();

    if !keys.is_empty() {
        let _: i64 = redis::cmd("DEL").arg(keys).query_async(conn).await.unwrap();
    }
}

fn record(code: &str, url: &str) -> LinkRecord {
    LinkRecord::new(code.to_string(), url.to_string(), Utc::now())
}

#[tokio::test]
async fn test_insert_and_find_by_code() {
    let Some(redis) = TestRedis::connect().await else {
        return;
    };

    let original = record("abc123", "https://example.com/a/b");
    assert!(redis.repo.insert_if_absent(original.clone()).await.unwrap());

    let found = redis.repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found, original);
    assert_eq!(redis.repo.count().await.unwrap(), 1);

    redis.cleanup().await;
}

#[tokio::test]
async fn test_duplicate_insert_keeps_original() {
    let Some(redis) = TestRedis::connect().await else {
        return;
    };

    assert!(
        redis
            .repo
            .insert_if_absent(record("dup001", "https://first.example.com"))
            .await
            .unwrap()
    );
    assert!(
        !redis
            .repo
            .insert_if_absent(record("dup001", "https://second.example.com"))
            .await
            .unwrap()
    );

    let found = redis.repo.find_by_code("dup001").await.unwrap().unwrap();
    assert_eq!(found.target_url, "https://first.example.com");
    assert_eq!(redis.repo.count().await.unwrap(), 1);

    redis.cleanup().await;
}

#[tokio::test]
async fn test_record_click_missing_code_creates_nothing() {
    let Some(mut redis) = TestRedis::connect().await else {
        return;
    };

    assert!(redis.repo.record_click("nope12").await.unwrap().is_none());
    assert!(redis.repo.find_by_code("nope12").await.unwrap().is_none());

    let key = redis.code_key("nope12");
    let exists: i64 = redis::cmd("EXISTS")
        .arg(&key)
        .query_async(&mut redis.conn)
        .await
        .unwrap();
    assert_eq!(exists, 0);
    assert_eq!(redis.repo.count().await.unwrap(), 0);

    redis.cleanup().await;
}

#[tokio::test]
async fn test_record_click_returns_post_increment_count() {
    let Some(redis) = TestRedis::connect().await else {
        return;
    };

    redis
        .repo
        .insert_if_absent(record("clk001", "https://example.com"))
        .await
        .unwrap();

    for n in 1..=3u64 {
        let clicked = redis.repo.record_click("clk001").await.unwrap().unwrap();
        assert_eq!(clicked.click_count, n);
        assert_eq!(clicked.target_url, "https://example.com");
    }

    let found = redis.repo.find_by_code("clk001").await.unwrap().unwrap();
    assert_eq!(found.click_count, 3);

    redis.cleanup().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_record_click_sums_exactly() {
    let Some(redis) = TestRedis::connect().await else {
        return;
    };
    let k = 200u64;

    redis
        .repo
        .insert_if_absent(record("hot001", "https://example.com/hot"))
        .await
        .unwrap();

    let TestRedis {
        repo,
        mut conn,
        prefix,
    } = redis;
    let repo = Arc::new(repo);

    let handles: Vec<_> = (0..k)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.record_click("hot001").await.unwrap().unwrap() })
        })
        .collect();

    let mut counts = Vec::new();
    for handle in handles {
        counts.push(handle.await.unwrap().click_count);
    }
    counts.sort_unstable();

    assert_eq!(counts, (1..=k).collect::<Vec<_>>());

    let found = repo.find_by_code("hot001").await.unwrap().unwrap();
    assert_eq!(found.click_count, k);

    delete_prefixed(&mut conn, &prefix).await;
}
