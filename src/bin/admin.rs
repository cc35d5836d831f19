//! CLI administration tool for link-shortener.
//!
//! Works directly against the Redis link store, without going through the
//! HTTP API. Links created here are served by any instance running with
//! `STORE_BACKEND=redis` against the same Redis.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link
//! cargo run --bin admin -- shorten https://example.com/a/b
//!
//! # Show statistics for a code
//! cargo run --bin admin -- stats aZ3k9Q
//!
//! # Check the Redis connection
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/`REDIS_PASSWORD`/`REDIS_DB` (required)
//! - `BASE_URL` (optional): prefix used to print full short URLs

use link_shortener::application::services::LinkService;
use link_shortener::config::{Config, mask_connection_string};
use link_shortener::domain::StoreError;
use link_shortener::infrastructure::persistence::RedisLinkRepository;
use link_shortener::server::REDIS_KEY_PREFIX;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// Absolute http(s) URL to shorten
        url: String,
    },

    /// Show statistics for a short code
    Stats {
        /// Short code
        code: String,
    },

    /// Check the Redis connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let redis_url =
        Config::load_redis_url().context("REDIS_URL or REDIS_HOST must be set")?;

    let repository = match RedisLinkRepository::connect(&redis_url, REDIS_KEY_PREFIX).await {
        Ok(repository) => repository,
        Err(e) => {
            println!("{}", "Redis connection failed".red().bold());
            println!("  URL:   {}", mask_connection_string(&redis_url).bright_black());
            println!("  Error: {}", e.to_string().red());
            anyhow::bail!("cannot reach Redis");
        }
    };

    let service = LinkService::new(Arc::new(repository));

    match cli.command {
        Commands::Shorten { url } => shorten(&service, url.trim()).await?,
        Commands::Stats { code } => stats(&service, &code).await?,
        Commands::Ping => ping(&service, &redis_url).await?,
    }

    Ok(())
}

/// Creates a short link and prints its code and URL.
async fn shorten(service: &LinkService<RedisLinkRepository>, url: &str) -> Result<()> {
    let record = match service.shorten(url).await {
        Ok(record) => record,
        Err(StoreError::InvalidUrl { reason }) => {
            println!("{} {}", "Invalid URL:".red().bold(), reason);
            anyhow::bail!("invalid URL '{}'", url);
        }
        Err(e) => return Err(anyhow::Error::from(e).context("Failed to create short link")),
    };

    println!("{}", "Short link created".green().bold());
    println!();
    println!("  Code:   {}", record.code.bright_yellow().bold());
    println!("  Target: {}", record.target_url.cyan());

    if let Ok(base_url) = std::env::var("BASE_URL") {
        println!(
            "  URL:    {}",
            service.short_url(&base_url, &record.code).bright_white()
        );
    }
    println!();

    Ok(())
}

/// Prints target URL, click count and creation time for a code.
async fn stats(service: &LinkService<RedisLinkRepository>, code: &str) -> Result<()> {
    let record = match service.stats(code).await {
        Ok(record) => record,
        Err(StoreError::NotFound { .. }) => {
            println!("{} {}", "No link with code".yellow(), code.bright_white());
            anyhow::bail!("short code '{}' not found", code);
        }
        Err(e) => return Err(anyhow::Error::from(e).context("Failed to load statistics")),
    };

    println!("{}", "Link statistics".bright_blue().bold());
    println!();
    println!("  Code:    {}", record.code.bright_yellow());
    println!("  Target:  {}", record.target_url.cyan());
    println!(
        "  Clicks:  {}",
        record.click_count.to_string().bright_white().bold()
    );
    println!(
        "  Created: {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Reports connectivity and the number of stored links.
async fn ping(service: &LinkService<RedisLinkRepository>, redis_url: &str) -> Result<()> {
    if !service.health_check().await {
        println!("{}", "Redis is not responding".red().bold());
        anyhow::bail!("PING failed");
    }

    let count = service.count().await.context("Failed to count links")?;

    println!("{}", "Redis connection OK".green().bold());
    println!("  URL:   {}", mask_connection_string(redis_url).bright_black());
    println!("  Links: {}", count.to_string().bright_white().bold());

    Ok(())
}
