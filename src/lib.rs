//! # Link Shortener
//!
//! A small URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link record, store errors and the repository trait
//! - **Application Layer** ([`application`]) - Shorten / Resolve / Stats and code allocation
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and Redis link stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory store, short URLs derived from the Host header
//! cargo run
//!
//! # Shorten a URL
//! curl -X POST localhost:5000/api/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com/a/b"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::StoreError;
    pub use crate::domain::entities::LinkRecord;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryLinkRepository, RedisLinkRepository};
    pub use crate::state::AppState;
}
