//! Link repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryLinkRepository`] - Process-local store (default)
//! - [`RedisLinkRepository`] - External key-value backend

pub mod memory_link_repository;
pub mod redis_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use redis_link_repository::RedisLinkRepository;
