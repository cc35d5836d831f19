//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`errors`] - Typed failures of the short-link store
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//! Concrete stores live in [`crate::infrastructure::persistence`], and the
//! allocation policy on top of them in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;

pub use errors::StoreError;
