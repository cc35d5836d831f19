//! Infrastructure layer for storage backends.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory and Redis link stores

pub mod persistence;
