//! Core domain entities.
//!
//! - [`LinkRecord`] - A short code mapped to its target URL, with creation time
//!   and click counter

pub mod link;

pub use link::LinkRecord;
