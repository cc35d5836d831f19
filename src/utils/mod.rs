//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Random and counter-derived short codes
//! - [`base62`] - Fixed-width base-62 encoding
//! - [`url_normalizer`] - Target URL validation and scheme defaulting
//! - [`extract_host`] - Public host extraction from HTTP headers

pub mod base62;
pub mod code_generator;
pub mod extract_host;
pub mod url_normalizer;
