//! Short code generation.
//!
//! Codes are always [`CODE_LENGTH`] characters from the 62-symbol alphanumeric
//! alphabet. Random codes come from the thread-local RNG; the deterministic
//! fallback derives a code from a counter via [`crate::utils::base62`].

use crate::utils::base62;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of every short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a uniformly random alphanumeric short code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Derives the short code for a counter value.
///
/// Distinct counter values below 62^6 give distinct codes; larger values wrap.
pub fn code_from_counter(counter: u64) -> String {
    base62::encode_fixed(counter, CODE_LENGTH)
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
