//! Base-62 encoding over the alphabet `0-9A-Za-z`.

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encodes `n` as exactly `width` base-62 digits.
///
/// Shorter values are left-padded with `'0'`. Values that need more than
/// `width` digits keep only the lowest `width` digits.
pub fn encode_fixed(mut n: u64, width: usize) -> String {
    let mut buf = vec![ALPHABET[0]; width];
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(n % 62) as usize];
        n /= 62;
    }
    buf.into_iter().map(char::from).collect()
}
