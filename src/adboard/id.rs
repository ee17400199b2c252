//! Identifier generation for new ads.
//!
//! An id is a random base-36 fragment followed by the base-36 encoding of the
//! creation time in milliseconds. Collisions are possible in theory; no check
//! against the store is made.

use crate::model::now_millis;
use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encodes `n` in lower-case base 36.
pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Builds an id from an explicit random value and timestamp.
pub fn compose_id(random: u64, timestamp_ms: i64) -> String {
    let ts = u64::try_from(timestamp_ms).unwrap_or(0);
    format!("{}{}", to_base36(random), to_base36(ts))
}

pub fn generate_id_at(timestamp_ms: i64) -> String {
    let random: u64 = rand::thread_rng().gen();
    compose_id(random, timestamp_ms)
}

pub fn generate_id() -> String {
    generate_id_at(now_millis())
}
