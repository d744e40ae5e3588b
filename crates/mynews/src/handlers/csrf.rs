//! Anti-forgery token helpers.
//!
//! Page queries must echo the token embedded in the rendered page, either
//! as the `sessid` form field or in the `X-CSRF-Token` header.

use rand::{distr::Alphanumeric, Rng};

/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Generates a random 32-character alphanumeric token.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Compares two tokens in time independent of where they differ.
pub fn tokens_match(expected: &str, provided: &str) -> bool {
    expected.len() == provided.len()
        && expected
            .bytes()
            .zip(provided.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
