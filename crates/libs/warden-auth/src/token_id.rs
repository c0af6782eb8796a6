//! Token identifier generation.
//!
//! Every issued token carries a `jti` claim identifying that one issuance.
//! The identifier is drawn from the operating system's CSPRNG; a predictable
//! generator here would let an observer correlate or forge identifiers.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rand::RngCore;
use rand::rngs::OsRng;

/// Number of random bytes backing a token identifier.
pub const TOKEN_ID_BYTES: usize = 32;

/// Generates a unique identifier for an issued token.
///
/// Returns [`TOKEN_ID_BYTES`] bytes of OS randomness rendered as base64.
///
/// # Examples
///
/// ```rust
/// use warden_auth::token_id::generate_token_id;
///
/// let id = generate_token_id();
/// assert_ne!(id, generate_token_id());
/// ```
pub fn generate_token_id() -> String {
    let mut bytes = [0u8; TOKEN_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn carries_the_full_entropy() {
        let decoded = STANDARD.decode(generate_token_id()).unwrap();
        assert_eq!(decoded.len(), TOKEN_ID_BYTES);
    }

    #[test]
    fn identifiers_are_pairwise_distinct() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_token_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }
}
