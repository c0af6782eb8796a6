//! Password hashing and verification using Argon2.
//!
//! User stores hold only Argon2 hashes; the plaintext password exists just
//! long enough to be verified against the stored hash. Verification is
//! constant-time inside `argon2`, so a mismatch takes as long as a match
//! and the outcome cannot be inferred from timing.
//!
//! # Examples
//!
//! ```rust
//! use warden_auth::password::{hash_password, verify_password};
//!
//! let hash = hash_password("user_password_123").unwrap();
//!
//! assert!(verify_password("user_password_123", &hash).unwrap());
//! assert!(!verify_password("wrong_password", &hash).unwrap());
//! ```

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Hashes a password for storage.
///
/// Uses Argon2 with a fresh random salt; the returned PHC string embeds the
/// salt and parameters needed for later verification.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Verifies a password against a stored hash.
///
/// Returns `Ok(false)` for a well-formed hash that does not match and an
/// error for a hash string that cannot be parsed at all — a store handing
/// out unparseable hashes is a server fault, not a failed login.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let hash = PasswordHashString::new(hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &hash.password_hash())
        .is_ok())
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_password_verifies() {
        let hash = hash_password("123456").unwrap();
        assert!(verify_password("123456", &hash).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("123456").unwrap();
        assert!(!verify_password("1234567", &hash).unwrap());
    }

    #[test]
    fn unparseable_hash_is_an_error() {
        assert!(matches!(
            verify_password("123456", "not a phc string"),
            Err(Error::PasswordHash(_))
        ));
    }
}
