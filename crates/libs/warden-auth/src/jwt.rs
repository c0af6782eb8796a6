//! JWT signing and verification for the Warden authentication system.
//!
//! [`JwtCodec`] wraps the `jsonwebtoken` crate behind the two operations the
//! rest of the platform needs: [`JwtCodec::encode`] to sign a claim set and
//! [`JwtCodec::decode`] to verify one and extract it. A codec is built once
//! from the configured secret and algorithm name and pins verification to
//! exactly that algorithm, so a token cannot substitute the scheme declared
//! in its own header for a weaker one.
//!
//! Verification failures all collapse into a single opaque error. The
//! underlying reason (bad signature, expired, not yet valid, malformed) is
//! logged at debug level and never returned, which keeps the codec from
//! acting as an oracle for attacker-supplied tokens.
//!
//! # Examples
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use warden_auth::jwt::JwtCodec;
//!
//! #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
//! struct UserClaims {
//!     user_id: String,
//!     exp: i64,
//! }
//!
//! let codec = JwtCodec::new(b"MySuperSecret", "HS256").unwrap();
//!
//! let claims = UserClaims {
//!     user_id: "admin".to_string(),
//!     exp: 4118335200,
//! };
//!
//! let token = codec.encode(&claims).unwrap();
//! let decoded = codec.decode::<UserClaims>(&token).unwrap();
//! assert_eq!(claims, decoded.claims);
//! ```

use std::str::FromStr;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::prelude::*;

/// Cryptographic key pair for JWT signing and verification.
struct Keys {
    /// Key used for signing new tokens.
    encoding: EncodingKey,
    /// Key used for verifying presented tokens.
    decoding: DecodingKey,
}

impl Keys {
    /// Creates a new key pair from the provided secret.
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Signs and verifies tokens with a fixed secret and algorithm.
///
/// Construct one per process from the configured settings and share it;
/// the codec is immutable and cheap to call from concurrent requests.
pub struct JwtCodec {
    keys: Keys,
    header: Header,
    validation: Validation,
}

impl JwtCodec {
    /// Creates a codec from a signing secret and an algorithm name.
    ///
    /// The algorithm name follows the JWS registry (`HS256`, `HS384`, ...).
    /// An unrecognized name is a configuration error.
    pub fn new(secret: &[u8], algorithm: &str) -> Result<Self> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| Error::UnknownAlgorithm(algorithm.to_string()))?;

        // Single-algorithm allow-list, and the validity window taken
        // literally: nbf <= now <= exp.
        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.validate_nbf = true;

        Ok(Self {
            keys: Keys::new(secret),
            header: Header::new(algorithm),
            validation,
        })
    }

    /// Creates a signed token from the provided claims.
    ///
    /// Claims are signed, not encrypted; anything placed in them is readable
    /// by whoever holds the token. Fails only on serialization or signing
    /// faults, never for well-formed claims.
    pub fn encode<T>(&self, claims: &T) -> Result<String>
    where
        T: Serialize,
    {
        Ok(encode(&self.header, claims, &self.keys.encoding)?)
    }

    /// Verifies a token and extracts its claims.
    ///
    /// Accepts only tokens signed with this codec's secret, declaring this
    /// codec's algorithm, inside their `nbf`/`exp` window. Every rejection
    /// maps to [`Error::InvalidToken`].
    pub fn decode<T>(&self, token: &str) -> Result<TokenData<T>>
    where
        T: DeserializeOwned,
    {
        decode(token, &self.keys.decoding, &self.validation).map_err(|err| {
            debug!("Rejected token: {err}");
            Error::InvalidToken
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    const SECRET: &[u8] = b"jwt codec test secret";

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct TestClaims {
        sub: String,
        nbf: i64,
        exp: i64,
    }

    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock before unix epoch")
            .as_secs() as i64
    }

    fn claims_valid_now() -> TestClaims {
        TestClaims {
            sub: String::from("alice"),
            nbf: now() - 10,
            exp: now() + 3600,
        }
    }

    #[test]
    fn round_trip() {
        let codec = JwtCodec::new(SECRET, "HS256").unwrap();
        let claims = claims_valid_now();
        let token = codec.encode(&claims).unwrap();
        let decoded = codec.decode::<TestClaims>(&token).unwrap();
        assert_eq!(claims, decoded.claims);
    }

    #[test]
    fn unknown_algorithm_is_rejected_at_construction() {
        let result = JwtCodec::new(SECRET, "none");
        assert!(matches!(result, Err(Error::UnknownAlgorithm(_))));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let codec = JwtCodec::new(SECRET, "HS256").unwrap();
        let other = JwtCodec::new(b"a different secret", "HS256").unwrap();
        let token = other.encode(&claims_valid_now()).unwrap();
        assert!(matches!(
            codec.decode::<TestClaims>(&token),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn foreign_algorithm_is_rejected() {
        // Same secret, different scheme in the token header.
        let hs256 = JwtCodec::new(SECRET, "HS256").unwrap();
        let hs384 = JwtCodec::new(SECRET, "HS384").unwrap();
        let token = hs384.encode(&claims_valid_now()).unwrap();
        assert!(matches!(
            hs256.decode::<TestClaims>(&token),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let codec = JwtCodec::new(SECRET, "HS256").unwrap();
        let original = codec.encode(&claims_valid_now()).unwrap();
        let forged = codec
            .encode(&TestClaims {
                sub: String::from("mallory"),
                nbf: now() - 10,
                exp: now() + 3600,
            })
            .unwrap();

        // Forged body carrying the original signature.
        let body = forged.rsplit_once('.').unwrap().0;
        let signature = original.rsplit_once('.').unwrap().1;
        let spliced = format!("{body}.{signature}");

        assert!(matches!(
            codec.decode::<TestClaims>(&spliced),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let codec = JwtCodec::new(SECRET, "HS256").unwrap();
        let claims = TestClaims {
            sub: String::from("alice"),
            nbf: now() - 7200,
            exp: now() - 3600,
        };
        let token = codec.encode(&claims).unwrap();
        assert!(matches!(
            codec.decode::<TestClaims>(&token),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn not_yet_valid_token_is_rejected() {
        let codec = JwtCodec::new(SECRET, "HS256").unwrap();
        let claims = TestClaims {
            sub: String::from("alice"),
            nbf: now() + 600,
            exp: now() + 7200,
        };
        let token = codec.encode(&claims).unwrap();
        assert!(matches!(
            codec.decode::<TestClaims>(&token),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let codec = JwtCodec::new(SECRET, "HS256").unwrap();
        for garbage in ["", "xsadsadas", "not.a.token", "a.b"] {
            assert!(matches!(
                codec.decode::<TestClaims>(garbage),
                Err(Error::InvalidToken)
            ));
        }
    }
}
