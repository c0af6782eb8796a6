//! Claim construction for issued session tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use warden_auth::token_id::generate_token_id;

use crate::prelude::*;
use crate::user::UserRecord;

/// Signed payload of a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Issued at time.
    pub iat: i64,
    /// Token identifier, unique per issuance.
    pub jti: String,
    /// Issuer.
    pub iss: String,
    /// Not before time.
    pub nbf: i64,
    /// Expiration time.
    pub exp: i64,
    /// Identity projection of the authenticated user.
    pub data: Map<String, Value>,
}

impl Claims {
    /// Builds the claim set for a freshly authenticated user.
    ///
    /// The validity window is `nbf = now + nbf_offset` through
    /// `exp = nbf + exp_offset`. `data` holds the identity projection: the
    /// record's `id` plus every configured attribute, copied verbatim. An
    /// attribute missing from the record is a server misconfiguration and
    /// aborts issuance; it never degrades into a token with fewer fields.
    ///
    /// Pure apart from the freshly generated `jti`: the clock is injected,
    /// so a fixed `now` yields a fixed window.
    pub fn issue(
        user: &UserRecord,
        attributes: &[String],
        issuer: &str,
        nbf_offset: i64,
        exp_offset: i64,
        now: i64,
    ) -> Result<Self> {
        let issued_at = now;
        let not_before = issued_at + nbf_offset;
        let expire = not_before + exp_offset;

        let mut data = Map::new();
        let id = user
            .id()
            .ok_or_else(|| Error::MissingAttribute(String::from("id")))?;
        data.insert(String::from("id"), id.clone());

        for attribute in attributes {
            let value = user
                .get(attribute)
                .ok_or_else(|| Error::MissingAttribute(attribute.clone()))?;
            data.insert(attribute.clone(), value.clone());
        }

        Ok(Self {
            iat: issued_at,
            jti: generate_token_id(),
            iss: String::from(issuer),
            nbf: not_before,
            exp: expire,
            data,
        })
    }
}
