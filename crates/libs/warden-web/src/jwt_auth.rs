//! The JWT authentication method: token issuance and checking.
//!
//! [`JwtAuth`] bundles everything a request needs — the codec built from the
//! configured secret and algorithm, the user-lookup function, the attribute
//! projection list and the optional post-success hooks. It is constructed
//! once at startup via [`JwtAuth::builder`] and shared read-only afterwards;
//! every operation is a synchronous computation over its inputs plus the one
//! injected lookup call.

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use warden_auth::{
    AUTH_HEADER, AUTH_HEADER_PREFIX, auth_body::AuthBody, jwt::JwtCodec, password::verify_password,
};
use warden_config::JwtSettings;

use crate::auth_token::Claims;
use crate::ctx::Ctx;
use crate::method::AuthMethod;
use crate::prelude::*;
use crate::user::{PASSWORD_FIELD, UserLookup, UserRecord};

/// Hook invoked after a token is issued, with the identity and the token.
pub type OnAuthenticate = Arc<dyn Fn(&Ctx, &str) + Send + Sync>;

/// Hook invoked after a token check succeeds, with the identity.
pub type OnCheck = Arc<dyn Fn(&Ctx) + Send + Sync>;

/// Login credentials as submitted by the caller.
///
/// Shape violations — a malformed email, out-of-bounds lengths — are caller
/// errors and surface as [`Error::Validation`], distinct from a failed
/// authentication.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email, length(min = 3, max = 100))]
    pub email: String,
    #[validate(length(min = 3, max = 128))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Stateless JWT session authentication.
///
/// # Examples
///
/// ```rust
/// use warden_config::JwtSettings;
/// use warden_web::JwtAuth;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = JwtSettings {
///     secret: String::from("MySuperSecret"),
///     algorithm: String::from("HS256"),
///     server: String::from("api.example.com"),
///     nbf: 0,
///     exp: 3600,
/// };
///
/// let auth = JwtAuth::builder(settings)
///     .user_lookup(|_email| None)
///     .attributes(["email", "user_type"])
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct JwtAuth {
    settings: JwtSettings,
    codec: JwtCodec,
    lookup: UserLookup,
    attributes: Vec<String>,
    on_authenticate: Option<OnAuthenticate>,
    on_check: Option<OnCheck>,
}

impl JwtAuth {
    /// Starts building a `JwtAuth` from settings.
    pub fn builder(settings: JwtSettings) -> JwtAuthBuilder {
        JwtAuthBuilder {
            settings,
            lookup: None,
            attributes: Vec::new(),
            on_authenticate: None,
            on_check: None,
        }
    }

    /// Authenticates login credentials and issues a session token.
    ///
    /// Returns the identity projection paired with the signed token. An
    /// unknown email and a wrong password yield the same
    /// [`Error::InvalidCredentials`]; nothing distinguishes the two cases.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<(Ctx, AuthBody)> {
        self.issue_token(&LoginRequest::new(email, password))
    }

    fn issue_token(&self, credentials: &LoginRequest) -> Result<(Ctx, AuthBody)> {
        credentials.validate()?;

        let user = (self.lookup)(&credentials.email).ok_or(Error::InvalidCredentials)?;
        let hash = user
            .password_hash()
            .ok_or_else(|| Error::MissingAttribute(String::from(PASSWORD_FIELD)))?;
        if !verify_password(&credentials.password, hash)? {
            return Err(Error::InvalidCredentials);
        }

        let claims = Claims::issue(
            &user,
            &self.attributes,
            &self.settings.server,
            self.settings.nbf,
            self.settings.exp,
            Utc::now().timestamp(),
        )?;
        let token = self.codec.encode(&claims)?;
        let ctx = Ctx::new(claims.data);

        if let Some(hook) = &self.on_authenticate {
            hook(&ctx, &token);
        }

        Ok((ctx, AuthBody::new(token)))
    }

    /// Checks the request's bearer token and returns the identity it binds.
    ///
    /// An absent header, a non-Bearer scheme, an empty token, a bad
    /// signature, a foreign algorithm and an out-of-window timestamp all
    /// yield `None`; the reason is never surfaced.
    pub fn check(&self, headers: &HeaderMap) -> Option<Ctx> {
        let token = bearer_token(headers)?;
        let claims = self.codec.decode::<Claims>(token).ok()?.claims;
        let ctx = Ctx::new(claims.data);

        if let Some(hook) = &self.on_check {
            hook(&ctx);
        }

        Some(ctx)
    }

    /// Whether the request carries a bearer credential at all, valid or not.
    ///
    /// Routing uses this to decide if the method applies to a request before
    /// paying for verification.
    pub fn has_credential(&self, headers: &HeaderMap) -> bool {
        bearer_token(headers).is_some()
    }
}

impl AuthMethod for JwtAuth {
    fn supports(&self, headers: &HeaderMap) -> bool {
        self.has_credential(headers)
    }

    fn check(&self, headers: &HeaderMap) -> Option<Ctx> {
        JwtAuth::check(self, headers)
    }

    fn issue(&self, credentials: &LoginRequest) -> Result<(Ctx, AuthBody)> {
        self.issue_token(credentials)
    }
}

/// Extracts the bearer credential from the header map.
///
/// The value must start with the literal `"Bearer "` scheme prefix and
/// carry a non-empty remainder.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTH_HEADER)?
        .to_str()
        .ok()?
        .strip_prefix(AUTH_HEADER_PREFIX)
        .filter(|token| !token.is_empty())
}

/// Builder for [`JwtAuth`].
///
/// Mirrors the registration surface a host authentication manager exposes:
/// the user-lookup function, the attribute projection list and the two
/// post-success hooks, all fixed before the first request is served.
pub struct JwtAuthBuilder {
    settings: JwtSettings,
    lookup: Option<UserLookup>,
    attributes: Vec<String>,
    on_authenticate: Option<OnAuthenticate>,
    on_check: Option<OnCheck>,
}

impl JwtAuthBuilder {
    /// Sets the function resolving an email address to a user record.
    pub fn user_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<UserRecord> + Send + Sync + 'static,
    ) -> Self {
        self.lookup = Some(Arc::new(lookup));
        self
    }

    /// Sets the attributes copied from the user record into issued tokens.
    pub fn attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// Registers a hook invoked synchronously after each issuance.
    pub fn on_authenticate(mut self, hook: impl Fn(&Ctx, &str) + Send + Sync + 'static) -> Self {
        self.on_authenticate = Some(Arc::new(hook));
        self
    }

    /// Registers a hook invoked synchronously after each successful check.
    pub fn on_check(mut self, hook: impl Fn(&Ctx) + Send + Sync + 'static) -> Self {
        self.on_check = Some(Arc::new(hook));
        self
    }

    /// Finishes construction.
    ///
    /// Fails when the settings are invalid, the algorithm name is unknown,
    /// no user lookup was provided, or the attribute list names the password
    /// field — each a configuration error, reported loudly rather than
    /// surfacing later as a false authentication failure.
    pub fn build(self) -> Result<JwtAuth> {
        self.settings.validate()?;
        let codec = JwtCodec::new(self.settings.secret.as_bytes(), &self.settings.algorithm)?;
        let lookup = self.lookup.ok_or(Error::MissingUserLookup)?;

        if let Some(reserved) = self
            .attributes
            .iter()
            .find(|attribute| attribute.as_str() == PASSWORD_FIELD)
        {
            return Err(Error::ReservedAttribute(reserved.clone()));
        }

        Ok(JwtAuth {
            settings: self.settings,
            codec,
            lookup,
            attributes: self.attributes,
            on_authenticate: self.on_authenticate,
            on_check: self.on_check,
        })
    }
}
