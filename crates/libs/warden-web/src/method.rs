//! Authentication method dispatch.
//!
//! A host may accept several ways of authenticating a request. Each way
//! implements [`AuthMethod`]: routing asks [`AuthMethod::supports`] whether
//! a request carries that method's credential at all, then hands the request
//! to the first method that claims it. Composition happens over trait
//! objects; methods know nothing about each other.

use axum::http::HeaderMap;
use warden_auth::auth_body::AuthBody;

use crate::ctx::Ctx;
use crate::jwt_auth::LoginRequest;
use crate::prelude::*;

/// A way of authenticating HTTP requests.
pub trait AuthMethod: Send + Sync {
    /// Whether the request carries this method's credential, valid or not.
    fn supports(&self, headers: &HeaderMap) -> bool;

    /// Verifies the request's credential and returns the identity it binds.
    ///
    /// `None` covers every rejection; no detail leaks to the caller.
    fn check(&self, headers: &HeaderMap) -> Option<Ctx>;

    /// Verifies login credentials and issues a fresh credential.
    fn issue(&self, credentials: &LoginRequest) -> Result<(Ctx, AuthBody)>;
}
