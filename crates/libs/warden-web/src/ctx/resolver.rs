//! Context resolver for extracting the authenticated identity from requests.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use super::Ctx;
use crate::jwt_auth::JwtAuth;
use crate::prelude::*;

/// Middleware resolving the request context from a bearer token.
///
/// Runs the token checker once per request and stores the outcome in the
/// request extensions, where the [`Ctx`] extractor and downstream middleware
/// read it. An absent or rejected credential stores `None`; rejecting the
/// request is left to [`crate::mw_auth::mw_require_auth`] on routes that
/// demand authentication.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use axum::{Router, middleware};
/// use warden_web::JwtAuth;
/// use warden_web::ctx::resolver::mw_ctx_resolver;
///
/// # fn example(auth: Arc<JwtAuth>) {
/// let app: Router<()> = Router::new()
///     .layer(middleware::from_fn_with_state(auth, mw_ctx_resolver));
/// # }
/// ```
pub async fn mw_ctx_resolver(
    State(auth): State<Arc<JwtAuth>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let ctx = auth.check(req.headers());
    req.extensions_mut().insert(ctx);
    next.run(req).await
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<Option<Ctx>>()
            .ok_or(Error::CtxMissing)?
            .clone()
            .ok_or(Error::MissingCredentials)
    }
}
