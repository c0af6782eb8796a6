//! Authentication middleware for protecting routes.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::ctx::Ctx;
use crate::prelude::*;

/// Middleware that requires a verified bearer token for a route.
///
/// Relies on [`crate::ctx::resolver::mw_ctx_resolver`] having run further
/// out in the stack; requests without a resolved identity are rejected
/// before the handler is reached.
///
/// # Examples
///
/// ```rust,no_run
/// use axum::{Router, middleware, routing::get};
/// use warden_web::mw_auth::mw_require_auth;
///
/// let app: Router<()> = Router::new()
///     .route("/protected", get(protected_handler))
///     .layer(middleware::from_fn(mw_require_auth));
///
/// async fn protected_handler() -> &'static str {
///     "This requires authentication"
/// }
/// ```
pub async fn mw_require_auth(ctx: Result<Ctx>, req: Request, next: Next) -> Result<Response> {
    ctx?;
    Ok(next.run(req).await)
}
