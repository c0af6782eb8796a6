use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    middleware,
    routing::{get, post},
};
use tokio::task::JoinHandle;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use warden_auth::auth_body::AuthBody;
use warden_web::{
    AuthMethod, Ctx, JwtAuth, LoginRequest, ctx::resolver::mw_ctx_resolver,
    mw_auth::mw_require_auth,
};

use crate::prelude::*;

fn v1(path: &str) -> String {
    format!("/v1/{path}")
}

pub async fn setup_api(auth: Arc<JwtAuth>) -> Result<JoinHandle<Result<()>>> {
    let protected_routes = Router::new()
        .route(&v1("me"), get(me))
        .route_layer(middleware::from_fn(mw_require_auth));

    let public_routes = Router::new().route(&v1("login"), post(login));

    let app = Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(
            auth.clone(),
            mw_ctx_resolver,
        ))
        .with_state(auth);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::debug!("listening on {:?}", listener.local_addr());
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await?;
        Ok(())
    });

    Ok(handle)
}

/// Verifies login credentials and returns a freshly issued session token.
async fn login(
    State(auth): State<Arc<JwtAuth>>,
    Json(payload): Json<LoginRequest>,
) -> warden_web::prelude::Result<Json<AuthBody>> {
    let (_identity, body) = auth.issue(&payload)?;
    Ok(Json(body))
}

/// Returns the identity projection bound to the presented token.
async fn me(ctx: Ctx) -> Json<Ctx> {
    Json(ctx)
}
