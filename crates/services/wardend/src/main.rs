//! Warden Authentication Service (wardend)
//!
//! A small host around the Warden authentication core:
//!
//! - **`POST /v1/login`**: verifies email/password credentials against the
//!   user store and issues a signed session token
//! - **`GET /v1/me`**: returns the identity projection bound to the
//!   presented bearer token
//!
//! The service keeps no session state; a token is validated purely by its
//! signature and embedded time window.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warden_config::AuthConfig;
use warden_web::JwtAuth;

use crate::api::setup_api;
use crate::prelude::*;
use crate::store::UserStore;

mod api;
mod error;
mod prelude;
mod store;

/// Configuration file read at startup, overridable via `WARDEND_CONFIG`.
const DEFAULT_CONFIG_PATH: &str = "wardend.toml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path =
        std::env::var("WARDEND_CONFIG").unwrap_or_else(|_| String::from(DEFAULT_CONFIG_PATH));
    let config = AuthConfig::from_file(Path::new(&config_path))?;

    let store = Arc::new(UserStore::seed()?);
    let auth = Arc::new(
        JwtAuth::builder(config.jwt)
            .user_lookup({
                let store = store.clone();
                move |email| store.find_by_email(email)
            })
            .attributes(["email", "user_type"])
            .on_authenticate(|identity, _token| {
                tracing::info!(id = ?identity.id(), "Issued session token");
            })
            .build()?,
    );

    let api_handle = setup_api(auth).await?;

    tokio::select! {
        result = api_handle => {
            tracing::error!("API server stopped: {:?}", result);
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
        }
    }

    Ok(())
}
