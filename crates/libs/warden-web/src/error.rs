//! Main Crate Error

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

/// Errors fall into three tiers. Authentication outcomes (wrong email,
/// wrong password, bad token) collapse into indistinct variants so a caller
/// cannot probe which part of a credential was wrong. Caller contract
/// violations (malformed email, out-of-bounds lengths) are reported as
/// validation errors. Everything else is a server-side configuration fault
/// and is never downgraded to a failed-authentication answer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] warden_auth::error::Error),

    #[error(transparent)]
    Config(#[from] warden_config::error::Error),

    /* Caller contract violations */
    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    /* Authentication outcomes */
    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("Missing Credentials")]
    MissingCredentials,

    /* Configuration errors */
    #[error("No user lookup function configured")]
    MissingUserLookup,

    #[error("Attribute '{0}' would expose the password hash")]
    ReservedAttribute(String),

    #[error("Attribute '{0}' is not set in user object")]
    MissingAttribute(String),

    #[error("Context Missing")]
    CtxMissing,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        let (status, message) = match self {
            Error::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Error::MissingCredentials | Error::CtxMissing => {
                (StatusCode::UNAUTHORIZED, "Missing credentials")
            }
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
            Error::Auth(_)
            | Error::Config(_)
            | Error::MissingUserLookup
            | Error::ReservedAttribute(_)
            | Error::MissingAttribute(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        (status, body).into_response()
    }
}
