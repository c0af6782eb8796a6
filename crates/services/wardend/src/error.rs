//! Error types for the Warden Authentication Service.

/// Errors that can occur while booting or running the service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Auth(#[from] warden_auth::error::Error),

    #[error(transparent)]
    Config(#[from] warden_config::error::Error),

    #[error(transparent)]
    Web(#[from] warden_web::error::Error),
}
