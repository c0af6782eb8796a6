#[derive(Debug, thiserror::Error, Clone)]
pub enum Error {
    /// The token could not be verified. Covers malformed input, a bad
    /// signature, a foreign algorithm and an out-of-window timestamp;
    /// callers are deliberately given no way to tell these apart.
    #[error("Invalid Token")]
    InvalidToken,

    #[error("Unknown signing algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    TokenCreation(#[from] jsonwebtoken::errors::Error),

    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),
}
