//! Configuration management for the Warden framework.
//!
//! Provides the `[jwt]` settings group consumed by the authentication core:
//! signing secret, algorithm, issuer name and the token validity window.
//!
//! # Usage
//!
//! ```rust
//! use warden_config::AuthConfig;
//!
//! let config = AuthConfig::from_toml(
//!     r#"
//!     [jwt]
//!     secret = "MySuperSecret"
//!     algorithm = "HS256"
//!     server = "api.example.com"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.jwt.exp, 3600);
//! ```

pub mod error;
pub mod prelude;
pub mod settings;

pub use settings::{AuthConfig, JwtSettings};
