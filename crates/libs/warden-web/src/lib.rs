//! Stateless JWT session authentication for HTTP services.
//!
//! This library is the core of the Warden platform. It issues signed session
//! tokens after verifying a user's credentials and checks bearer tokens on
//! incoming requests, returning the identity projection embedded at issuance
//! time. No session state is kept server-side: a token's validity is decided
//! entirely by its signature and its embedded time window.
//!
//! The entry point is [`JwtAuth`], constructed once at startup from
//! [`warden_config::JwtSettings`] plus a user-lookup function, an attribute
//! projection list and optional post-success hooks. The [`method::AuthMethod`]
//! trait lets a host compose this method with other authentication schemes.

pub mod auth_token;
pub mod ctx;
pub mod error;
pub mod jwt_auth;
pub mod method;
pub mod mw_auth;
pub mod prelude;
pub mod user;

pub use ctx::Ctx;
pub use jwt_auth::{JwtAuth, JwtAuthBuilder, LoginRequest};
pub use method::AuthMethod;
