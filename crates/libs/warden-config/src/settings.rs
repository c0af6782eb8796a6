//! Settings for the Warden JWT authentication method.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

fn default_nbf_offset() -> i64 {
    0
}

fn default_exp_offset() -> i64 {
    3600
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The `[jwt]` settings group.
    pub jwt: JwtSettings,
}

/// Settings for token signing and the validity window.
///
/// Read once at startup; every component sees the same secret, algorithm
/// and offsets for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtSettings {
    /// Signing secret handed to the token codec.
    pub secret: String,
    /// Signature scheme name, e.g. `HS256`.
    pub algorithm: String,
    /// Issuer written into every token.
    pub server: String,
    /// Seconds between issuance and the start of the validity window.
    #[serde(default = "default_nbf_offset")]
    pub nbf: i64,
    /// Seconds between the start of the validity window and expiry.
    #[serde(default = "default_exp_offset")]
    pub exp: i64,
}

impl AuthConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(file_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(file_path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(value: &str) -> Result<Self> {
        let config: Self = toml::from_str(value)?;
        config.jwt.validate()?;
        Ok(config)
    }
}

impl JwtSettings {
    /// Checks the invariants the authentication core relies on.
    ///
    /// The expiry offset must not be negative so that `nbf <= exp` holds
    /// for every issued token.
    pub fn validate(&self) -> Result<()> {
        if self.secret.is_empty() {
            return Err(Error::Validation("jwt.secret must not be empty"));
        }
        if self.exp < 0 {
            return Err(Error::Validation("jwt.exp must not be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_group() -> Result<()> {
        let content = r#"
            [jwt]
            secret = "MySuperSecret"
            algorithm = "HS256"
            server = "api.example.com"
            nbf = 10
            exp = 600
        "#;
        let config = AuthConfig::from_toml(content)?;
        assert_eq!(config.jwt.server, "api.example.com");
        assert_eq!(config.jwt.nbf, 10);
        assert_eq!(config.jwt.exp, 600);
        Ok(())
    }

    #[test]
    fn offsets_default_when_omitted() -> Result<()> {
        let content = r#"
            [jwt]
            secret = "MySuperSecret"
            algorithm = "HS256"
            server = "api.example.com"
        "#;
        let config = AuthConfig::from_toml(content)?;
        assert_eq!(config.jwt.nbf, 0);
        assert_eq!(config.jwt.exp, 3600);
        Ok(())
    }

    #[test]
    fn missing_secret_fails_to_parse() {
        let content = r#"
            [jwt]
            algorithm = "HS256"
            server = "api.example.com"
        "#;
        assert!(matches!(
            AuthConfig::from_toml(content),
            Err(Error::Deserialization(_))
        ));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let content = r#"
            [jwt]
            secret = ""
            algorithm = "HS256"
            server = "api.example.com"
        "#;
        assert!(matches!(
            AuthConfig::from_toml(content),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn negative_expiry_offset_is_rejected() {
        let content = r#"
            [jwt]
            secret = "MySuperSecret"
            algorithm = "HS256"
            server = "api.example.com"
            exp = -1
        "#;
        assert!(matches!(
            AuthConfig::from_toml(content),
            Err(Error::Validation(_))
        ));
    }
}
