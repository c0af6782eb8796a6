//! User records supplied by the host's user store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field of the user record holding the Argon2 password hash.
pub const PASSWORD_FIELD: &str = "password";

/// A user record fetched from the host's store.
///
/// The store is an external collaborator, so the record stays an opaque
/// JSON object: the authentication core requires only `id` and the
/// [`PASSWORD_FIELD`] hash; any further field may be projected into issued
/// tokens via the configured attribute list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Map<String, Value>);

impl UserRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns a field of the record, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the record's unique identifier, if present.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Returns the stored password hash, if present and textual.
    pub fn password_hash(&self) -> Option<&str> {
        self.0.get(PASSWORD_FIELD).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for UserRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Function resolving an email address to a user record.
///
/// The single injected I/O point of the authentication core. Absence of a
/// record is an ordinary lookup outcome, never an error.
pub type UserLookup = Arc<dyn Fn(&str) -> Option<UserRecord> + Send + Sync>;
