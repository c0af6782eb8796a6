//! Request context management for web handlers.
//!
//! This module provides the identity context attached to authenticated
//! requests and the resolver middleware that produces it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod resolver;

/// Identity of an authenticated request.
///
/// Wraps the `data` section of a verified token: the user's `id` plus the
/// attributes projected at issuance time. The password hash is never part
/// of a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ctx {
    data: Map<String, Value>,
}

impl Ctx {
    /// Creates a context from a verified identity projection.
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Returns the authenticated user's identifier, if present.
    pub fn id(&self) -> Option<&Value> {
        self.data.get("id")
    }

    /// Returns a projected attribute.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.data.get(attribute)
    }

    /// Returns the full identity projection.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}
