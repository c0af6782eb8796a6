//! In-memory user store for the service.
//!
//! Stands in for the external user-record store; the authentication core
//! only ever sees the lookup function, so swapping this for a database
//! touches nothing else.

use serde_json::{Map, json};
use warden_auth::password::hash_password;
use warden_web::user::UserRecord;

use crate::prelude::*;

pub struct UserStore {
    users: Vec<UserRecord>,
}

impl UserStore {
    /// Creates a store seeded with the demo accounts.
    pub fn seed() -> Result<Self> {
        let users = vec![
            demo_user(1, "admin@warden.localhost", "admin-password", "moderator")?,
            demo_user(2, "user@warden.localhost", "user-password", "user")?,
        ];
        Ok(Self { users })
    }

    /// Resolves an email address to its user record.
    pub fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users
            .iter()
            .find(|user| user.get("email").and_then(|value| value.as_str()) == Some(email))
            .cloned()
    }
}

fn demo_user(id: i64, email: &str, password: &str, user_type: &str) -> Result<UserRecord> {
    let mut fields = Map::new();
    fields.insert(String::from("id"), json!(id));
    fields.insert(String::from("email"), json!(email));
    fields.insert(String::from("password"), json!(hash_password(password)?));
    fields.insert(String::from("user_type"), json!(user_type));
    Ok(UserRecord::new(fields))
}
