#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Map, json};
use warden_auth::password::hash_password;
use warden_config::JwtSettings;
use warden_web::{JwtAuth, user::UserRecord};

pub const SECRET: &str = "zXcyAqpdLgq31/K+oatAmnuwaH0Pgx4lzqjHtBmQ==";
pub const PASSWORD: &str = "123456";

pub fn settings() -> JwtSettings {
    JwtSettings {
        secret: String::from(SECRET),
        algorithm: String::from("HS256"),
        server: String::from("test"),
        nbf: 0,
        exp: 3600,
    }
}

pub fn user(id: i64, email: &str, user_type: &str) -> UserRecord {
    let mut fields = Map::new();
    fields.insert(String::from("id"), json!(id));
    fields.insert(String::from("email"), json!(email));
    fields.insert(
        String::from("password"),
        json!(hash_password(PASSWORD).expect("hashing fixture password")),
    );
    fields.insert(String::from("user_type"), json!(user_type));
    UserRecord::new(fields)
}

pub fn lookup(email: &str) -> Option<UserRecord> {
    match email {
        "alice@example.com" => Some(user(1, "alice@example.com", "user")),
        "bob@example.com" => Some(user(2, "bob@example.com", "moderator")),
        _ => None,
    }
}

pub fn jwt_auth() -> Arc<JwtAuth> {
    Arc::new(
        JwtAuth::builder(settings())
            .user_lookup(lookup)
            .attributes(["user_type", "email"])
            .build()
            .expect("building fixture JwtAuth"),
    )
}
