#![allow(dead_code)]

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use sqlx::PgPool;
use std::sync::Arc;
use votify::domain::entities::{AuthUser, UserRole};
use votify::state::AppState;

/// Signing secret shared by all test states and token fixtures.
pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), 10, TEST_SIGNING_SECRET.to_string())
}

pub async fn create_test_user(pool: &PgPool, name: &str, email: &str, role: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, email, role) VALUES ($1, $2, $3) RETURNING id")
        .bind(name)
        .bind(email)
        .bind(role)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_organizer(pool: &PgPool, email: &str) -> i64 {
    create_test_user(pool, "Test Organizer", email, "organizer").await
}

pub async fn create_test_session(pool: &PgPool, title: &str, organizer_id: i64) -> i64 {
    let start = Utc::now();
    let end = start + Duration::hours(2);

    sqlx::query_scalar(
        "INSERT INTO sessions (title, start_date, end_date, organizer_id) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(title)
    .bind(start)
    .bind(end)
    .bind(organizer_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts an API token for `user_id`, hashed the same way the auth service
/// hashes incoming tokens.
pub async fn create_api_token(pool: &PgPool, user_id: i64, raw_token: &str) {
    let mut mac = Hmac::<Sha256>::new_from_slice(TEST_SIGNING_SECRET.as_bytes()).unwrap();
    mac.update(raw_token.as_bytes());
    let token_hash = hex::encode(mac.finalize().into_bytes());

    sqlx::query("INSERT INTO api_tokens (user_id, name, token_hash) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind("test token")
        .bind(token_hash)
        .execute(pool)
        .await
        .unwrap();
}

pub fn organizer_actor(user_id: i64) -> AuthUser {
    AuthUser {
        user_id,
        role: UserRole::Organizer,
    }
}

pub fn admin_actor(user_id: i64) -> AuthUser {
    AuthUser {
        user_id,
        role: UserRole::Admin,
    }
}
