use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State};
use uuid::Uuid;

use kindred_db::Database;
use kindred_types::api::{LoginRequest, SignupRequest};
use kindred_types::models::User;

use crate::error::{ApiError, join_error};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<User>, ApiError> {
    // Hash password with Argon2id; only the hash is ever stored
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|_| ApiError::Internal)?
        .to_string();

    let user_id = Uuid::new_v4();

    // Run blocking DB insert off the async runtime. A taken email fails
    // the UNIQUE constraint and comes back as the 400 conflict.
    let db = state.clone();
    let uid = user_id.to_string();
    let (email, username) = (req.email.clone(), req.username.clone());
    tokio::task::spawn_blocking(move || db.db.create_user(&uid, &email, &password_hash, &username))
        .await
        .map_err(join_error)??;

    Ok(Json(User {
        id: user_id,
        email: req.email,
        username: req.username,
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    let db = state.clone();
    let email = req.email.clone();
    let user = tokio::task::spawn_blocking(move || db.db.get_user_by_email(&email))
        .await
        .map_err(join_error)??
        // an unknown email reads the same as a wrong password
        .ok_or(ApiError::InvalidCredentials)?;

    // Verify password
    let parsed_hash =
        PasswordHash::new(&user.password).map_err(|_| ApiError::Internal)?;

    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::InvalidCredentials)?;

    let id: Uuid = user.id.parse().map_err(|_| ApiError::Internal)?;

    Ok(Json(User {
        id,
        email: user.email,
        username: user.username,
    }))
}
