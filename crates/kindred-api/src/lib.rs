pub mod auth;
pub mod error;
pub mod friends;
pub mod matches;
pub mod messages;

use axum::{
    Router,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::auth::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/messages", post(messages::send_message).get(messages::list_messages))
        .route("/add-friend", post(friends::add_friend))
        .route("/friends/{user_id}", get(friends::list_friends))
        .route("/match", post(matches::propose_match))
        .route("/matches/{user_id}", get(matches::list_matches))
        .with_state(state)
}

/// Parse an id column. Rows are written with uuid v4 ids, so a failure
/// means a corrupt row; log it and fall back to the nil uuid rather than
/// failing the whole listing.
pub(crate) fn parse_uuid(raw: &str, what: &str) -> Uuid {
    raw.parse().unwrap_or_else(|e| {
        warn!("Corrupt {} '{}': {}", what, raw, e);
        Uuid::default()
    })
}

/// SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
/// Try RFC 3339 first, then parse as naive UTC and convert.
pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}': {}", raw, e);
            DateTime::default()
        })
}
