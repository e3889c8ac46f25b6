use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use kindred_types::api::AddFriendRequest;
use kindred_types::models::Friend;

use crate::auth::AppState;
use crate::error::{ApiError, join_error};
use crate::parse_uuid;

/// Record a directed friendship edge, unconditionally: no duplicate,
/// reciprocity, or self-friend check. Adding back is a second edge.
pub async fn add_friend(
    State(state): State<AppState>,
    Json(req): Json<AddFriendRequest>,
) -> Result<Json<Friend>, ApiError> {
    let edge_id = Uuid::new_v4();

    let db = state.clone();
    let eid = edge_id.to_string();
    let (uid, fid) = (req.user_id.to_string(), req.friend_id.to_string());
    tokio::task::spawn_blocking(move || db.db.add_friend(&eid, &uid, &fid))
        .await
        .map_err(join_error)??;

    Ok(Json(Friend {
        id: edge_id,
        user_id: req.user_id,
        friend_id: req.friend_id,
    }))
}

/// Only edges this user initiated. Edges pointing at the user stay
/// invisible to them.
pub async fn list_friends(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Friend>>, ApiError> {
    let db = state.clone();
    let uid = user_id.to_string();
    let rows = tokio::task::spawn_blocking(move || db.db.get_friends(&uid))
        .await
        .map_err(join_error)??;

    let friends = rows
        .into_iter()
        .map(|row| Friend {
            id: parse_uuid(&row.id, "friend edge id"),
            user_id: parse_uuid(&row.user_id, "user_id"),
            friend_id: parse_uuid(&row.friend_id, "friend_id"),
        })
        .collect();

    Ok(Json(friends))
}
