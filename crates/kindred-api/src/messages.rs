use axum::{Json, extract::State};
use uuid::Uuid;

use kindred_types::api::SendMessageRequest;
use kindred_types::models::Message;

use crate::auth::AppState;
use crate::error::{ApiError, join_error};
use crate::{parse_timestamp, parse_uuid};

/// Append to the message log. Neither participant id is checked against
/// the users table: the log stores whatever ids the caller claims.
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<Message>, ApiError> {
    let message_id = Uuid::new_v4();

    let db = state.clone();
    let mid = message_id.to_string();
    let content = req.content.clone();
    let (sid, rid) = (req.sender_id.to_string(), req.receiver_id.to_string());
    tokio::task::spawn_blocking(move || db.db.insert_message(&mid, &content, &sid, &rid))
        .await
        .map_err(join_error)??;

    Ok(Json(Message {
        id: message_id,
        content: req.content,
        sender_id: req.sender_id,
        receiver_id: req.receiver_id,
        created_at: chrono::Utc::now(),
    }))
}

/// The whole log, unfiltered and unbounded, in storage order. Callers
/// wanting a single conversation filter on their side.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_messages())
        .await
        .map_err(join_error)??;

    let messages = rows
        .into_iter()
        .map(|row| Message {
            id: parse_uuid(&row.id, "message id"),
            content: row.content,
            sender_id: parse_uuid(&row.sender_id, "sender_id"),
            receiver_id: parse_uuid(&row.receiver_id, "receiver_id"),
            created_at: parse_timestamp(&row.created_at),
        })
        .collect();

    Ok(Json(messages))
}
