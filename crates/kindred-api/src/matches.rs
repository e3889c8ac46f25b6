use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use kindred_types::api::ProposeMatchRequest;
use kindred_types::models::{Match, MatchStatus, MatchWithUsers, User};

use crate::auth::AppState;
use crate::error::{ApiError, join_error};
use crate::{parse_timestamp, parse_uuid};

/// Record a proposal from `user_id` to `match_id`. Status is always
/// `pending` at creation; accept/reject transitions have no operation
/// yet. A repeat proposal for the same pair inserts another row.
pub async fn propose_match(
    State(state): State<AppState>,
    Json(req): Json<ProposeMatchRequest>,
) -> Result<Json<Match>, ApiError> {
    let proposal_id = Uuid::new_v4();

    let db = state.clone();
    let pid = proposal_id.to_string();
    let (uid, mid) = (req.user_id.to_string(), req.match_id.to_string());
    tokio::task::spawn_blocking(move || db.db.create_match(&pid, &uid, &mid))
        .await
        .map_err(join_error)??;

    Ok(Json(Match {
        id: proposal_id,
        user_id: req.user_id,
        match_id: req.match_id,
        status: MatchStatus::Pending,
        created_at: chrono::Utc::now(),
    }))
}

/// Every match where this user is proposer or target, each carrying both
/// participants' account records. Rows are stored directionally but read
/// as an undirected relationship; duplicate rows for a pair all surface.
pub async fn list_matches(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<MatchWithUsers>>, ApiError> {
    let db = state.clone();
    let uid = user_id.to_string();
    let rows = tokio::task::spawn_blocking(move || db.db.get_matches_for_user(&uid))
        .await
        .map_err(join_error)??;

    let matches = rows
        .into_iter()
        .map(|(m, proposer, target)| MatchWithUsers {
            id: parse_uuid(&m.id, "match id"),
            user_id: parse_uuid(&m.user_id, "match user_id"),
            match_id: parse_uuid(&m.match_id, "match match_id"),
            status: MatchStatus::from_db(&m.status),
            created_at: parse_timestamp(&m.created_at),
            proposer: User {
                id: parse_uuid(&proposer.id, "proposer id"),
                email: proposer.email,
                username: proposer.username,
            },
            target: User {
                id: parse_uuid(&target.id, "target id"),
                email: target.email,
                username: target.username,
            },
        })
        .collect();

    Ok(Json(matches))
}
