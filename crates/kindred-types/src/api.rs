use serde::Deserialize;
use uuid::Uuid;

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// -- Messages --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub content: String,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
}

// -- Friends --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendRequest {
    pub user_id: Uuid,
    pub friend_id: Uuid,
}

// -- Matches --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeMatchRequest {
    pub user_id: Uuid,
    pub match_id: Uuid,
}
