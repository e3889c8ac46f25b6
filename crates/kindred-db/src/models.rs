/// Database row types — these map directly to SQLite rows.
/// Distinct from the kindred-types API models to keep the DB layer
/// independent.

pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub username: String,
}

pub struct MessageRow {
    pub id: String,
    pub content: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub created_at: String,
}

pub struct FriendRow {
    pub id: String,
    pub user_id: String,
    pub friend_id: String,
}

pub struct MatchRow {
    pub id: String,
    pub user_id: String,
    pub match_id: String,
    pub status: String,
    pub created_at: String,
}
