use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            email       TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            username    TEXT NOT NULL
        );

        -- sender_id/receiver_id carry no foreign keys: a message referencing
        -- an unknown account is accepted as-is.
        CREATE TABLE IF NOT EXISTS messages (
            id          TEXT PRIMARY KEY,
            content     TEXT NOT NULL,
            sender_id   TEXT NOT NULL,
            receiver_id TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS friends (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL REFERENCES users(id),
            friend_id   TEXT NOT NULL REFERENCES users(id)
        );

        CREATE INDEX IF NOT EXISTS idx_friends_user
            ON friends(user_id);

        -- No uniqueness over (user_id, match_id): repeat proposals insert
        -- additional rows.
        CREATE TABLE IF NOT EXISTS matches (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL REFERENCES users(id),
            match_id    TEXT NOT NULL REFERENCES users(id),
            status      TEXT NOT NULL DEFAULT 'pending',
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_matches_proposer
            ON matches(user_id);

        CREATE INDEX IF NOT EXISTS idx_matches_target
            ON matches(match_id);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
