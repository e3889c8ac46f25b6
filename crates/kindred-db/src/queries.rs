use crate::Database;
use crate::models::{FriendRow, MatchRow, MessageRow, UserRow};
use anyhow::Result;
use rusqlite::Connection;

impl Database {
    // -- Users --

    pub fn create_user(&self, id: &str, email: &str, password_hash: &str, username: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, email, password, username) VALUES (?1, ?2, ?3, ?4)",
                (id, email, password_hash, username),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_email(conn, email))
    }

    // -- Messages --

    pub fn insert_message(&self, id: &str, content: &str, sender_id: &str, receiver_id: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (id, content, sender_id, receiver_id) VALUES (?1, ?2, ?3, ?4)",
                (id, content, sender_id, receiver_id),
            )?;
            Ok(())
        })
    }

    /// Full scan of the message log in insertion order. There is no
    /// participant filter; callers that want a single conversation must
    /// filter the result themselves.
    pub fn list_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(query_all_messages)
    }

    // -- Friends --

    /// Insert a directed friendship edge. No duplicate, reciprocity, or
    /// self-friend check: the edge is stored exactly as given.
    pub fn add_friend(&self, id: &str, user_id: &str, friend_id: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO friends (id, user_id, friend_id) VALUES (?1, ?2, ?3)",
                (id, user_id, friend_id),
            )?;
            Ok(())
        })
    }

    /// Edges where `user_id` is the initiating side. The reverse edge is a
    /// separate row that only its own initiator sees.
    pub fn get_friends(&self, user_id: &str) -> Result<Vec<FriendRow>> {
        self.with_conn(|conn| query_friends(conn, user_id))
    }

    // -- Matches --

    /// Record a proposal from `user_id` to `match_id`, always pending.
    /// Nothing prevents a second row for the same pair.
    pub fn create_match(&self, id: &str, user_id: &str, match_id: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO matches (id, user_id, match_id, status) VALUES (?1, ?2, ?3, 'pending')",
                (id, user_id, match_id),
            )?;
            Ok(())
        })
    }

    /// Matches where `user_id` appears on either side of the row, each
    /// joined with the full account record of proposer and target. Storage
    /// is directional but this read treats the relationship as undirected.
    pub fn get_matches_for_user(&self, user_id: &str) -> Result<Vec<(MatchRow, UserRow, UserRow)>> {
        self.with_conn(|conn| query_matches_for_user(conn, user_id))
    }
}

fn query_user_by_email(conn: &Connection, email: &str) -> Result<Option<UserRow>> {
    let mut stmt =
        conn.prepare("SELECT id, email, password, username FROM users WHERE email = ?1")?;

    let row = stmt
        .query_row([email], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                email: row.get(1)?,
                password: row.get(2)?,
                username: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_all_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    // rowid preserves insertion order; created_at only has second precision
    let mut stmt = conn.prepare(
        "SELECT id, content, sender_id, receiver_id, created_at
         FROM messages
         ORDER BY rowid",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                content: row.get(1)?,
                sender_id: row.get(2)?,
                receiver_id: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_friends(conn: &Connection, user_id: &str) -> Result<Vec<FriendRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, friend_id
         FROM friends
         WHERE user_id = ?1
         ORDER BY rowid",
    )?;

    let rows = stmt
        .query_map([user_id], |row| {
            Ok(FriendRow {
                id: row.get(0)?,
                user_id: row.get(1)?,
                friend_id: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_matches_for_user(conn: &Connection, user_id: &str) -> Result<Vec<(MatchRow, UserRow, UserRow)>> {
    let mut stmt = conn.prepare(
        "SELECT m.id, m.user_id, m.match_id, m.status, m.created_at,
                p.id, p.email, p.password, p.username,
                t.id, t.email, t.password, t.username
         FROM matches m
         JOIN users p ON p.id = m.user_id
         JOIN users t ON t.id = m.match_id
         WHERE m.user_id = ?1 OR m.match_id = ?1
         ORDER BY m.rowid",
    )?;

    let rows = stmt
        .query_map([user_id], |row| {
            Ok((
                MatchRow {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    match_id: row.get(2)?,
                    status: row.get(3)?,
                    created_at: row.get(4)?,
                },
                UserRow {
                    id: row.get(5)?,
                    email: row.get(6)?,
                    password: row.get(7)?,
                    username: row.get(8)?,
                },
                UserRow {
                    id: row.get(9)?,
                    email: row.get(10)?,
                    password: row.get(11)?,
                    username: row.get(12)?,
                },
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
