//! SQLite-backed user account repository.
//!
//! Tables:
//! - `users`: username, password_hash, salt, is_admin, created_at
//! - `sessions`: session_id, user_id (cascades on user delete), expires_at
//!
//! One `UserStore` owns one connection for the lifetime of the invocation.
//! Every mutating operation checks its precondition, then runs a single
//! statement; SQLite commits it before the call returns. The server's
//! `messages` table is not this tool's business and is left alone.

use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::credentials::{generate_salt, hash_password};
use crate::error::{AdminError, Result};

/// One row of the `list` view: the non-secret account columns.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

/// SQLite-backed account store.
pub struct UserStore {
    conn: Connection,
}

impl UserStore {
    /// Open (or create) the database at the given path.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        // The cascade on sessions.user_id only fires with the pragma on.
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                salt TEXT NOT NULL,
                is_admin INTEGER NOT NULL DEFAULT 0,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );

            CREATE TABLE IF NOT EXISTS sessions (
                session_id TEXT PRIMARY KEY,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                expires_at TIMESTAMP NOT NULL
            );",
        )?;

        Ok(Self { conn })
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All users ordered by id ascending. Empty store yields an empty vec.
    pub fn list(&self) -> Result<Vec<UserRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, username, is_admin, created_at FROM users ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(UserRow {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    is_admin: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Existence gate used by every mutating operation. Exact match,
    /// case-sensitive.
    pub fn exists(&self, username: &str) -> Result<bool> {
        let found = self.conn.query_row(
            "SELECT 1 FROM users WHERE username = ?1",
            params![username],
            |_| Ok(()),
        );
        match found {
            Ok(()) => Ok(true),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Number of user rows.
    pub fn user_count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Stored (password_hash, salt) pair, or `None` for an unknown user.
    pub fn credentials(&self, username: &str) -> Result<Option<(String, String)>> {
        let row = self.conn.query_row(
            "SELECT password_hash, salt FROM users WHERE username = ?1",
            params![username],
            |row| Ok((row.get(0)?, row.get(1)?)),
        );
        match row {
            Ok(pair) => Ok(Some(pair)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Insert a new account with a fresh salt and digest.
    pub fn create(&self, username: &str, password: &str, is_admin: bool) -> Result<()> {
        if self.exists(username)? {
            return Err(AdminError::AlreadyExists(username.to_string()));
        }

        let salt = generate_salt();
        let password_hash = hash_password(password, &salt);

        self.conn.execute(
            "INSERT INTO users (username, password_hash, salt, is_admin)
             VALUES (?1, ?2, ?3, ?4)",
            params![username, password_hash, salt, is_admin],
        )?;
        tracing::info!(username, is_admin, "user created");
        Ok(())
    }

    /// Rotate the credential pair: fresh salt, fresh digest, one UPDATE
    /// writing both. The old salt is discarded, never reused.
    pub fn reset_password(&self, username: &str, new_password: &str) -> Result<()> {
        if !self.exists(username)? {
            return Err(AdminError::NotFound(username.to_string()));
        }

        let salt = generate_salt();
        let password_hash = hash_password(new_password, &salt);

        self.conn.execute(
            "UPDATE users SET password_hash = ?1, salt = ?2 WHERE username = ?3",
            params![password_hash, salt, username],
        )?;
        tracing::info!(username, "password reset");
        Ok(())
    }

    /// Set or clear the admin flag. Touches nothing else.
    pub fn set_admin(&self, username: &str, is_admin: bool) -> Result<()> {
        if !self.exists(username)? {
            return Err(AdminError::NotFound(username.to_string()));
        }
        self.conn.execute(
            "UPDATE users SET is_admin = ?1 WHERE username = ?2",
            params![is_admin, username],
        )?;
        tracing::info!(username, is_admin, "admin flag updated");
        Ok(())
    }

    /// Remove an account. The store's cascade removes its sessions.
    pub fn delete(&self, username: &str) -> Result<()> {
        if !self.exists(username)? {
            return Err(AdminError::NotFound(username.to_string()));
        }
        self.conn
            .execute("DELETE FROM users WHERE username = ?1", params![username])?;
        tracing::info!(username, "user deleted");
        Ok(())
    }

    /// Delete every session and every user. No precondition — clearing an
    /// empty store succeeds. Returns (users, sessions) deleted.
    ///
    /// Sessions are purged explicitly: databases created by the chat
    /// server predate the cascade clause on `sessions.user_id`.
    pub fn clear_all(&self) -> Result<(usize, usize)> {
        let sessions = self.conn.execute("DELETE FROM sessions", [])?;
        let users = self.conn.execute("DELETE FROM users", [])?;
        tracing::info!(users, sessions, "store cleared");
        Ok((users, sessions))
    }
}

// ── Tests ───────────────────────────────────────────────────────────
