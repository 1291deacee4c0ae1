//! Store location resolution.
//!
//! The only configuration this tool carries: where the chat server
//! database lives. The `--db` flag beats the environment, the environment
//! beats the default.

use std::ffi::OsString;
use std::path::PathBuf;

/// Default database file, matching the chat server's own location.
pub const DEFAULT_DB_PATH: &str = "chat_server.db";

/// Environment variable naming the database file.
pub const DB_PATH_ENV: &str = "CHAT_ADMIN_DB";

/// Resolve the database path from the `--db` flag and the environment.
pub fn resolve_db_path(flag: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
    flag.or_else(|| env.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}
