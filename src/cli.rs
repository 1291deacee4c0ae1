//! Command-line surface: one subcommand per administrative verb.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chat server user management tool.
#[derive(Debug, Parser)]
#[command(name = "chat-admin", version, about = "Chat server user management tool")]
pub struct Cli {
    /// Path to the chat server database (overrides CHAT_ADMIN_DB).
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// The administrative verbs.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all users.
    List,
    /// Reset a user's password (rotates the salt).
    Reset {
        username: String,
        new_password: String,
    },
    /// Delete a user (asks for confirmation).
    Delete { username: String },
    /// Create a new user (asks whether the account is an admin).
    Create { username: String, password: String },
    /// Grant admin status to a user.
    Admin { username: String },
    /// Remove admin status from a user.
    Unadmin { username: String },
    /// Delete ALL users and sessions (asks for confirmation).
    Clear,
}
