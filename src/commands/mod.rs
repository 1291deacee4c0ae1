//! Verb execution: confirmation, repository calls, and output.
//!
//! Destructive verbs confirm before the store is touched. `delete`
//! proceeds on an answer of "yes" in any casing; `clear` demands the
//! literal phrase "DELETE ALL" — a stricter bar, matching the blast
//! radius. A declined confirmation is [`AdminError::Cancelled`].

use std::path::Path;

use crate::cli::Command;
use crate::confirm::Confirmer;
use crate::error::{AdminError, Result};
use crate::store::UserStore;

/// Answer that passes a yes/no confirmation (compared case-insensitively).
const YES: &str = "yes";

/// Literal phrase required to clear the whole store (case-sensitive).
const CLEAR_PHRASE: &str = "DELETE ALL";

/// Execute one verb against the store at `db_path`.
pub fn run(command: Command, db_path: &Path, confirmer: &mut dyn Confirmer) -> Result<()> {
    match command {
        Command::List => list(db_path),
        Command::Reset {
            username,
            new_password,
        } => reset(db_path, &username, &new_password),
        Command::Delete { username } => delete(db_path, &username, confirmer),
        Command::Create { username, password } => create(db_path, &username, &password, confirmer),
        Command::Admin { username } => set_admin(db_path, &username, true),
        Command::Unadmin { username } => set_admin(db_path, &username, false),
        Command::Clear => clear(db_path, confirmer),
    }
}

/// "yes" in any casing confirms; anything else declines.
fn answers_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(YES)
}

fn list(db_path: &Path) -> Result<()> {
    let store = UserStore::open(db_path)?;
    let users = store.list()?;

    if users.is_empty() {
        println!("No users found in database.");
        return Ok(());
    }

    println!();
    println!("=== Users in Database ===");
    println!("{:<5} {:<20} {:<8} {}", "ID", "Username", "Admin", "Created At");
    println!("{}", "-".repeat(60));
    for user in &users {
        let admin = if user.is_admin { "Yes" } else { "No" };
        println!(
            "{:<5} {:<20} {:<8} {}",
            user.id,
            user.username,
            admin,
            user.created_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    println!();
    Ok(())
}

fn reset(db_path: &Path, username: &str, new_password: &str) -> Result<()> {
    let store = UserStore::open(db_path)?;
    store.reset_password(username, new_password)?;
    println!("Password reset successfully for user '{username}'");
    Ok(())
}

fn delete(db_path: &Path, username: &str, confirmer: &mut dyn Confirmer) -> Result<()> {
    let prompt = format!("Are you sure you want to delete user '{username}'? (yes/no)");
    if !answers_yes(&confirmer.ask(&prompt)?) {
        return Err(AdminError::Cancelled);
    }

    let store = UserStore::open(db_path)?;
    store.delete(username)?;
    println!("User '{username}' deleted successfully.");
    Ok(())
}

fn create(
    db_path: &Path,
    username: &str,
    password: &str,
    confirmer: &mut dyn Confirmer,
) -> Result<()> {
    let is_admin = answers_yes(&confirmer.ask("Make this user an admin? (yes/no)")?);

    let store = UserStore::open(db_path)?;
    store.create(username, password, is_admin)?;

    let admin_note = if is_admin { " (admin)" } else { "" };
    println!("User '{username}' created successfully{admin_note}.");
    Ok(())
}

fn set_admin(db_path: &Path, username: &str, grant: bool) -> Result<()> {
    let store = UserStore::open(db_path)?;
    store.set_admin(username, grant)?;

    let status = if grant { "granted" } else { "removed" };
    println!("Admin status {status} for user '{username}'.");
    Ok(())
}

fn clear(db_path: &Path, confirmer: &mut dyn Confirmer) -> Result<()> {
    let answer =
        confirmer.ask("WARNING: This will delete ALL users. Type 'DELETE ALL' to confirm")?;
    if answer != CLEAR_PHRASE {
        return Err(AdminError::Cancelled);
    }

    let store = UserStore::open(db_path)?;
    store.clear_all()?;
    println!("All users deleted.");
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────
