//! SQLite-backed account repository.

pub mod users;

pub use users::{UserRow, UserStore};
