//! Operator confirmation capability.
//!
//! Destructive verbs ask before executing. This trait only supplies the
//! operator's raw answer line; the dispatcher owns the comparison policy
//! (a "yes" for single-user deletion, the exact "DELETE ALL" phrase for a
//! bulk clear), so tests can script answers instead of driving a terminal.

use dialoguer::Input;

use crate::error::Result;

/// Source of operator answers to confirmation prompts.
pub trait Confirmer {
    /// Show `prompt` and return the operator's answer line.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Interactive confirmer reading from the terminal.
pub struct ConsoleConfirmer;

impl Confirmer for ConsoleConfirmer {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}
