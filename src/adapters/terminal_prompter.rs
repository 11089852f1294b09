use std::io::IsTerminal;

use dialoguer::{Input, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// `Prompter` backed by dialoguer on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ensure_tty(prompt: &str) -> Result<(), AppError> {
        if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
            return Ok(());
        }
        Err(AppError::config_error(format!(
            "'{prompt}' requires an interactive terminal. Pass --type and --name (and --unit-name) instead."
        )))
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, AppError> {
        Self::ensure_tty(prompt)?;

        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| AppError::config_error(format!("{prompt} failed: {e}")))
    }

    fn input(&self, prompt: &str, allow_empty: bool) -> Result<String, AppError> {
        Self::ensure_tty(prompt)?;

        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()
            .map_err(|e| AppError::config_error(format!("Failed to read answer: {e}")))?;

        Ok(answer.trim().to_string())
    }
}
