use crate::domain::AppError;

/// Port for interactive questions.
pub trait Prompter {
    /// Ask the user to pick one of `items`; returns the selected index.
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, AppError>;

    /// Ask for free text. `allow_empty` permits an empty answer.
    fn input(&self, prompt: &str, allow_empty: bool) -> Result<String, AppError>;
}
