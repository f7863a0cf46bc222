use thiserror::Error;

/// Errors produced while turning user input into entity fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid count {input:?}: expected a non-negative integer")]
    InvalidCount { input: String },

    #[error("invalid date {input:?}: expected YYYY-MM-DD or N/A")]
    InvalidDate { input: String },

    #[error("invalid recipe ingredient {input:?}: {reason}")]
    InvalidRecipeIngredient { input: String, reason: String },
}
