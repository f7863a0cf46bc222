use std::fmt;

use thiserror::Error;

/// Which store an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Ingredient,
    Recipe,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Ingredient => write!(f, "ingredient"),
            EntityKind::Recipe => write!(f, "recipe"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("{kind} not found: {name}")]
    NotFound { kind: EntityKind, name: String },

    #[error("context error: {0}")]
    Ctx(#[from] rpl_ctx::CtxError),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
