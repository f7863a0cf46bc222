/// Errors from context operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CtxError {
    /// `update` was called before a publish hook was assigned. The update
    /// is rejected without computing a new snapshot.
    #[error("context has no publish hook; assign one before calling update")]
    UpdaterUnset,
}

/// Result alias for context operations.
pub type CtxResult<T> = Result<T, CtxError>;
