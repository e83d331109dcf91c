// Error types for queue and handler operations

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while recording or replaying edits
#[derive(Debug, Clone, thiserror::Error)]
pub enum CommandError {
    /// A replayed handler failed to apply its edit
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// A replayed handler failed to reverse its edit
    #[error("Undo failed: {0}")]
    UndoFailed(String),

    /// A recorded call names a handler tag nothing was registered under
    #[error("No handler registered for `{0}`")]
    UnknownHandler(String),
}
