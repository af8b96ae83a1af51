//! Dispatch errors: every condition is terminal for the current cycle.

use thiserror::Error;

use crate::exitcode;

/// Failure reported by a command or option handler.
///
/// Handlers signal failure with an optional human-readable reason; the engine
/// never inspects the reason, it only propagates it.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", .reason.as_deref().unwrap_or("handler returned failure"))]
pub struct HandlerError {
    reason: Option<String>,
}

impl HandlerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// Result type returned by command and option handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Dispatch errors surface the first violation encountered; no batching,
/// no recovery. The payloads name the offending token or option for
/// diagnostics and are not part of the minimal matching contract.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("no command provided")]
    NoArgsProvided,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("missing required option: {0}")]
    MissingRequiredOption(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("command execution failed: {0}")]
    CommandExecutionFailed(#[from] HandlerError),

    #[error("too many commands declared: {declared} (max {max})")]
    TooManyCommands { declared: usize, max: usize },

    #[error("too many options: {count} (max {max})")]
    TooManyOptions { count: usize, max: usize },
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

impl DispatchError {
    /// Get the appropriate process exit code for this error.
    ///
    /// Catalog capacity violations are configuration errors, handler failures
    /// are software errors, everything else is a usage error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::TooManyCommands { .. } | DispatchError::TooManyOptions { .. } => {
                exitcode::CONFIG
            }
            DispatchError::CommandExecutionFailed(_) => exitcode::SOFTWARE,
            _ => exitcode::USAGE,
        }
    }
}
