use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandErrorKind {
    InvalidState,
    NotSupported,
    TransportClosed,
    Internal,
}

/// Failure reported by a session-client implementation when a relayed
/// command is rejected. The view controllers never construct these; they
/// only log them.
#[derive(Debug, Clone, Error)]
#[error("{kind:?}: {message}")]
pub struct CommandError {
    pub kind: CommandErrorKind,
    pub message: String,
}

impl CommandError {
    pub fn new(kind: CommandErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
