//! Conversation turn types.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One message in a conversation transcript.
///
/// Turns are immutable once appended to a [`Transcript`](crate::Transcript).
///
/// # Examples
///
/// ```
/// use triptych_core::{Role, Turn};
///
/// let turn = Turn::new(Role::User, "App idea: todo list");
/// assert_eq!(turn.role, Role::User);
/// assert_eq!(turn.content, "App idea: todo list");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The role of the message sender
    pub role: Role,
    /// The textual content of the message
    pub content: String,
}

impl Turn {
    /// Create a new turn.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
