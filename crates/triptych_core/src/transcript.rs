//! Append-only conversation transcript.

use crate::{Role, Turn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The full ordered conversation history driving generation context.
///
/// A transcript is created once per session with a fixed system turn at
/// index 0 and grows monotonically: turns are appended, never removed,
/// truncated, or reordered. Concurrent readers take an immutable
/// [`snapshot`](Transcript::snapshot); the single writer appends through
/// the owning session.
///
/// # Examples
///
/// ```
/// use triptych_core::{Role, Transcript, Turn};
///
/// let mut transcript = Transcript::new("You write single-file HTML apps.");
/// transcript.push(Turn::user("App idea: todo list"));
///
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(transcript.turns()[0].role, Role::System);
/// assert_eq!(transcript.turns()[1].content, "App idea: todo list");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create a transcript seeded with the task-defining system turn.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::new(Role::System, system_prompt)],
        }
    }

    /// Append a turn to the end of the transcript.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns in order, system turn first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns, including the system turn.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// A transcript always contains at least the system turn.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// An immutable shared snapshot of the current turns.
    ///
    /// Snapshots are cheap to clone across concurrent pipelines and are
    /// unaffected by later appends to the transcript.
    pub fn snapshot(&self) -> Arc<[Turn]> {
        Arc::from(self.turns.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_turn_fixed_at_index_zero() {
        let mut transcript = Transcript::new("task");
        transcript.push(Turn::user("hello"));
        transcript.push(Turn::assistant("hi"));

        assert_eq!(transcript.turns()[0].role, Role::System);
        assert_eq!(transcript.turns()[0].content, "task");
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_appends() {
        let mut transcript = Transcript::new("task");
        transcript.push(Turn::user("first"));

        let snapshot = transcript.snapshot();
        transcript.push(Turn::user("second"));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(transcript.len(), 3);
        assert_eq!(snapshot[1].content, "first");
    }

    #[test]
    fn never_empty() {
        let transcript = Transcript::new("task");
        assert!(!transcript.is_empty());
        assert_eq!(transcript.len(), 1);
    }
}
