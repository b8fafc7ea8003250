//! Observable status of a background process.
//!
//! A launched process starts out [`ProcessStatus::Running`] and moves at
//! most once into one of the terminal statuses. Transitions are one-way:
//! no terminal status ever reverts to `Running`, and a terminal status
//! never changes into a different one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a background process as last observed by the manager.
///
/// The status is refreshed lazily on each status query, so a process that
/// exited on its own still reports `Running` until the next check observes
/// the exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessStatus {
    /// The OS process has not yet been observed to exit.
    Running,
    /// The process exited on its own with code 0.
    CompletedSuccess,
    /// The process exited on its own with a nonzero code.
    CompletedError,
    /// The process was stopped through the manager's termination sequence.
    Terminated,
}

impl ProcessStatus {
    /// Returns true once the process has left `Running`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProcessStatus::CompletedSuccess
                | ProcessStatus::CompletedError
                | ProcessStatus::Terminated
        )
    }

    /// Returns true while the process has not been observed to exit.
    pub fn is_running(&self) -> bool {
        matches!(self, ProcessStatus::Running)
    }

    /// Returns the status name as it appears in status reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Running => "RUNNING",
            ProcessStatus::CompletedSuccess => "COMPLETED_SUCCESS",
            ProcessStatus::CompletedError => "COMPLETED_ERROR",
            ProcessStatus::Terminated => "TERMINATED",
        }
    }

    /// Check if a transition from this status to the target is valid.
    pub fn can_transition_to(&self, target: ProcessStatus) -> bool {
        match (*self, target) {
            // From Running
            (ProcessStatus::Running, ProcessStatus::CompletedSuccess) => true,
            (ProcessStatus::Running, ProcessStatus::CompletedError) => true,
            (ProcessStatus::Running, ProcessStatus::Terminated) => true,

            // Same status (idempotent refresh)
            (current, target) if current == target => true,

            // Terminal statuses never revert or change
            _ => false,
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(ProcessStatus::Running.to_string(), "RUNNING");
        assert_eq!(
            ProcessStatus::CompletedSuccess.to_string(),
            "COMPLETED_SUCCESS"
        );
        assert_eq!(ProcessStatus::CompletedError.to_string(), "COMPLETED_ERROR");
        assert_eq!(ProcessStatus::Terminated.to_string(), "TERMINATED");
    }

    #[test]
    fn test_terminal_predicates() {
        assert!(!ProcessStatus::Running.is_terminal());
        assert!(ProcessStatus::Running.is_running());

        assert!(ProcessStatus::CompletedSuccess.is_terminal());
        assert!(ProcessStatus::CompletedError.is_terminal());
        assert!(ProcessStatus::Terminated.is_terminal());
        assert!(!ProcessStatus::Terminated.is_running());
    }

    #[test]
    fn test_valid_transitions() {
        let running = ProcessStatus::Running;
        assert!(running.can_transition_to(ProcessStatus::CompletedSuccess));
        assert!(running.can_transition_to(ProcessStatus::CompletedError));
        assert!(running.can_transition_to(ProcessStatus::Terminated));
        assert!(running.can_transition_to(ProcessStatus::Running));
    }

    #[test]
    fn test_terminal_statuses_never_change() {
        for terminal in [
            ProcessStatus::CompletedSuccess,
            ProcessStatus::CompletedError,
            ProcessStatus::Terminated,
        ] {
            assert!(!terminal.can_transition_to(ProcessStatus::Running));
            assert!(terminal.can_transition_to(terminal));
            for other in [
                ProcessStatus::CompletedSuccess,
                ProcessStatus::CompletedError,
                ProcessStatus::Terminated,
            ] {
                if other != terminal {
                    assert!(!terminal.can_transition_to(other));
                }
            }
        }
    }
}
