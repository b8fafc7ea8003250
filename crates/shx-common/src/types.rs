//! Core identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for one launched background process.
///
/// Handles are generated at launch time from a random UUID and are the
/// only way callers refer to a process afterward. A handle is never
/// reused: every call to [`ProcessHandle::generate`] yields a fresh one.
///
/// # Example
/// ```
/// use shx_common::ProcessHandle;
///
/// let a = ProcessHandle::generate();
/// let b = ProcessHandle::generate();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessHandle(String);

impl ProcessHandle {
    /// Generates a fresh random handle.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a handle from an existing identifier string.
    ///
    /// Used when a caller hands back a handle it received from a prior
    /// `start`, e.g. after round-tripping it through a text protocol.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProcessHandle {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProcessHandle {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
