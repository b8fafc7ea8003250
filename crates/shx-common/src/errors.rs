//! Error types for shx operations.
//!
//! Every public operation in the toolkit returns [`Result`]; OS-level
//! failures are converted to a descriptive [`Error`] value at the boundary
//! of each operation. Nothing here is fatal to the embedding process.

use crate::types::ProcessHandle;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for shx operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The command vector did not pass validation (e.g. it was empty).
    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    /// The OS refused to create the process (bad executable, permissions).
    #[error("Failed to start command '{command}': {reason}")]
    LaunchFailed { command: String, reason: String },

    /// The handle does not resolve in the registry.
    #[error("Process not found: {handle}")]
    NotFound { handle: ProcessHandle },

    /// Signal delivery or exit confirmation failed; the record keeps its
    /// prior status.
    #[error("Failed to stop process {handle}: {reason}")]
    StopFailed { handle: ProcessHandle, reason: String },

    /// A handle collided on insert. Handles are random, so this indicates
    /// a caller re-registering an existing record.
    #[error("Process already registered: {handle}")]
    DuplicateHandle { handle: ProcessHandle },

    /// A foreground command completed with a nonzero exit code.
    #[error("Command not executed successfully, exit code: {exit_code}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// Refusing to overwrite an existing history file.
    #[error("History file already exists: {}", path.display())]
    HistoryFileExists { path: PathBuf },

    /// The history file to load does not exist.
    #[error("History file does not exist: {}", path.display())]
    HistoryFileMissing { path: PathBuf },

    /// I/O error (wraps std::io::Error).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an InvalidCommand error.
    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            reason: reason.into(),
        }
    }

    /// Creates a LaunchFailed error.
    pub fn launch_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LaunchFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Creates a NotFound error.
    pub fn not_found(handle: ProcessHandle) -> Self {
        Self::NotFound { handle }
    }

    /// Creates a StopFailed error.
    pub fn stop_failed(handle: ProcessHandle, reason: impl Into<String>) -> Self {
        Self::StopFailed {
            handle,
            reason: reason.into(),
        }
    }

    /// Creates a DuplicateHandle error.
    pub fn duplicate_handle(handle: ProcessHandle) -> Self {
        Self::DuplicateHandle { handle }
    }

    /// Creates a CommandFailed error.
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}
