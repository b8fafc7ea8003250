//! Caller-facing report types for the lifecycle operations.
//!
//! Each type carries structured fields and renders the canonical
//! human-readable form through `Display`, so callers can consume
//! either representation.

use std::fmt;

use shx_common::ProcessHandle;
use shx_process_state::ProcessStatus;

/// Placeholder shown when captured output is empty or not yet captured.
pub const NO_OUTPUT_MARKER: &str = "[No output]";

/// Snapshot of one process returned by a status check.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub handle: ProcessHandle,
    pub command: String,
    pub status: ProcessStatus,
    /// Whole seconds since launch, measured at report time.
    pub elapsed_seconds: i64,
    /// Present only for processes that completed on their own.
    pub exit_code: Option<i32>,
    /// Combined output, present once a terminal status has been
    /// observed and the streams drained.
    pub output: Option<String>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status.is_running() {
            write!(
                f,
                "Process {} is RUNNING.\nCommand: {}\nStarted: {} seconds ago\nStatus: {}",
                self.handle, self.command, self.elapsed_seconds, self.status
            )
        } else {
            let exit_code = match self.exit_code {
                Some(code) => code.to_string(),
                None => "N/A".to_string(),
            };
            let output = match self.output.as_deref() {
                Some(text) if !text.is_empty() => text,
                _ => NO_OUTPUT_MARKER,
            };
            write!(
                f,
                "Process {} is {}.\nCommand: {}\nExit Code: {}\nDuration: {} seconds\nOutput:\n{}",
                self.handle, self.status, self.command, exit_code, self.elapsed_seconds, output
            )
        }
    }
}

/// What a stop request actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// The termination sequence ran and the record is now marked
    /// terminated.
    Stopped { handle: ProcessHandle },
    /// The process had already exited before any signal was sent;
    /// the record was left untouched.
    AlreadyTerminated { handle: ProcessHandle },
}

impl fmt::Display for StopOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped { handle } => write!(f, "Process {} has been stopped.", handle),
            Self::AlreadyTerminated { handle } => {
                write!(f, "Process {} is already terminated.", handle)
            }
        }
    }
}

/// One row of the process listing.
#[derive(Debug, Clone)]
pub struct ProcessListEntry {
    pub handle: ProcessHandle,
    pub command: String,
    /// Last-observed status; `list` does not refresh it.
    pub status: ProcessStatus,
    pub elapsed_seconds: i64,
    /// Exit code for a process that is no longer alive, when one
    /// could be retrieved. Rendered as "N/A" otherwise.
    pub exit_code: Option<i32>,
    /// Whether the OS process was alive at listing time.
    pub alive: bool,
}

/// Full registry listing, oldest launch first.
#[derive(Debug, Clone, Default)]
pub struct ProcessListing {
    pub entries: Vec<ProcessListEntry>,
}

impl ProcessListing {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ProcessListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "No background processes are currently tracked.");
        }

        writeln!(f, "Background Processes:")?;
        writeln!(f, "===================")?;
        for entry in &self.entries {
            writeln!(f, "ID: {}", entry.handle)?;
            writeln!(f, "Command: {}", entry.command)?;
            writeln!(f, "Status: {}", entry.status)?;
            writeln!(f, "Runtime: {} seconds", entry.elapsed_seconds)?;
            if !entry.alive {
                match entry.exit_code {
                    Some(code) => writeln!(f, "Exit Code: {}", code)?,
                    None => writeln!(f, "Exit Code: N/A")?,
                }
            }
            writeln!(f, "---")?;
        }
        Ok(())
    }
}
