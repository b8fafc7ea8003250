//! Per-process bookkeeping.

use chrono::{DateTime, Utc};
use shx_common::ProcessHandle;
use shx_process_state::ProcessStatus;
use tokio::process::Child;
use tokio::sync::{Mutex, MutexGuard};

/// Mutable half of a process record. Guarded by one lock so status,
/// exit code and output always change together.
#[derive(Debug)]
pub(crate) struct RecordInner {
    /// Owned OS child. Kept after exit so repeated liveness probes
    /// keep returning the cached exit status.
    pub child: Child,
    pub status: ProcessStatus,
    /// Set once, the first time the process is observed to have
    /// exited on its own. Stays `None` for terminated processes.
    pub exit_code: Option<i32>,
    /// Combined stdout/stderr, captured at most once after exit.
    pub output: Option<String>,
}

/// One tracked background process.
///
/// Identity fields never change after creation; everything the
/// lifecycle mutates lives in [`RecordInner`] behind an async mutex.
#[derive(Debug)]
pub struct ProcessRecord {
    handle: ProcessHandle,
    command: String,
    pid: u32,
    started_at: DateTime<Utc>,
    inner: Mutex<RecordInner>,
}

impl ProcessRecord {
    pub(crate) fn new(handle: ProcessHandle, command: String, pid: u32, child: Child) -> Self {
        Self {
            handle,
            command,
            pid,
            started_at: Utc::now(),
            inner: Mutex::new(RecordInner {
                child,
                status: ProcessStatus::Running,
                exit_code: None,
                output: None,
            }),
        }
    }

    pub fn handle(&self) -> &ProcessHandle {
        &self.handle
    }

    /// The launched argv, joined with single spaces. Display only.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds since the process was started.
    pub fn elapsed_seconds(&self) -> i64 {
        Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, RecordInner> {
        self.inner.lock().await
    }
}
