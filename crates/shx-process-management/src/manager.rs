//! The public-facing lifecycle orchestrator.
//!
//! Owns the registry and drives every state transition. Status is
//! refreshed lazily: nothing watches a process in the background, the
//! record is only brought up to date when a caller asks about it.

use std::sync::Arc;
use std::time::Duration;

use shx_common::{Error, ProcessHandle, Result};
use shx_history::CommandHistory;
use shx_process::{collect_output, exit_code_of, force_kill, launch, terminate_gracefully};
use shx_process_state::ProcessStatus;
use tracing::{debug, info, warn};

use crate::record::{ProcessRecord, RecordInner};
use crate::registry::ProcessRegistry;
use crate::report::{ProcessListEntry, ProcessListing, StatusReport, StopOutcome};

/// History marker prepended to every background launch entry.
const ASYNC_MARKER: &str = "[ASYNC] ";

/// How often termination waits re-probe the child for exit.
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Timeouts for the graceful-then-forced termination sequence.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// How long to wait for exit after the graceful signal.
    pub graceful_timeout: Duration,
    /// How long to wait for exit after escalating to a forced kill.
    pub force_kill_timeout: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            graceful_timeout: Duration::from_secs(5),
            force_kill_timeout: Duration::from_secs(5),
        }
    }
}

/// Launches and tracks background OS processes.
///
/// Every launch is identified by an opaque [`ProcessHandle`]. Records
/// stay in the registry after the process finishes, so completed and
/// terminated processes remain inspectable and listable. Each
/// successful launch is also appended to the shared [`CommandHistory`].
///
/// All operations are safe to call concurrently from multiple tasks.
#[derive(Debug)]
pub struct ProcessManager {
    registry: ProcessRegistry,
    history: Arc<CommandHistory>,
    config: ManagerConfig,
}

impl ProcessManager {
    /// Creates a manager with default timeouts, recording launches in
    /// the given history.
    pub fn new(history: Arc<CommandHistory>) -> Self {
        Self::with_config(history, ManagerConfig::default())
    }

    pub fn with_config(history: Arc<CommandHistory>, config: ManagerConfig) -> Self {
        Self {
            registry: ProcessRegistry::new(),
            history,
            config,
        }
    }

    /// Starts `argv` in the background and returns its handle.
    ///
    /// Returns as soon as the process is spawned. On launch failure
    /// nothing is recorded, neither in the registry nor in the
    /// history.
    pub async fn start(&self, argv: &[String]) -> Result<ProcessHandle> {
        let child = launch(argv)?;
        let command = argv.join(" ");
        let pid = child.id().ok_or_else(|| {
            Error::launch_failed(command.clone(), "process exited before a PID could be observed")
        })?;

        let handle = ProcessHandle::generate();
        let record = Arc::new(ProcessRecord::new(handle.clone(), command.clone(), pid, child));
        self.registry.insert(record)?;
        self.history.append(format!("{}{}", ASYNC_MARKER, command));

        info!(%handle, pid, command = %command, "Started background process");
        Ok(handle)
    }

    /// Refreshes and reports the status of one process.
    ///
    /// The first check that observes the process dead classifies it
    /// (exit code 0 means success) and drains its output; later checks
    /// return the same cached result. A record a stop request already
    /// marked terminated keeps that status, only its output is still
    /// captured once.
    pub async fn check_status(&self, handle: &ProcessHandle) -> Result<StatusReport> {
        let record = self
            .registry
            .get(handle)
            .ok_or_else(|| Error::not_found(handle.clone()))?;

        let mut inner = record.lock().await;

        // Settled records never change again; skip the OS probe.
        if inner.status.is_terminal() && inner.output.is_some() {
            return Ok(Self::report_from(&record, &inner));
        }

        match inner.child.try_wait() {
            Ok(None) => {
                debug!(%handle, "Process still running");
                Ok(Self::report_from(&record, &inner))
            }
            Ok(Some(exit_status)) => {
                if inner.status.is_running() {
                    let exit_code = exit_code_of(&exit_status);
                    let next = if exit_code == 0 {
                        ProcessStatus::CompletedSuccess
                    } else {
                        ProcessStatus::CompletedError
                    };
                    if inner.status.can_transition_to(next) {
                        inner.status = next;
                        inner.exit_code = Some(exit_code);
                        info!(%handle, exit_code, status = %next, "Process completed");
                    }
                }
                if inner.output.is_none() {
                    let stdout = inner.child.stdout.take();
                    let stderr = inner.child.stderr.take();
                    // The process is dead, so whatever remains in the
                    // pipes is already fully produced and bounded.
                    inner.output = Some(collect_output(stdout, stderr).await);
                }
                Ok(Self::report_from(&record, &inner))
            }
            // The probe raced with the exit and the process is already
            // reaped. Report the last known state instead of an error.
            Err(e) => {
                debug!(%handle, error = %e, "Liveness probe failed, reporting last known status");
                Ok(Self::report_from(&record, &inner))
            }
        }
    }

    /// Stops a running process, gracefully first, by force if needed.
    ///
    /// Waits up to `graceful_timeout` after the termination signal and
    /// up to `force_kill_timeout` more after escalating to a kill. The
    /// record is marked terminated either way. A process that already
    /// exited is reported as such and its record is left untouched.
    pub async fn stop(&self, handle: &ProcessHandle) -> Result<StopOutcome> {
        let record = self
            .registry
            .get(handle)
            .ok_or_else(|| Error::not_found(handle.clone()))?;

        {
            let mut inner = record.lock().await;
            match inner.child.try_wait() {
                Ok(None) => {}
                Ok(Some(_)) | Err(_) => {
                    return Ok(StopOutcome::AlreadyTerminated {
                        handle: handle.clone(),
                    });
                }
            }
        }

        let pid = record.pid();
        info!(%handle, pid, "Stopping background process");

        terminate_gracefully(pid)
            .map_err(|e| Error::stop_failed(handle.clone(), e.to_string()))?;

        if !wait_for_exit(&record, self.config.graceful_timeout).await {
            warn!(%handle, pid, "Process survived graceful termination, escalating to forced kill");
            force_kill(pid).map_err(|e| Error::stop_failed(handle.clone(), e.to_string()))?;
            if !wait_for_exit(&record, self.config.force_kill_timeout).await {
                warn!(%handle, pid, "Process still alive after forced kill, marking terminated anyway");
            }
        }

        // Mark terminated unless a concurrent status check already
        // classified the exit.
        {
            let mut inner = record.lock().await;
            if inner.status.can_transition_to(ProcessStatus::Terminated) {
                inner.status = ProcessStatus::Terminated;
            }
        }

        info!(%handle, "Process stopped");
        Ok(StopOutcome::Stopped {
            handle: handle.clone(),
        })
    }

    /// Lists every process ever started, oldest first.
    ///
    /// Read-only: liveness is probed for display, but stored status is
    /// not refreshed and no output is captured. A process that exited
    /// since its last check still shows its last-observed status.
    pub async fn list(&self) -> ProcessListing {
        let mut entries = Vec::new();

        for record in self.registry.snapshot() {
            let mut inner = record.lock().await;

            let (alive, exit_code) = match inner.child.try_wait() {
                Ok(None) => (true, None),
                Ok(Some(exit_status)) => {
                    (false, inner.exit_code.or(Some(exit_code_of(&exit_status))))
                }
                Err(_) => (false, inner.exit_code),
            };

            entries.push(ProcessListEntry {
                handle: record.handle().clone(),
                command: record.command().to_string(),
                status: inner.status,
                elapsed_seconds: record.elapsed_seconds(),
                exit_code,
                alive,
            });
        }

        ProcessListing { entries }
    }

    fn report_from(record: &ProcessRecord, inner: &RecordInner) -> StatusReport {
        StatusReport {
            handle: record.handle().clone(),
            command: record.command().to_string(),
            status: inner.status,
            elapsed_seconds: record.elapsed_seconds(),
            exit_code: inner.exit_code,
            output: inner.output.clone(),
        }
    }
}

/// Polls the child until it exits or the timeout elapses. The record
/// lock is released between polls so status checks stay responsive.
async fn wait_for_exit(record: &ProcessRecord, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        {
            let mut inner = record.lock().await;
            match inner.child.try_wait() {
                Ok(Some(_)) => return true,
                Ok(None) => {}
                // Cannot observe the child anymore; treat it as exited.
                Err(_) => return true,
            }
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(EXIT_POLL_INTERVAL).await;
    }
}
