//! Termination signals for running processes.
//!
//! These functions only deliver signals. Waiting for the process to
//! actually exit, and escalating from graceful to forced termination,
//! is the caller's job.

use shx_common::Result;

/// Ask a process to shut down with SIGTERM.
#[cfg(unix)]
pub fn terminate_gracefully(pid: u32) -> Result<()> {
    send_signal(pid, nix::sys::signal::Signal::SIGTERM)
}

/// Kill a process with SIGKILL. Cannot be caught or ignored.
#[cfg(unix)]
pub fn force_kill(pid: u32) -> Result<()> {
    send_signal(pid, nix::sys::signal::Signal::SIGKILL)
}

#[cfg(unix)]
fn send_signal(pid: u32, signal: nix::sys::signal::Signal) -> Result<()> {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;
    use tracing::debug;

    match kill(Pid::from_raw(pid as i32), signal) {
        Ok(()) => Ok(()),
        // Process already exited between the caller's check and the signal.
        Err(Errno::ESRCH) => {
            debug!(pid, %signal, "Process already gone, nothing to signal");
            Ok(())
        }
        // Zombies and reparented children can report EPERM after exit.
        Err(Errno::EPERM) => {
            debug!(pid, %signal, "Permission denied sending signal (likely already exited)");
            Ok(())
        }
        Err(e) => Err(std::io::Error::from_raw_os_error(e as i32).into()),
    }
}

#[cfg(not(unix))]
pub fn terminate_gracefully(_pid: u32) -> Result<()> {
    unsupported()
}

#[cfg(not(unix))]
pub fn force_kill(_pid: u32) -> Result<()> {
    unsupported()
}

#[cfg(not(unix))]
fn unsupported() -> Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "signal delivery is only implemented on Unix",
    )
    .into())
}
