//! Process liveness probes and exit status interpretation.

use std::process::ExitStatus;

use shx_common::Result;

/// Check whether a process with the given PID currently exists.
///
/// Sends the null signal (signal 0), which performs permission and
/// existence checks without delivering anything. `ESRCH` means the
/// process is gone; `EPERM` means it exists but belongs to someone
/// we cannot signal, which still counts as alive.
#[cfg(unix)]
pub fn process_exists(pid: u32) -> Result<bool> {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    match kill(Pid::from_raw(pid as i32), None) {
        Ok(()) => Ok(true),
        Err(Errno::ESRCH) => Ok(false),
        Err(Errno::EPERM) => Ok(true),
        Err(e) => Err(std::io::Error::from_raw_os_error(e as i32).into()),
    }
}

#[cfg(not(unix))]
pub fn process_exists(_pid: u32) -> Result<bool> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "process liveness probe is only implemented on Unix",
    )
    .into())
}

/// Effective integer exit code for a finished process.
///
/// Uses the real exit code when the process exited normally. On Unix a
/// signal-killed child has no exit code, so the shell convention of
/// `128 + signal` is used instead. Falls back to `-1` when neither is
/// available.
pub fn exit_code_of(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
