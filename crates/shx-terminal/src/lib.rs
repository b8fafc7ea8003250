//! # shx-terminal
//!
//! Foreground command execution. Runs a command to completion and
//! hands back its standard output, as a counterpart to the background
//! lifecycle in `shx-process-management`.

use shx_common::{Error, Result};
use shx_process::exit_code_of;
use tokio::process::Command;
use tracing::debug;

/// Runs a command to completion and returns its standard output.
///
/// Blocks until the process exits. A nonzero exit code is reported as
/// [`Error::CommandFailed`] carrying the code and whatever the process
/// wrote to stderr; standard output is discarded in that case.
pub async fn execute(argv: &[String]) -> Result<String> {
    let (executable, args) = argv
        .split_first()
        .ok_or_else(|| Error::invalid_command("command must not be empty"))?;
    if executable.is_empty() {
        return Err(Error::invalid_command("executable name must not be empty"));
    }

    let command = argv.join(" ");
    debug!(command = %command, "Executing foreground command");

    let output = Command::new(executable)
        .args(args)
        .output()
        .await
        .map_err(|e| Error::launch_failed(command.clone(), e.to_string()))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(Error::command_failed(
            command,
            exit_code_of(&output.status),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}
