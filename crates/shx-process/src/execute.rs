//! Background process launching.

use std::process::Stdio;

use shx_common::{Error, Result};
use tokio::process::{Child, Command};
use tracing::debug;

/// Spawn a background process from an argument vector.
///
/// The first element is the executable, the rest are its arguments.
/// stdout and stderr are piped so the output can be collected after the
/// process finishes; stdin is closed so the child never blocks waiting
/// for input.
///
/// Returns as soon as the child exists. The caller owns the [`Child`]
/// and is responsible for reaping it.
pub fn launch(argv: &[String]) -> Result<Child> {
    let (executable, args) = argv
        .split_first()
        .ok_or_else(|| Error::invalid_command("command must not be empty"))?;
    if executable.is_empty() {
        return Err(Error::invalid_command("executable name must not be empty"));
    }

    debug!(%executable, ?args, "Spawning background process");

    Command::new(executable)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| Error::launch_failed(argv.join(" "), e.to_string()))
}
