//! Draining captured stdout/stderr into a combined output blob.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{ChildStderr, ChildStdout};

/// Drain a finished process's captured streams into one text blob.
///
/// stdout comes first, line by line, each with a trailing newline. If
/// stderr produced anything it is appended under a `STDERR:` label so
/// the two streams stay distinguishable. Read failures never abort the
/// collection; they are recorded inline as diagnostic lines instead.
///
/// This consumes the stream handles, so it can run at most once per
/// process.
pub async fn collect_output(
    stdout: Option<ChildStdout>,
    stderr: Option<ChildStderr>,
) -> String {
    let mut output = String::new();

    if let Some(stream) = stdout {
        let (text, read_error) = drain_stream(stream, "stdout").await;
        output.push_str(&text);
        if let Some(diagnostic) = read_error {
            output.push_str(&diagnostic);
        }
    }

    if let Some(stream) = stderr {
        let (text, read_error) = drain_stream(stream, "stderr").await;
        if !text.is_empty() {
            output.push_str("STDERR:\n");
            output.push_str(&text);
        }
        if let Some(diagnostic) = read_error {
            output.push_str(&diagnostic);
        }
    }

    output
}

/// Read a stream to EOF line by line. Returns the accumulated text and,
/// if reading failed partway, a diagnostic line describing the failure.
async fn drain_stream<R>(stream: R, stream_name: &str) -> (String, Option<String>)
where
    R: AsyncRead + Unpin,
{
    let mut text = String::new();
    let mut lines = BufReader::new(stream).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                text.push_str(&line);
                text.push('\n');
            }
            Ok(None) => return (text, None),
            Err(e) => {
                return (
                    text,
                    Some(format!("Error reading {}: {}\n", stream_name, e)),
                )
            }
        }
    }
}
