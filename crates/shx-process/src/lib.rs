//! # shx-process
//!
//! Low-level process primitives shared by the background process manager
//! and the foreground terminal executor.
//!
//! ## Modules
//!
//! - `execute` - spawning background processes with captured output
//! - `check` - liveness probes and exit status interpretation
//! - `terminate` - graceful and forced termination signals
//! - `output` - draining captured stdout/stderr into a combined blob

pub mod check;
pub mod execute;
pub mod output;
pub mod terminate;

// Re-export commonly used functions
pub use check::{exit_code_of, process_exists};
pub use execute::launch;
pub use output::collect_output;
pub use terminate::{force_kill, terminate_gracefully};
