//! # shx-process-management
//!
//! Background process lifecycle management. Callers start external
//! processes without blocking on them, then poll for status, retrieve
//! combined output once, list everything launched so far, and stop
//! processes with a graceful-then-forced termination sequence.
//!
//! ## Modules
//!
//! - `manager` - the [`ProcessManager`] orchestrator and its config
//! - `record` - per-process state
//! - `registry` - concurrent handle-to-record storage
//! - `report` - caller-facing report types with canonical rendering
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use shx_history::CommandHistory;
//! use shx_process_management::ProcessManager;
//!
//! # async fn demo() -> shx_common::Result<()> {
//! let history = Arc::new(CommandHistory::new());
//! let manager = ProcessManager::new(Arc::clone(&history));
//!
//! let handle = manager.start(&["sleep".into(), "60".into()]).await?;
//! println!("{}", manager.check_status(&handle).await?);
//! println!("{}", manager.stop(&handle).await?);
//! # Ok(())
//! # }
//! ```

pub mod manager;
pub mod record;
pub mod registry;
pub mod report;

// Re-export the public surface
pub use manager::{ManagerConfig, ProcessManager};
pub use record::ProcessRecord;
pub use registry::ProcessRegistry;
pub use report::{ProcessListEntry, ProcessListing, StatusReport, StopOutcome, NO_OUTPUT_MARKER};

// Re-export the shared vocabulary types callers need alongside the manager
pub use shx_common::{Error, ProcessHandle, Result};
pub use shx_process_state::ProcessStatus;
