//! # shx-common
//!
//! Common types shared across the shx toolkit: the error taxonomy for
//! process operations and the opaque [`ProcessHandle`] callers use to
//! refer to background processes.

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{Error, Result};
pub use types::ProcessHandle;
