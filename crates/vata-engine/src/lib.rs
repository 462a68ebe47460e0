//! VATA Engine - execution layer
//!
//! Runs serialized commands against the external `vata` binary and hands
//! back what it printed:
//! - [`VataConfig`]: binary path, default timeout, default encoding
//! - [`Executor`]: one child process per call, optional timeout
//! - [`ExecutionResult`]: decoded stdout/stderr plus exit status
//! - [`Vata`]: per-operation helpers that build, serialize and execute

pub mod config;
pub mod executor;
pub mod result;
pub mod vata;

pub use config::VataConfig;
pub use executor::{Executor, StderrMode};
pub use result::ExecutionResult;
pub use vata::Vata;
pub use vata_errors::{ExError, ExErrorKind, Result};
