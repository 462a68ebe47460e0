//! Structured logging facility for the VATA wrapper
//!
//! This crate provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use vata_logging::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

// Used by the exported macros so callers need not depend on these crates.
#[doc(hidden)]
pub use vata_core_types::schema;
#[doc(hidden)]
pub use vata_errors::ExError;
