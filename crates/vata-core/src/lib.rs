//! VATA Core - command model and serialization pipeline
//!
//! This crate provides the typed request model for the external `vata`
//! tree automata tool:
//! - Option enumerations with integer codes and canonical tokens
//! - Per-operation option bundles and the `-o` option-string grammar
//! - Run flags (`-t`, `-v`, `-n`, `-p`/`-s`)
//! - Validated, immutable [`Command`] values
//! - Deterministic conversion of a command into an argument vector
//!
//! Nothing in this crate spawns processes; see `vata-engine` for that.

pub mod command;
pub mod errors;
pub mod flags;
pub mod options;
pub mod serializer;

// Re-export commonly used types
pub use command::Command;
pub use errors::{Result, VataError};
pub use flags::{Prune, RunFlags};
pub use options::{
    is_valid_code, Algorithm, BundleKind, CodedEnum, Direction, DirectionOptions, Encoding,
    EquivalenceOptions, InclusionOptions, Operation, OptionBundle, Order,
};
pub use serializer::serialize_command;
