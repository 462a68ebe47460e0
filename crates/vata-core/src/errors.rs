//! Error handling for vata-core
//!
//! Construction and parsing fail with the domain [`VataError`]; callers at
//! the I/O boundary convert it into `ExError`.

pub use vata_errors::VataError;

/// Result type alias using VataError
pub type Result<T> = std::result::Result<T, VataError>;

/// Create a malformed options error
pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> VataError {
    VataError::MalformedOptions {
        input: input.to_string(),
        reason: reason.into(),
    }
}
