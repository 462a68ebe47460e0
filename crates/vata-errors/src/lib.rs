//! Error facility for the VATA wrapper
//!
//! - [`ExErrorKind`]: stable classification with `ERR_*` codes
//! - [`ExError`]: structured error carried across crate boundaries
//! - [`VataError`]: domain error taxonomy, converted into `ExError`

use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidCode,
    OptionsMismatch,
    OperandCount,
    MalformedOptions,

    // Configuration
    Config,

    // Execution
    Io,
    Spawn,
    Timeout,

    // Encoding
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidCode => "ERR_INVALID_CODE",
            ExErrorKind::OptionsMismatch => "ERR_OPTIONS_MISMATCH",
            ExErrorKind::OperandCount => "ERR_OPERAND_COUNT",
            ExErrorKind::MalformedOptions => "ERR_MALFORMED_OPTIONS",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Spawn => "ERR_SPAWN",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind is raised while building a command, before any
    /// process is spawned
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput
                | ExErrorKind::InvalidCode
                | ExErrorKind::OptionsMismatch
                | ExErrorKind::OperandCount
                | ExErrorKind::MalformedOptions
        )
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    operation: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            operation: None,
            message: String::new(),
        }
    }

    /// Add the wrapper operation in which the error was raised
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the tool operation token (`incl`, `union`, ...)
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the wrapper operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the tool operation token, if any
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(operation) = &self.operation {
            write!(f, " (vata command: {})", operation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for command construction and execution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VataError {
    // ===== Validation Errors =====
    /// Integer code outside the enumeration's `[MIN, MAX]` range
    #[error("Unknown {enumeration} code {code} (expected {min}..={max})")]
    InvalidCode {
        enumeration: &'static str,
        code: i32,
        min: i32,
        max: i32,
    },

    /// Token that is not in the enumeration's rendering table
    #[error("Unknown {enumeration} token: '{token}'")]
    UnknownToken {
        enumeration: &'static str,
        token: String,
    },

    /// Option bundle does not belong to the operation
    #[error("Operation '{operation}' takes {expected} options, got {found}")]
    OptionsMismatch {
        operation: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Wrong number of operand files for the operation
    #[error("Operation '{operation}' takes {expected} operand(s), got {found}")]
    OperandCount {
        operation: String,
        expected: usize,
        found: usize,
    },

    /// Option string does not follow the `key=value,...` grammar
    #[error("Malformed options '{input}': {reason}")]
    MalformedOptions { input: String, reason: String },

    // ===== Configuration Errors =====
    /// Configuration file could not be read or parsed
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    // ===== Execution Errors =====
    /// The tool process could not be started
    #[error("Failed to start '{program}': {reason}")]
    Spawn { program: String, reason: String },

    /// The tool did not finish within the allotted time
    #[error("vata did not finish within {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Generic I/O failure
    #[error("I/O error during {op}: {message}")]
    Io { op: String, message: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<VataError> for ExError {
    fn from(err: VataError) -> Self {
        let message = err.to_string();
        match err {
            VataError::InvalidCode { .. } => ExError::new(ExErrorKind::InvalidCode)
                .with_op("validate_code")
                .with_message(message),

            VataError::UnknownToken { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_token")
                .with_message(message),

            VataError::OptionsMismatch { operation, .. } => {
                ExError::new(ExErrorKind::OptionsMismatch)
                    .with_op("command_new")
                    .with_operation(operation)
                    .with_message(message)
            }

            VataError::OperandCount { operation, .. } => ExError::new(ExErrorKind::OperandCount)
                .with_op("command_new")
                .with_operation(operation)
                .with_message(message),

            VataError::MalformedOptions { .. } => ExError::new(ExErrorKind::MalformedOptions)
                .with_op("parse_options")
                .with_message(message),

            VataError::Config { .. } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),

            VataError::Spawn { .. } => ExError::new(ExErrorKind::Spawn)
                .with_op("execute")
                .with_message(message),

            VataError::Timeout { .. } => ExError::new(ExErrorKind::Timeout)
                .with_op("execute")
                .with_message(message),

            VataError::Io { op, .. } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),

            VataError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            VataError::Internal { .. } => ExError::new(ExErrorKind::Internal).with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to VataError
impl From<serde_json::Error> for VataError {
    fn from(err: serde_json::Error) -> Self {
        VataError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from toml::de::Error to VataError
impl From<toml::de::Error> for VataError {
    fn from(err: toml::de::Error) -> Self {
        VataError::Config {
            reason: err.to_string(),
        }
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    VataError::Io {
        op: operation.to_string(),
        message: err.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidInput,
            ExErrorKind::InvalidCode,
            ExErrorKind::OptionsMismatch,
            ExErrorKind::OperandCount,
            ExErrorKind::MalformedOptions,
            ExErrorKind::Config,
            ExErrorKind::Io,
            ExErrorKind::Spawn,
            ExErrorKind::Timeout,
            ExErrorKind::Serialization,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_validation_kinds() {
        assert!(ExErrorKind::InvalidCode.is_validation());
        assert!(ExErrorKind::OperandCount.is_validation());
        assert!(!ExErrorKind::Timeout.is_validation());
        assert!(!ExErrorKind::Spawn.is_validation());
    }

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::OperandCount)
            .with_op("command_new")
            .with_operation("union")
            .with_message("needs two files");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_OPERAND_COUNT]"));
        assert!(text.contains("command_new"));
        assert!(text.contains("needs two files"));
        assert!(text.contains("union"));
    }
}
