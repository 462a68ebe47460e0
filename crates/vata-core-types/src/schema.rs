//! Canonical schema constants for structured logging and events
//!
//! `tracing` macros need field names as literal identifiers, so emit sites
//! spell these names out. Consumers of captured or JSON logs look fields up
//! through the constants.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Tool invocation
pub const FIELD_OPERATION: &str = "operation";
pub const FIELD_PROGRAM: &str = "program";
pub const FIELD_ARGC: &str = "argc";
pub const FIELD_EXIT_STATUS: &str = "exit_status";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
