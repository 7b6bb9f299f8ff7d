//! Stable error codes for the request/response API layer.

/// Every error enum implements this to expose a structured code string
/// that callers can match on without parsing messages.
pub trait ProvenanceErrorCode {
    /// Returns the error code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted API error string: `[ERROR_CODE] message`.
    fn api_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const DUPLICATE_ID: &str = "DUPLICATE_ID";
pub const INVALID_LINK: &str = "INVALID_LINK";
pub const UNKNOWN_NODE: &str = "UNKNOWN_NODE";
pub const ALREADY_COMPLETED: &str = "ALREADY_COMPLETED";
pub const INVALID_COMPLETION: &str = "INVALID_COMPLETION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
