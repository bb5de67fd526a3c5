//! Stable error codes for consumers outside the engine.

/// Every error enum in the workspace exposes a structured code string so a
/// reporting layer can branch on it without matching on message text.
pub trait RosterErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MALFORMED_ROW: &str = "MALFORMED_ROW";
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
