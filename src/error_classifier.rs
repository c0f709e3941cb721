use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Picks the log level for a failed fetch. Every failure is handled the same
/// way otherwise: logged and swallowed.
#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: the backend refuses us
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // Network issues and malformed payloads
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
