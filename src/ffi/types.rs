//! C-compatible type definitions for FFI.

use crate::error::ExtError;
use crate::logging::LogConfig;
use tracing::Level;

/// Result status codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtStatus {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer was passed.
    NullPointer = 1,
    /// Invalid argument.
    InvalidArgument = 2,
    /// Replacement length differs from the buffer's fixed length.
    SizeMismatch = 3,
    /// Buffer has no contents.
    EmptyBuffer = 4,
    /// Invalid UTF-8 string.
    InvalidUtf8 = 5,
    /// Counter update refused; value unchanged.
    Rejected = 6,
    /// Attribute write failed validation.
    InvalidField = 7,
}

impl From<&ExtError> for ExtStatus {
    fn from(err: &ExtError) -> Self {
        match err {
            ExtError::SizeMismatch { .. } => ExtStatus::SizeMismatch,
            ExtError::EmptyBuffer => ExtStatus::EmptyBuffer,
            ExtError::InvalidElementType { .. } => ExtStatus::InvalidArgument,
            ExtError::InvalidField { .. } => ExtStatus::InvalidField,
            ExtError::NullPointer => ExtStatus::NullPointer,
            ExtError::InvalidUtf8 => ExtStatus::InvalidUtf8,
        }
    }
}

/// C-compatible array view (pointer + length).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CArrayView {
    pub data: *const f64,
    pub len: usize,
}

impl CArrayView {
    pub fn empty() -> Self {
        Self {
            data: std::ptr::null(),
            len: 0,
        }
    }
}

/// Logging configuration passed from C.
///
/// `level`: 0 = trace, 1 = debug, 2 = info, 3 = warn, 4 = error.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CLogConfig {
    pub level: u8,
    pub json: bool,
}

impl Default for CLogConfig {
    fn default() -> Self {
        Self {
            level: 2,
            json: false,
        }
    }
}

impl From<CLogConfig> for LogConfig {
    fn from(c: CLogConfig) -> Self {
        let level = match c.level {
            0 => Level::TRACE,
            1 => Level::DEBUG,
            3 => Level::WARN,
            4 => Level::ERROR,
            _ => Level::INFO,
        };
        LogConfig {
            level,
            json_format: c.json,
            ..LogConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_error() {
        let err = ExtError::SizeMismatch {
            expected: 1,
            actual: 2,
        };
        assert_eq!(ExtStatus::from(&err), ExtStatus::SizeMismatch);
        assert_eq!(ExtStatus::from(&ExtError::EmptyBuffer), ExtStatus::EmptyBuffer);
    }

    #[test]
    fn test_log_config_conversion() {
        let config: LogConfig = CLogConfig { level: 1, json: true }.into();
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_format);

        let config: LogConfig = CLogConfig::default().into();
        assert_eq!(config.level, Level::INFO);
    }
}
