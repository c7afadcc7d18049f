//! Error types for catalog construction, run setup and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum WfcError {
    /// A run or catalog parameter is unusable
    ///
    /// Covers empty tilesets, zero or oversized grid dimensions and
    /// anything else rejected before a run starts.
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An edge signature could not be parsed
    InvalidSignature {
        /// Text that was being parsed
        input: String,
        /// Description of what's wrong with it
        reason: String,
    },

    /// A bounded run stopped before every cell was collapsed
    StepLimitReached {
        /// Steps taken before giving up
        steps: usize,
        /// Contradiction restarts seen during those steps
        restarts: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WfcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSignature { input, reason } => {
                write!(f, "Invalid edge signature '{input}': {reason}")
            }
            Self::StepLimitReached { steps, restarts } => {
                write!(
                    f,
                    "Generation incomplete after {steps} steps ({restarts} contradiction restarts)"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WfcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, WfcError>;

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WfcError {
    WfcError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a signature parse error
pub fn invalid_signature(input: &str, reason: &impl ToString) -> WfcError {
    WfcError::InvalidSignature {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
