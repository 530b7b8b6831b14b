use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Operation {operation} failed: {message}")]
    OperationFailed { operation: String, message: String },
}

impl LibraryError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LibraryError::IoError(e) => format!("Could not read input: {}", e),
            LibraryError::SerializationError(e) => format!("Could not render output: {}", e),
            LibraryError::InvalidArgument { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            LibraryError::ConfigValidationError { field, message } => {
                format!("Bad configuration ({}): {}", field, message)
            }
            LibraryError::OperationFailed { operation, message } => {
                format!("{} did not succeed: {}", operation, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LibraryError::IoError(_) => "Check that the config file exists and is readable",
            LibraryError::SerializationError(_) => "Retry with --output text",
            LibraryError::InvalidArgument { .. } => "Fix the argument and run again",
            LibraryError::ConfigValidationError { .. } => {
                "Check the TOML syntax and the [job] values in the config file"
            }
            LibraryError::OperationFailed { .. } => "Rebuild the library and run again",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            LibraryError::InvalidArgument { .. } | LibraryError::ConfigValidationError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let invalid = LibraryError::InvalidArgument {
            field: "iterations".to_string(),
            value: "-1".to_string(),
            reason: "must be at least 0".to_string(),
        };
        assert_eq!(invalid.exit_code(), 2);

        let failed = LibraryError::OperationFailed {
            operation: "BoolReturn".to_string(),
            message: "returned false".to_string(),
        };
        assert_eq!(failed.exit_code(), 1);
        assert_eq!(
            failed.user_friendly_message(),
            "BoolReturn did not succeed: returned false"
        );
    }

    #[test]
    fn test_display_includes_field() {
        let err = LibraryError::ConfigValidationError {
            field: "job.name".to_string(),
            message: "empty".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error in job.name: empty");
    }
}
