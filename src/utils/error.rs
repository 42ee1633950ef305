use thiserror::Error;

/// Message shown to the user whenever the form rejects its input.
pub const INVALID_INPUT_NOTICE: &str = "Please enter valid contract amount and term";

#[derive(Error, Debug)]
pub enum SspError {
    #[error("Invalid input for '{field}' (value: '{value}'): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl SspError {
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        SspError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SspError::InvalidInput { .. } => ErrorCategory::Input,
            SspError::ConfigError { .. } | SspError::TomlError { .. } => {
                ErrorCategory::Configuration
            }
            SspError::IoError(_) | SspError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SspError::InvalidInput { .. } => ErrorSeverity::High,
            SspError::ConfigError { .. } | SspError::TomlError { .. } => ErrorSeverity::Critical,
            SspError::IoError(_) | SspError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Exit code the `ssp-calc` binary uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SspError::InvalidInput { .. } => INVALID_INPUT_NOTICE.to_string(),
            SspError::ConfigError { message } => format!("Configuration problem: {}", message),
            SspError::TomlError { message } => format!("Could not read config file: {}", message),
            SspError::IoError(e) => format!("Input/output failure: {}", e),
            SspError::SerializationError(e) => format!("Could not render result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SspError::InvalidInput { field, .. } => match field.as_str() {
                "contract_term" => "Use a whole number of months, 1 or more".to_string(),
                "contract_amount" => {
                    "Use a positive amount such as 100000 or 100,000.00".to_string()
                }
                _ => "Check the entered values".to_string(),
            },
            SspError::ConfigError { .. } | SspError::TomlError { .. } => {
                "Check the config file against the documented [form], [output] and [logging] sections"
                    .to_string()
            }
            SspError::IoError(_) => "Check that stdin/stdout are available".to_string(),
            SspError::SerializationError(_) => "Retry with --format text".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_notice() {
        let err = SspError::invalid_input("contract_amount", "-5", "must be positive");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.user_friendly_message(), INVALID_INPUT_NOTICE);
        assert!(err.to_string().contains("contract_amount"));
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = SspError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.severity() > ErrorSeverity::High);
        assert_eq!(err.exit_code(), 3);
    }
}
