use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid instruction at line {line}: '{content}' ({reason})")]
    InstructionError {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Processing,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DialError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DialError::IoError(_) | DialError::InstructionError { .. } => ErrorCategory::Input,
            DialError::ConfigError { .. }
            | DialError::InvalidConfigValueError { .. }
            | DialError::MissingConfigError { .. } => ErrorCategory::Config,
            DialError::ProcessingError { .. } => ErrorCategory::Processing,
            DialError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DialError::IoError(_) => ErrorSeverity::Critical,
            DialError::InstructionError { .. } | DialError::ProcessingError { .. } => {
                ErrorSeverity::High
            }
            DialError::ConfigError { .. }
            | DialError::InvalidConfigValueError { .. }
            | DialError::MissingConfigError { .. }
            | DialError::ValidationError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DialError::IoError(e) => {
                format!("Could not read the instruction file: {}", e)
            }
            DialError::InstructionError { line, content, .. } => {
                format!("Line {} is not a valid instruction: '{}'", line, content)
            }
            DialError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            DialError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration field '{}' has invalid value '{}'", field, value)
            }
            DialError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required but missing", field)
            }
            DialError::ProcessingError { message } => {
                format!("Processing failed: {}", message)
            }
            DialError::ValidationError { message } => {
                format!("Validation failed: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DialError::IoError(_) => {
                "Check that the input file exists in the working directory and is readable"
                    .to_string()
            }
            DialError::InstructionError { .. } => {
                "Each line must start with 'L' or 'R' followed by a decimal step count, e.g. 'L48'"
                    .to_string()
            }
            DialError::ConfigError { .. }
            | DialError::InvalidConfigValueError { .. }
            | DialError::MissingConfigError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
            DialError::ProcessingError { .. } => {
                "Verify the input file is plain UTF-8 text with one instruction per line"
                    .to_string()
            }
            DialError::ValidationError { .. } => {
                "Adjust the invalid field and run again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_critical_input_error() {
        let err = DialError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "input.txt",
        ));
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_instruction_error_reports_line() {
        let err = DialError::InstructionError {
            line: 3,
            content: "Labc".to_string(),
            reason: "missing magnitude digits".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("Line 3"));
        assert!(err.to_string().contains("Labc"));
    }

    #[test]
    fn test_config_errors_are_medium() {
        let err = DialError::InvalidConfigValueError {
            field: "source.type".to_string(),
            value: "api".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
