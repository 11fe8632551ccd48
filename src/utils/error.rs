use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Field '{field}' has value '{value}' which is not a valid {expected}")]
    TypeCoercion {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("Indexed group '{group}' has mismatched lengths {lengths:?}")]
    AlignmentMismatch { group: String, lengths: Vec<usize> },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Poll {reg_idx} not found")]
    NotFound { reg_idx: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Template rendering error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Storage,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IntakeError {
    pub fn missing(field: &str) -> Self {
        IntakeError::MissingField {
            field: field.to_string(),
        }
    }

    pub fn coercion(field: &str, value: &str, expected: &'static str) -> Self {
        IntakeError::TypeCoercion {
            field: field.to_string(),
            value: value.to_string(),
            expected,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            IntakeError::MissingField { .. }
            | IntakeError::TypeCoercion { .. }
            | IntakeError::AlignmentMismatch { .. } => ErrorCategory::Validation,
            IntakeError::Config { .. }
            | IntakeError::InvalidConfigValue { .. }
            | IntakeError::Toml(_) => ErrorCategory::Configuration,
            IntakeError::NotFound { .. } | IntakeError::Io(_) | IntakeError::Serialization(_) => {
                ErrorCategory::Storage
            }
            IntakeError::Template(_) => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Rendering => ErrorSeverity::Medium,
            ErrorCategory::Storage => match self {
                IntakeError::NotFound { .. } => ErrorSeverity::Low,
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            IntakeError::MissingField { field } => {
                format!("Fill in '{}' before submitting the form", field)
            }
            IntakeError::TypeCoercion {
                field, expected, ..
            } => match *expected {
                "timestamp" => format!("Enter '{}' as YYYY-MM-DDTHH:MM", field),
                _ => format!("Enter a {} for '{}'", expected, field),
            },
            IntakeError::AlignmentMismatch { group, .. } => format!(
                "Every '{}' row needs all of its columns filled in",
                group
            ),
            IntakeError::Config { .. }
            | IntakeError::InvalidConfigValue { .. }
            | IntakeError::Toml(_) => "Check the configuration file and CLI flags".to_string(),
            IntakeError::NotFound { .. } => "Submit the poll through /input first".to_string(),
            IntakeError::Io(_) => "Check that the store directory exists and is writable".to_string(),
            IntakeError::Serialization(_) => {
                "The stored document may be corrupt; inspect it manually".to_string()
            }
            IntakeError::Template(_) => "Check the template files".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("The submitted form is invalid: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Storage => format!("Could not access stored polls: {}", self),
            ErrorCategory::Rendering => format!("Could not render the page: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_low_severity() {
        let err = IntakeError::missing("whole_orig");
        assert!(err.is_validation());
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.recovery_suggestion().contains("whole_orig"));
    }

    #[test]
    fn test_timestamp_coercion_suggests_format() {
        let err = IntakeError::coercion("publish_date", "yesterday", "timestamp");
        assert!(err.recovery_suggestion().contains("YYYY-MM-DDTHH:MM"));
        assert_eq!(
            err.to_string(),
            "Field 'publish_date' has value 'yesterday' which is not a valid timestamp"
        );
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = IntakeError::Config {
            message: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_validation());
    }
}
