use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid item: {item}")]
    InvalidItem { item: String },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Value may not contain '|': {field}={value}")]
    DelimiterInValue { field: String, value: String },

    #[error("Value may not contain a line break: {field}")]
    LineBreakInValue { field: String, value: String },

    #[error("Bad part: {part}")]
    MalformedLine { part: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A token or stored line that does not follow the record format.
    Input,
    Storage,
    Configuration,
}

impl RecordError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecordError::InvalidItem { .. }
            | RecordError::UnknownField { .. }
            | RecordError::DelimiterInValue { .. }
            | RecordError::LineBreakInValue { .. }
            | RecordError::MalformedLine { .. } => ErrorCategory::Input,
            RecordError::IoError(_) | RecordError::SerializationError(_) => {
                ErrorCategory::Storage
            }
            RecordError::ConfigError { .. } | RecordError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit code; 2 is reserved for usage errors reported by the argument parser.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Storage => 1,
            ErrorCategory::Configuration => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecordError::InvalidItem { item } => {
                format!("'{}' is not a key=value item", item)
            }
            RecordError::UnknownField { field } => {
                format!("'{}' is not a recognized field", field)
            }
            RecordError::DelimiterInValue { field, .. } => {
                format!("the value for '{}' contains '|'", field)
            }
            RecordError::LineBreakInValue { field, .. } => {
                format!("the value for '{}' spans more than one line", field)
            }
            RecordError::MalformedLine { part } => {
                format!("the store contains a malformed segment '{}'", part)
            }
            RecordError::IoError(e) => format!("could not access the store: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecordError::InvalidItem { .. } => "Pass items in the form key=value",
            RecordError::UnknownField { .. } => {
                "Use one of the configured fields (see [schema].fields)"
            }
            RecordError::DelimiterInValue { .. } => "Remove the '|' character from the value",
            RecordError::LineBreakInValue { .. } => "Put the value on a single line",
            RecordError::MalformedLine { .. } => {
                "Fix or remove the line in the store file, or run `init` to start over"
            }
            RecordError::IoError(_) => "Check that the store path is writable",
            RecordError::SerializationError(_) => "Retry without --json",
            RecordError::ConfigError { .. } | RecordError::InvalidConfigValueError { .. } => {
                "Check the configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let input = RecordError::UnknownField {
            field: "color".to_string(),
        };
        assert_eq!(input.category(), ErrorCategory::Input);
        assert_eq!(input.exit_code(), 1);

        let config = RecordError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 3);

        let io: RecordError = std::io::Error::other("disk").into();
        assert_eq!(io.category(), ErrorCategory::Storage);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = RecordError::InvalidItem {
            item: "oops".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "'oops' is not a key=value item");
    }
}
