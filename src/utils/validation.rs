use crate::utils::error::{RecordError, Result};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(RecordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(RecordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Field names end up on both sides of `=` and between `|` in stored lines.
pub fn validate_field_names(field_name: &str, fields: &[String]) -> Result<()> {
    if fields.is_empty() {
        return Err(RecordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one field is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for field in fields {
        validate_non_empty_string(field_name, field)?;

        if field.contains(['=', '|']) || field.chars().any(char::is_whitespace) {
            return Err(RecordError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: field.clone(),
                reason: "Field names may not contain '=', '|' or whitespace".to_string(),
            });
        }

        if !seen.insert(field.as_str()) {
            return Err(RecordError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: field.clone(),
                reason: "Duplicate field name".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[String]) -> Result<()> {
    if !allowed.iter().any(|a| a == value) {
        return Err(RecordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Must be one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
