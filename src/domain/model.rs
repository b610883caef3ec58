use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_FIELDS: [&str; 2] = ["name", "hex"];

/// Recognized field names, in the order they are written, plus the optional field summed by `summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub fields: Vec<String>,
    pub numeric_field: Option<String>,
}

impl Schema {
    pub fn new(fields: Vec<String>, numeric_field: Option<String>) -> Self {
        Self {
            fields,
            numeric_field,
        }
    }

    pub fn is_known(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(), None)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub values: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Missing fields read as the empty string.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}
