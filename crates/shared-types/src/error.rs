use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of portal errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
    ConfigError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::ConfigError => write!(f, "ConfigError"),
        }
    }
}

/// Structured error returned by case loading, parsing and configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ConfigError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Message suitable for display in the UI.
    ///
    /// Validation errors with field details list the offending fields so the
    /// operator can find the broken record.
    pub fn friendly_message(&self) -> String {
        if self.field_errors.is_empty() {
            return self.message.clone();
        }
        let mut fields: Vec<&str> = self.field_errors.keys().map(String::as_str).collect();
        fields.sort_unstable();
        format!("{} ({})", self.message, fields.join(", "))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::bad_request(format!("Malformed case data: {err}"))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(format!("Invalid configuration: {}", err.message()))
    }
}
