//! Field-level validation error type.

use serde::{Deserialize, Serialize};

/// One validation finding on one field of one row.
///
/// The owning row's error list is replaced wholesale whenever its data
/// changes; errors are never merged across validation passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Schema field key the finding is attached to.
    pub field: String,
    /// Human-readable message.
    pub message: String,
    /// The value that triggered the finding, when one exists.
    pub value: Option<String>,
    /// Deterministic candidate fix. Advisory only, never auto-applied.
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
