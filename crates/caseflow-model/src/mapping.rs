//! Column-to-schema mapping types.

use serde::{Deserialize, Serialize};

/// Assignment of one source column to at most one schema field.
///
/// Within one mapping run, no two entries may claim the same field; the
/// mapper and the override helpers maintain that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Normalized source header.
    pub source_column: String,
    /// Schema field key, or `None` for an unmapped column.
    pub field: Option<String>,
    /// Similarity confidence in [0, 1]; 0 when unmapped.
    pub confidence: f32,
    /// True only when the field was assigned by the auto-mapper.
    pub auto_assigned: bool,
}

impl ColumnMapping {
    /// An unmapped entry for a source column.
    pub fn unmapped(source_column: impl Into<String>) -> Self {
        Self {
            source_column: source_column.into(),
            field: None,
            confidence: 0.0,
            auto_assigned: false,
        }
    }
}
