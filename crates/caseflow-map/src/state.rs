//! Interactive mapping state: auto-map results plus user overrides.

use caseflow_model::{ColumnMapping, schema_field};

use crate::engine::{auto_map, unmapped_required_fields};

/// Mapping state for one ingested file.
///
/// Holds one [`ColumnMapping`] per source column, in source order, and keeps
/// the one-mapping-per-field invariant through user overrides.
#[derive(Debug, Clone)]
pub struct MappingState {
    mappings: Vec<ColumnMapping>,
}

impl MappingState {
    /// Run the auto-mapper over normalized headers.
    pub fn from_headers(headers: &[String]) -> Self {
        Self {
            mappings: auto_map(headers),
        }
    }

    pub fn mappings(&self) -> &[ColumnMapping] {
        &self.mappings
    }

    /// Source column currently mapped to a schema field, if any.
    pub fn column_for_field(&self, field: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.field.as_deref() == Some(field))
            .map(|m| m.source_column.as_str())
    }

    /// Retarget a column to a schema field.
    ///
    /// Schema fields stay globally unique: any other column mapped to the
    /// same field is cleared first. A manual assignment carries full
    /// confidence and drops the auto-assigned tag. Returns false for an
    /// unknown column or field key.
    pub fn set_target(&mut self, source_column: &str, field: &str) -> bool {
        if schema_field(field).is_none() {
            return false;
        }
        if !self.mappings.iter().any(|m| m.source_column == source_column) {
            return false;
        }
        for mapping in &mut self.mappings {
            if mapping.source_column != source_column
                && mapping.field.as_deref() == Some(field)
            {
                mapping.field = None;
                mapping.confidence = 0.0;
                mapping.auto_assigned = false;
            }
        }
        for mapping in &mut self.mappings {
            if mapping.source_column == source_column {
                mapping.field = Some(field.to_string());
                mapping.confidence = 1.0;
                mapping.auto_assigned = false;
            }
        }
        true
    }

    /// Clear a column's target; confidence resets to 0.
    pub fn clear_target(&mut self, source_column: &str) -> bool {
        let Some(mapping) = self
            .mappings
            .iter_mut()
            .find(|m| m.source_column == source_column)
        else {
            return false;
        };
        mapping.field = None;
        mapping.confidence = 0.0;
        mapping.auto_assigned = false;
        true
    }

    /// Labels of required fields still missing a mapping.
    pub fn unmapped_required(&self) -> Vec<&'static str> {
        unmapped_required_fields(&self.mappings)
    }

    /// True when every required field has a committed mapping.
    pub fn is_complete(&self) -> bool {
        self.unmapped_required().is_empty()
    }
}
