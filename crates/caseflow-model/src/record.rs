//! Case record and row types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{Category, EnumParse, Priority};
use crate::schema::fields;

/// Stable per-session row identifier, assigned at ingestion and never reused.
pub type RowId = u64;

/// A schema-shaped case record.
///
/// Recognized fields are typed where the closed sets allow it; `category`
/// and `priority` keep the raw token alongside so validation can report the
/// offending text and offer a normalization suggestion. Unrecognized source
/// columns land in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_id: String,
    pub applicant_name: String,
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub priority: String,
    /// Source columns that mapped to no schema field.
    pub extra: BTreeMap<String, String>,
}

impl CaseRecord {
    /// Value of a schema field by key. Unknown keys return `None`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            fields::CASE_ID => Some(&self.case_id),
            fields::APPLICANT_NAME => Some(&self.applicant_name),
            fields::DOB => Some(&self.dob),
            fields::EMAIL => Some(&self.email),
            fields::PHONE => Some(&self.phone),
            fields::CATEGORY => Some(&self.category),
            fields::PRIORITY => Some(&self.priority),
            _ => None,
        }
    }

    /// Overwrite a schema field by key. Returns false for unknown keys.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            fields::CASE_ID => self.case_id = value,
            fields::APPLICANT_NAME => self.applicant_name = value,
            fields::DOB => self.dob = value,
            fields::EMAIL => self.email = value,
            fields::PHONE => self.phone = value,
            fields::CATEGORY => self.category = value,
            fields::PRIORITY => self.priority = value,
            _ => return false,
        }
        true
    }

    /// Parsed category token.
    pub fn category(&self) -> EnumParse<Category> {
        Category::parse(&self.category)
    }

    /// Effective priority: absent defaults to `Low`, unknown tokens are
    /// surfaced as invalid rather than coerced.
    pub fn priority(&self) -> EnumParse<Priority> {
        if self.priority.trim().is_empty() {
            EnumParse::Ok(Priority::default())
        } else {
            Priority::parse(&self.priority)
        }
    }
}

/// One ingested row: the stable id, the transformed record, and the raw
/// source cells it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub record: CaseRecord,
    /// Raw cells in source column order, kept for re-transform after a
    /// mapping override.
    pub source_cells: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EnumParse;

    #[test]
    fn field_roundtrip() {
        let mut record = CaseRecord::default();
        assert!(record.set_field("case_id", "C-1".to_string()));
        assert_eq!(record.field("case_id"), Some("C-1"));
        assert!(!record.set_field("nonexistent", String::new()));
        assert_eq!(record.field("nonexistent"), None);
    }

    #[test]
    fn empty_priority_defaults() {
        let record = CaseRecord::default();
        assert_eq!(record.priority(), EnumParse::Ok(Priority::Low));
    }
}
