//! Dataset-wide validation.
//!
//! Applies the per-record rules across every row and layers the in-file
//! duplicate-identifier check on top. Rows with zero errors are omitted from
//! the result entirely: absence of an entry means valid.

use std::collections::{BTreeMap, HashSet};

use caseflow_model::{Row, RowId, ValidationError};
use caseflow_model::schema::fields;

use crate::rules::validate_record;

/// Validate every row; returns row id → errors for invalid rows only.
///
/// The first occurrence of a case identifier is never flagged as a
/// duplicate; every later occurrence of the same identifier gets its own
/// "duplicate within file" error, independent of other field errors on that
/// row.
pub fn validate_all_rows(rows: &[Row]) -> BTreeMap<RowId, Vec<ValidationError>> {
    let mut result = BTreeMap::new();
    let mut seen_identifiers: HashSet<String> = HashSet::new();

    for row in rows {
        let mut errors = validate_record(&row.record);

        let identifier = row.record.case_id.trim();
        if !identifier.is_empty() && !seen_identifiers.insert(identifier.to_string()) {
            errors.push(
                ValidationError::new(
                    fields::CASE_ID,
                    format!("Duplicate case ID '{identifier}' within file"),
                )
                .with_value(identifier),
            );
        }

        if !errors.is_empty() {
            result.insert(row.id, errors);
        }
    }

    result
}
