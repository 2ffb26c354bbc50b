//! Auto-mapping engine: best-effort one-to-one assignment of source columns
//! to schema fields.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use caseflow_model::{ColumnMapping, SchemaField, case_schema};

use crate::similarity::similarity;

/// Minimum similarity for a field to be a valid assignment candidate.
///
/// Compile-time constant: lowering it at runtime would start matching
/// unrelated field names.
pub const MIN_CONFIDENCE: f32 = 0.6;

/// Best similarity of a header against a field's key, label, and aliases.
fn field_score(header: &str, field: &SchemaField) -> f32 {
    let mut best = similarity(header, field.name).max(similarity(header, field.label));
    for alias in field.aliases {
        best = best.max(similarity(header, alias));
    }
    best
}

/// Map every header to at most one schema field.
///
/// Returns one entry per header in input order. Each header's best candidate
/// field is scored against the full schema; proposals at or above
/// [`MIN_CONFIDENCE`] are then committed greedily by descending confidence,
/// so when two headers compete for the same field the higher-confidence one
/// wins and the loser ends up unmapped with confidence 0.
pub fn auto_map(headers: &[String]) -> Vec<ColumnMapping> {
    // One proposal per header: its single best field at or above the
    // threshold. A header whose best field is claimed by a stronger header
    // must end unmapped, never fall back to its second-best field.
    let mut proposals: Vec<(usize, &'static SchemaField, f32)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        let mut best: Option<(&'static SchemaField, f32)> = None;
        for field in case_schema() {
            let score = field_score(header, field);
            if score >= MIN_CONFIDENCE && best.is_none_or(|(_, prior)| score > prior) {
                best = Some((field, score));
            }
        }
        if let Some((field, score)) = best {
            proposals.push((idx, field, score));
        }
    }

    proposals.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    let mut claimed_fields: BTreeSet<&'static str> = BTreeSet::new();
    let mut mappings: Vec<ColumnMapping> = headers
        .iter()
        .map(|h| ColumnMapping::unmapped(h.clone()))
        .collect();

    for (idx, field, score) in proposals {
        if !claimed_fields.insert(field.name) {
            continue;
        }
        mappings[idx].field = Some(field.name.to_string());
        mappings[idx].confidence = score;
        mappings[idx].auto_assigned = true;
    }

    mappings
}

/// Labels of required schema fields no mapping claims.
///
/// A non-empty result blocks progression from mapping to validation.
pub fn unmapped_required_fields(mappings: &[ColumnMapping]) -> Vec<&'static str> {
    case_schema()
        .iter()
        .filter(|field| field.required)
        .filter(|field| {
            !mappings
                .iter()
                .any(|m| m.field.as_deref() == Some(field.name))
        })
        .map(|field| field.label)
        .collect()
}
