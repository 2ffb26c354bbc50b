//! Import session context.
//!
//! One session per uploaded file: it owns the ingested rows, the mapping
//! state, every row's lifecycle status, and the current validation results.
//! Created at upload, destroyed (or `reset`) when the user abandons the
//! import. Nothing here is shared between sessions.

use std::collections::BTreeMap;

use tracing::{debug, info};

use caseflow_ingest::CsvTable;
use caseflow_map::MappingState;
use caseflow_model::{
    CaseRecord, EnumParse, Priority, Row, RowId, RowStatus, SubmissionRecord, ValidationError,
};
use caseflow_validate::{FixHelper, validate_all_rows};

use crate::transform::build_rows;

/// Client-side state for one import.
#[derive(Debug)]
pub struct ImportSession {
    file_name: String,
    table: CsvTable,
    mapping: MappingState,
    rows: Vec<Row>,
    statuses: BTreeMap<RowId, RowStatus>,
    errors: BTreeMap<RowId, Vec<ValidationError>>,
    /// Bumped on every data change; a validation pass is scoped to the
    /// generation it started from.
    generation: u64,
    validated_generation: Option<u64>,
}

impl ImportSession {
    /// Open a session over an ingested table: auto-map the headers and
    /// transform the rows. Every row starts `Pending`.
    pub fn open(file_name: impl Into<String>, table: CsvTable) -> Self {
        let file_name = file_name.into();
        let mapping = MappingState::from_headers(&table.headers);
        let rows = build_rows(&table, mapping.mappings());
        let statuses = rows.iter().map(|r| (r.id, RowStatus::Pending)).collect();
        info!(
            file = %file_name,
            rows = rows.len(),
            columns = table.headers.len(),
            "import session opened"
        );
        Self {
            file_name,
            table,
            mapping,
            rows,
            statuses,
            errors: BTreeMap::new(),
            generation: 0,
            validated_generation: None,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn mapping(&self) -> &MappingState {
        &self.mapping
    }

    pub fn status(&self, row_id: RowId) -> Option<RowStatus> {
        self.statuses.get(&row_id).copied()
    }

    pub fn errors_for(&self, row_id: RowId) -> &[ValidationError] {
        self.errors.get(&row_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Row id → errors for every currently-invalid row.
    pub fn validation_errors(&self) -> &BTreeMap<RowId, Vec<ValidationError>> {
        &self.errors
    }

    /// Labels of required schema fields without a committed mapping.
    /// Non-empty blocks progression to validation.
    pub fn unmapped_required(&self) -> Vec<&'static str> {
        self.mapping.unmapped_required()
    }

    /// Retarget a source column, then re-transform all rows that have not
    /// entered submission.
    pub fn override_mapping(&mut self, source_column: &str, field: Option<&str>) -> bool {
        let changed = match field {
            Some(field) => self.mapping.set_target(source_column, field),
            None => self.mapping.clear_target(source_column),
        };
        if changed {
            self.retransform();
        }
        changed
    }

    fn retransform(&mut self) {
        let fresh = build_rows(&self.table, self.mapping.mappings());
        for (row, fresh_row) in self.rows.iter_mut().zip(fresh) {
            let status = self.statuses.get(&row.id).copied().unwrap_or_default();
            if status.accepts_validation() {
                row.record = fresh_row.record;
            }
        }
        self.generation += 1;
        debug!(generation = self.generation, "rows re-transformed after mapping change");
    }

    /// Edit one cell of one row. Rejected once the row has entered
    /// submission.
    pub fn edit_field(&mut self, row_id: RowId, field: &str, value: String) -> bool {
        let status = self.statuses.get(&row_id).copied().unwrap_or_default();
        if !status.accepts_validation() {
            return false;
        }
        let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) else {
            return false;
        };
        if !row.record.set_field(field, value) {
            return false;
        }
        self.generation += 1;
        true
    }

    /// Apply a fix helper to one field across every row still open to
    /// validation. Returns the ids of the rows actually changed.
    pub fn apply_fix(&mut self, field: &str, fix: FixHelper) -> Vec<RowId> {
        let mut changed = Vec::new();
        for row in &mut self.rows {
            let status = self.statuses.get(&row.id).copied().unwrap_or_default();
            if !status.accepts_validation() {
                continue;
            }
            let Some(current) = row.record.field(field) else {
                continue;
            };
            if let Some(fixed) = fix.apply(current) {
                row.record.set_field(field, fixed);
                changed.push(row.id);
            }
        }
        if !changed.is_empty() {
            self.generation += 1;
            info!(field, fix = fix.label(), rows = changed.len(), "bulk fix applied");
        }
        changed
    }

    /// Run the dataset validator and settle row statuses.
    ///
    /// The pass is atomic over the current generation: every row still open
    /// to validation moves to `Valid` or `Invalid`, with its error list
    /// replaced wholesale. Rows that are mid- or post-submission are never
    /// touched, so revalidation triggered by edits elsewhere cannot revert
    /// them.
    pub fn revalidate(&mut self) -> usize {
        let generation = self.generation;
        let results = validate_all_rows(&self.rows);
        let mut invalid = 0usize;
        for row in &self.rows {
            let status = self.statuses.get(&row.id).copied().unwrap_or_default();
            if !status.accepts_validation() {
                continue;
            }
            match results.get(&row.id) {
                Some(errors) => {
                    self.errors.insert(row.id, errors.clone());
                    self.statuses.insert(row.id, RowStatus::Invalid);
                    invalid += 1;
                }
                None => {
                    self.errors.remove(&row.id);
                    self.statuses.insert(row.id, RowStatus::Valid);
                }
            }
        }
        self.validated_generation = Some(generation);
        info!(invalid, total = self.rows.len(), "dataset validated");
        invalid
    }

    /// True when the latest validation pass covers the current data.
    pub fn validation_current(&self) -> bool {
        self.validated_generation == Some(self.generation)
    }

    /// Valid rows in original order with their absolute submission indices,
    /// shaped for the store.
    pub fn submission_ready(&self) -> Vec<(RowId, SubmissionRecord)> {
        self.rows
            .iter()
            .filter(|row| self.status(row.id) == Some(RowStatus::Valid))
            .map(|row| (row.id, to_submission(&row.record)))
            .collect()
    }

    /// `Valid → Submitting` at batch start.
    pub fn mark_submitting(&mut self, row_ids: &[RowId]) {
        for id in row_ids {
            if self.statuses.get(id) == Some(&RowStatus::Valid) {
                self.statuses.insert(*id, RowStatus::Submitting);
            }
        }
    }

    /// `Failed → Submitting` when a transport-failed chunk is resubmitted.
    /// Only the coordinator calls this, scoped to the rows of the chunk it
    /// is about to re-send; store-rejected rows stay `Failed`.
    pub fn reopen_failed(&mut self, row_ids: &[RowId]) {
        for id in row_ids {
            if self.statuses.get(id) == Some(&RowStatus::Failed) {
                self.statuses.insert(*id, RowStatus::Submitting);
            }
        }
    }

    /// Settle a submitting row from its chunk result.
    pub fn settle(&mut self, row_id: RowId, success: bool) {
        if self.statuses.get(&row_id) == Some(&RowStatus::Submitting) {
            let status = if success { RowStatus::Success } else { RowStatus::Failed };
            self.statuses.insert(row_id, status);
        }
    }

    /// Count of rows per status, for summaries.
    pub fn status_counts(&self) -> BTreeMap<RowStatus, usize> {
        let mut counts = BTreeMap::new();
        for status in self.statuses.values() {
            *counts.entry(*status).or_insert(0) += 1;
        }
        counts
    }

    /// Full session reset: the only path back to `Pending` for settled
    /// rows. Re-transforms from the original table and drops all validation
    /// and submission state.
    pub fn reset(&mut self) {
        self.rows = build_rows(&self.table, self.mapping.mappings());
        self.statuses = self.rows.iter().map(|r| (r.id, RowStatus::Pending)).collect();
        self.errors.clear();
        self.generation += 1;
        self.validated_generation = None;
        info!(file = %self.file_name, "session reset");
    }
}

fn to_submission(record: &CaseRecord) -> SubmissionRecord {
    let optional = |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
    };
    let priority = match record.priority() {
        EnumParse::Ok(priority) => priority,
        // Submission only happens for validated rows; an invalid token here
        // would have blocked validation, so the default is unreachable in
        // practice.
        EnumParse::Invalid(_) => Priority::default(),
    };
    SubmissionRecord {
        identifier: record.case_id.trim().to_string(),
        applicant_name: record.applicant_name.clone(),
        dob: record.dob.trim().to_string(),
        email: optional(&record.email),
        phone: optional(&record.phone),
        category: record
            .category()
            .ok()
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| record.category.trim().to_uppercase()),
        priority,
    }
}
