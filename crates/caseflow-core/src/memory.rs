//! In-memory [`ImportStore`] implementation.
//!
//! Backs the CLI and the test suite. Performs the store-side per-row
//! validation the protocol requires: required fields, parseable date, known
//! category, and identifier uniqueness against everything already committed
//! (not just the current file). That uniqueness check is also the backstop
//! against double submission after a miscalculated resume point.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use caseflow_model::{
    Category, ChunkOutcome, ChunkRowError, ImportJob, JobProgress, JobStatus, Result, StoreError,
    SubmissionRecord,
};
use caseflow_validate::parse_date;

use crate::store::ImportStore;

/// In-memory store keyed by job id and case identifier.
#[derive(Debug, Default)]
pub struct MemoryStore {
    jobs: BTreeMap<String, ImportJob>,
    committed: BTreeMap<String, SubmissionRecord>,
    next_job: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed case records.
    pub fn committed_count(&self) -> usize {
        self.committed.len()
    }

    /// A committed record by case identifier.
    pub fn committed(&self, identifier: &str) -> Option<&SubmissionRecord> {
        self.committed.get(identifier)
    }

    fn job_mut(&mut self, job_id: &str) -> Result<&mut ImportJob> {
        self.jobs
            .get_mut(job_id)
            .ok_or_else(|| StoreError::NotFound(job_id.to_string()))
    }

    fn validate_row(&self, row: &SubmissionRecord) -> Option<String> {
        if row.identifier.trim().is_empty() {
            return Some("missing case identifier".to_string());
        }
        if row.applicant_name.trim().is_empty() {
            return Some("missing applicant name".to_string());
        }
        if parse_date(row.dob.trim()).is_none() {
            return Some(format!("unparseable date of birth '{}'", row.dob));
        }
        if !Category::parse(&row.category).is_ok() {
            return Some(format!("unknown category '{}'", row.category));
        }
        None
    }
}

impl ImportStore for MemoryStore {
    fn create_job(&mut self, file_name: &str, total_rows: usize) -> Result<ImportJob> {
        self.next_job += 1;
        let id = format!("job-{}", self.next_job);
        let job = ImportJob::new(id.clone(), file_name, total_rows);
        self.jobs.insert(id, job.clone());
        Ok(job)
    }

    fn submit_chunk(
        &mut self,
        job_id: &str,
        rows: &[SubmissionRecord],
        start_index: usize,
    ) -> Result<ChunkOutcome> {
        {
            let job = self
                .jobs
                .get(job_id)
                .ok_or_else(|| StoreError::NotFound(job_id.to_string()))?;
            if job.status.is_terminal() {
                return Err(StoreError::InvalidState(format!(
                    "job {job_id} is already {}",
                    job.status.label()
                )));
            }
        }

        let mut outcome = ChunkOutcome::default();
        let mut accepted: Vec<SubmissionRecord> = Vec::new();
        // Identifiers accepted earlier in this same chunk; uniqueness must
        // hold against them too, not just against committed records.
        let mut chunk_identifiers: BTreeSet<String> = BTreeSet::new();
        for (offset, row) in rows.iter().enumerate() {
            let index = start_index + offset;
            let identifier = row.identifier.trim();
            let failure = self.validate_row(row).map(|message| (message, false)).or_else(|| {
                (self.committed.contains_key(identifier)
                    || chunk_identifiers.contains(identifier))
                .then(|| (format!("case identifier '{identifier}' already exists"), true))
            });
            match failure {
                Some((message, duplicate)) => {
                    outcome.failed_count += 1;
                    outcome.errors.push(ChunkRowError {
                        index,
                        identifier: row.identifier.clone(),
                        message,
                        duplicate,
                    });
                }
                None => {
                    chunk_identifiers.insert(identifier.to_string());
                    outcome.success_count += 1;
                    accepted.push(row.clone());
                }
            }
        }

        let chunk_len = rows.len();
        let job = self.job_mut(job_id)?;
        job.status = JobStatus::Processing;
        job.processed_rows += chunk_len;
        job.success_count += outcome.success_count;
        job.failed_count += outcome.failed_count;
        if chunk_len > 0 {
            job.last_processed_index = Some(start_index + chunk_len - 1);
        }
        job.errors.extend(outcome.errors.iter().cloned());
        if job.processed_rows >= job.total_rows {
            job.status = JobStatus::Completed;
        }
        debug!(
            job = job_id,
            start_index,
            accepted = outcome.success_count,
            rejected = outcome.failed_count,
            "chunk committed"
        );

        for row in accepted {
            self.committed.insert(row.identifier.trim().to_string(), row);
        }

        Ok(outcome)
    }

    fn job_status(&self, job_id: &str) -> Result<JobProgress> {
        self.jobs
            .get(job_id)
            .map(JobProgress::from)
            .ok_or_else(|| StoreError::NotFound(job_id.to_string()))
    }

    fn pause_job(&mut self, job_id: &str) -> Result<()> {
        let job = self.job_mut(job_id)?;
        match job.status {
            JobStatus::Pending | JobStatus::Processing => {
                job.status = JobStatus::Paused;
                Ok(())
            }
            other => Err(StoreError::InvalidState(format!(
                "cannot pause a {} job",
                other.label()
            ))),
        }
    }

    fn resume_job(&mut self, job_id: &str) -> Result<usize> {
        let job = self.job_mut(job_id)?;
        match job.status {
            JobStatus::Paused => {
                job.status = JobStatus::Processing;
                Ok(job.remaining_rows())
            }
            other => Err(StoreError::InvalidState(format!(
                "cannot resume a {} job",
                other.label()
            ))),
        }
    }

    fn list_jobs(&self, limit: usize) -> Vec<ImportJob> {
        let mut jobs: Vec<ImportJob> = self.jobs.values().cloned().collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        jobs.truncate(limit);
        jobs
    }
}
