//! The store boundary the submission protocol talks to.

use caseflow_model::{ChunkOutcome, ImportJob, JobProgress, Result, SubmissionRecord};

/// Backing store for import jobs and committed case records.
///
/// Per-row rejections travel inside [`ChunkOutcome`]; `Err` from any method
/// is a job-level failure (unknown job, invalid state, transport) and is
/// fatal to the current operation.
pub trait ImportStore {
    /// Create a job with zeroed counters and status `Pending`.
    fn create_job(&mut self, file_name: &str, total_rows: usize) -> Result<ImportJob>;

    /// Commit one chunk of rows starting at `start_index` in the full
    /// ordered row set. The store validates each row independently and
    /// updates the job ledger additively.
    fn submit_chunk(
        &mut self,
        job_id: &str,
        rows: &[SubmissionRecord],
        start_index: usize,
    ) -> Result<ChunkOutcome>;

    /// Current counters and status for a job.
    fn job_status(&self, job_id: &str) -> Result<JobProgress>;

    /// Pause a `Pending`/`Processing` job, preserving counters for resume.
    fn pause_job(&mut self, job_id: &str) -> Result<()>;

    /// Resume a `Paused` job; returns the number of rows still to submit.
    fn resume_job(&mut self, job_id: &str) -> Result<usize>;

    /// Job summaries, most recent first.
    fn list_jobs(&self, limit: usize) -> Vec<ImportJob>;
}
