//! Import-job ledger types.
//!
//! The job is owned and serialized by the store; the submission coordinator
//! holds only a cached view keyed by job id. Counters are updated additively
//! after every chunk so a session can pause and resume without reprocessing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// Status of an import job. `Completed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    Processing,
    Paused,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Paused => "paused",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }
}

/// Durable counters and status for one import session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportJob {
    pub id: String,
    pub file_name: String,
    pub total_rows: usize,
    pub processed_rows: usize,
    pub success_count: usize,
    pub failed_count: usize,
    /// Absolute index of the last row whose chunk has been committed.
    /// `None` until the first chunk result lands.
    pub last_processed_index: Option<usize>,
    pub status: JobStatus,
    /// Per-row failures accumulated across chunks, in recording order.
    pub errors: Vec<ChunkRowError>,
    pub created_at: DateTime<Utc>,
}

impl ImportJob {
    pub fn new(id: impl Into<String>, file_name: impl Into<String>, total_rows: usize) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            total_rows,
            processed_rows: 0,
            success_count: 0,
            failed_count: 0,
            last_processed_index: None,
            status: JobStatus::Pending,
            errors: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rows not yet covered by a committed chunk.
    pub fn remaining_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.processed_rows)
    }

    pub fn progress_percent(&self) -> f32 {
        if self.total_rows == 0 {
            100.0
        } else {
            self.processed_rows as f32 / self.total_rows as f32 * 100.0
        }
    }
}

/// Read-only progress view returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobProgress {
    pub total_rows: usize,
    pub processed_rows: usize,
    pub success_count: usize,
    pub failed_count: usize,
    pub last_processed_index: Option<usize>,
    pub status: JobStatus,
    pub progress_percent: f32,
}

impl From<&ImportJob> for JobProgress {
    fn from(job: &ImportJob) -> Self {
        Self {
            total_rows: job.total_rows,
            processed_rows: job.processed_rows,
            success_count: job.success_count,
            failed_count: job.failed_count,
            last_processed_index: job.last_processed_index,
            status: job.status,
            progress_percent: job.progress_percent(),
        }
    }
}

/// Schema-shaped row payload as submitted to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub identifier: String,
    pub applicant_name: String,
    pub dob: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: String,
    pub priority: Priority,
}

/// One per-row failure recorded during a chunk commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRowError {
    /// Absolute index in the full ordered row set.
    pub index: usize,
    pub identifier: String,
    pub message: String,
    /// Set when the failure is a uniqueness violation against records the
    /// store already holds, distinct from the in-file duplicate check.
    pub duplicate: bool,
}

/// Structured result of one chunk commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkOutcome {
    pub success_count: usize,
    pub failed_count: usize,
    pub errors: Vec<ChunkRowError>,
}
