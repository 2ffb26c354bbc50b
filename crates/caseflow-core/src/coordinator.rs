//! Chunked, resumable batch submission.
//!
//! One chunk is in flight at a time: chunk *n+1* is only sent after chunk
//! *n*'s result is known, which keeps `last_processed_index` monotonic and
//! makes resumption unambiguous. A pause request takes effect at the next
//! chunk boundary; the in-flight chunk always completes and is counted.

use std::collections::HashSet;

use tracing::{info, warn};

use caseflow_model::{
    ChunkRowError, JobProgress, Result, RowId, StoreError, SubmissionRecord,
};

use crate::session::ImportSession;
use crate::store::ImportStore;

/// Default rows per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Outcome of a submission run (to completion or to a pause/transport stop).
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub job_id: String,
    pub progress: JobProgress,
    /// Per-row store rejections in recording order.
    pub failures: Vec<ChunkRowError>,
}

/// Drives the sequential chunk protocol against a store.
pub struct BatchCoordinator<'a, S: ImportStore> {
    store: &'a mut S,
    chunk_size: usize,
    job_id: Option<String>,
    /// Submission-ready rows captured at batch start, in original order.
    queue: Vec<(RowId, SubmissionRecord)>,
    /// Absolute index of the next row to submit.
    cursor: usize,
    pause_requested: bool,
    failures: Vec<ChunkRowError>,
    /// Rows of a transport-failed chunk, awaiting caller-initiated
    /// resubmission. The cursor still points at that chunk.
    retry_rows: Vec<RowId>,
}

impl<'a, S: ImportStore> BatchCoordinator<'a, S> {
    pub fn new(store: &'a mut S, chunk_size: usize) -> Self {
        Self {
            store,
            chunk_size: chunk_size.max(1),
            job_id: None,
            queue: Vec::new(),
            cursor: 0,
            pause_requested: false,
            failures: Vec::new(),
            retry_rows: Vec::new(),
        }
    }

    /// Create the import job and capture the session's valid rows.
    ///
    /// Fails with `InvalidState` when the session has no submission-ready
    /// rows or validation is stale.
    pub fn begin(&mut self, session: &mut ImportSession) -> Result<String> {
        if !session.validation_current() {
            return Err(StoreError::InvalidState(
                "dataset must be validated before submission".to_string(),
            ));
        }
        let queue = session.submission_ready();
        if queue.is_empty() {
            return Err(StoreError::InvalidState(
                "no valid rows to submit".to_string(),
            ));
        }
        let job = self.store.create_job(session.file_name(), queue.len())?;
        info!(
            job = %job.id,
            total_rows = job.total_rows,
            chunk_size = self.chunk_size,
            "submission started"
        );
        let ids: Vec<RowId> = queue.iter().map(|(id, _)| *id).collect();
        session.mark_submitting(&ids);
        self.queue = queue;
        self.cursor = 0;
        self.failures.clear();
        self.retry_rows.clear();
        self.job_id = Some(job.id.clone());
        Ok(job.id)
    }

    /// Request a pause; honored at the next chunk boundary.
    pub fn request_pause(&mut self) {
        self.pause_requested = true;
    }

    /// Resume a paused job: flips the store status back to processing and
    /// continues from `last_processed_index + 1`.
    pub fn resume(&mut self) -> Result<usize> {
        let job_id = self.require_job()?;
        let remaining = self.store.resume_job(&job_id)?;
        let status = self.store.job_status(&job_id)?;
        self.cursor = status.last_processed_index.map_or(0, |idx| idx + 1);
        self.pause_requested = false;
        info!(job = %job_id, remaining, next_index = self.cursor, "submission resumed");
        Ok(remaining)
    }

    /// Submit chunks sequentially until the queue is exhausted or a pause
    /// request lands at a chunk boundary.
    ///
    /// A transport-level chunk failure marks the whole chunk failed as a
    /// block and surfaces immediately; retry is never automatic — a later
    /// call re-sends the same chunk, reopening its rows first.
    pub fn run(&mut self, session: &mut ImportSession) -> Result<SubmissionReport> {
        self.run_chunks(session, usize::MAX)
    }

    /// As [`Self::run`], but stops after at most `max_chunks` chunk commits.
    /// Lets a caller interleave pause requests with chunk boundaries.
    pub fn run_chunks(
        &mut self,
        session: &mut ImportSession,
        max_chunks: usize,
    ) -> Result<SubmissionReport> {
        let job_id = self.require_job()?;
        let mut sent = 0usize;
        while self.cursor < self.queue.len() && sent < max_chunks {
            if self.pause_requested {
                self.store.pause_job(&job_id)?;
                self.pause_requested = false;
                info!(job = %job_id, next_index = self.cursor, "submission paused");
                break;
            }
            self.submit_one_chunk(&job_id, session)?;
            sent += 1;
        }
        let progress = self.store.job_status(&job_id)?;
        Ok(SubmissionReport {
            job_id,
            progress,
            failures: self.failures.clone(),
        })
    }

    fn submit_one_chunk(&mut self, job_id: &str, session: &mut ImportSession) -> Result<()> {
        let start_index = self.cursor;
        let end = (start_index + self.chunk_size).min(self.queue.len());
        let chunk = &self.queue[start_index..end];
        let records: Vec<SubmissionRecord> =
            chunk.iter().map(|(_, record)| record.clone()).collect();

        // A caller-initiated retry of a transport-failed chunk: the cursor
        // never moved, so the pending rows are exactly this chunk. Reopen
        // them so the retry result settles their statuses.
        if !self.retry_rows.is_empty() {
            let retry = std::mem::take(&mut self.retry_rows);
            session.reopen_failed(&retry);
        }

        let outcome = match self.store.submit_chunk(job_id, &records, start_index) {
            Ok(outcome) => outcome,
            Err(error) => {
                // Total failure to reach the store: the whole chunk settles
                // failed as a block and the error surfaces to the caller.
                // The cursor stays put so a rerun re-sends this chunk.
                warn!(job = job_id, start_index, %error, "chunk transport failure");
                for (row_id, _) in chunk {
                    session.settle(*row_id, false);
                }
                self.retry_rows = chunk.iter().map(|(row_id, _)| *row_id).collect();
                return Err(error);
            }
        };

        let failed_indices: HashSet<usize> =
            outcome.errors.iter().map(|e| e.index).collect();
        for (offset, (row_id, _)) in chunk.iter().enumerate() {
            session.settle(*row_id, !failed_indices.contains(&(start_index + offset)));
        }
        self.failures.extend(outcome.errors.iter().cloned());
        self.cursor = end;
        info!(
            job = job_id,
            start_index,
            rows = records.len(),
            succeeded = outcome.success_count,
            failed = outcome.failed_count,
            "chunk processed"
        );
        Ok(())
    }

    fn require_job(&self) -> Result<String> {
        self.job_id
            .clone()
            .ok_or_else(|| StoreError::InvalidState("submission not started".to_string()))
    }
}
