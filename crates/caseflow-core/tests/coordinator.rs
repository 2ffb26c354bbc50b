use caseflow_core::{
    BatchCoordinator, ImportSession, ImportStore, MemoryStore,
};
use caseflow_ingest::CsvTable;
use caseflow_model::{
    ChunkOutcome, ImportJob, JobProgress, JobStatus, Result, RowStatus, StoreError,
    SubmissionRecord,
};

fn table(rows: usize) -> CsvTable {
    CsvTable {
        headers: vec![
            "case_id".to_string(),
            "applicant_name".to_string(),
            "dob".to_string(),
            "category".to_string(),
        ],
        rows: (0..rows)
            .map(|i| {
                vec![
                    format!("C-{i:04}"),
                    "Jane Roe".to_string(),
                    "1985-06-15".to_string(),
                    "TAX".to_string(),
                ]
            })
            .collect(),
    }
}

fn validated_session(rows: usize) -> ImportSession {
    let mut session = ImportSession::open("cases.csv", table(rows));
    assert_eq!(session.revalidate(), 0);
    session
}

/// Store wrapper that records chunk offsets and can fail one chunk call.
struct InstrumentedStore {
    inner: MemoryStore,
    chunk_starts: Vec<usize>,
    fail_on_start: Option<usize>,
}

impl InstrumentedStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            chunk_starts: Vec::new(),
            fail_on_start: None,
        }
    }
}

impl ImportStore for InstrumentedStore {
    fn create_job(&mut self, file_name: &str, total_rows: usize) -> Result<ImportJob> {
        self.inner.create_job(file_name, total_rows)
    }

    fn submit_chunk(
        &mut self,
        job_id: &str,
        rows: &[SubmissionRecord],
        start_index: usize,
    ) -> Result<ChunkOutcome> {
        if self.fail_on_start == Some(start_index) {
            self.fail_on_start = None;
            return Err(StoreError::Transport("connection dropped".to_string()));
        }
        self.chunk_starts.push(start_index);
        self.inner.submit_chunk(job_id, rows, start_index)
    }

    fn job_status(&self, job_id: &str) -> Result<JobProgress> {
        self.inner.job_status(job_id)
    }

    fn pause_job(&mut self, job_id: &str) -> Result<()> {
        self.inner.pause_job(job_id)
    }

    fn resume_job(&mut self, job_id: &str) -> Result<usize> {
        self.inner.resume_job(job_id)
    }

    fn list_jobs(&self, limit: usize) -> Vec<ImportJob> {
        self.inner.list_jobs(limit)
    }
}

#[test]
fn two_hundred_fifty_rows_make_three_chunks() {
    let mut session = validated_session(250);
    let mut store = InstrumentedStore::new();
    let mut coordinator = BatchCoordinator::new(&mut store, 100);

    coordinator.begin(&mut session).expect("begin");
    let report = coordinator.run(&mut session).expect("run");

    assert_eq!(store.chunk_starts, vec![0, 100, 200]);
    assert_eq!(report.progress.processed_rows, 250);
    assert_eq!(report.progress.success_count, 250);
    assert_eq!(report.progress.status, JobStatus::Completed);
    assert!(report.failures.is_empty());
    assert_eq!(session.status(1), Some(RowStatus::Success));
    assert_eq!(session.status(250), Some(RowStatus::Success));
}

#[test]
fn pause_takes_effect_at_the_chunk_boundary() {
    let mut session = validated_session(250);
    let mut store = InstrumentedStore::new();
    let mut coordinator = BatchCoordinator::new(&mut store, 100);

    coordinator.begin(&mut session).expect("begin");
    // Request before the first chunk result lands: the in-flight chunk
    // still completes and is counted.
    coordinator.request_pause();
    let report = coordinator.run(&mut session).expect("run to pause");

    // pause was requested before any chunk, so nothing was sent yet
    assert_eq!(report.progress.processed_rows, 0);
    assert_eq!(report.progress.status, JobStatus::Paused);
}

#[test]
fn resume_continues_from_last_processed_index() {
    let mut session = validated_session(250);
    let mut store = InstrumentedStore::new();
    let mut coordinator = BatchCoordinator::new(&mut store, 100);

    coordinator.begin(&mut session).expect("begin");

    // Let one chunk through, then pause at the next boundary.
    let report = coordinator.run_chunks(&mut session, 1).expect("one chunk");
    assert_eq!(report.progress.processed_rows, 100);
    assert_eq!(report.progress.last_processed_index, Some(99));

    coordinator.request_pause();
    let paused = coordinator.run(&mut session).expect("pause");
    assert_eq!(paused.progress.status, JobStatus::Paused);
    assert_eq!(paused.progress.last_processed_index, Some(99));

    let remaining = coordinator.resume().expect("resume");
    assert_eq!(remaining, 150);

    let done = coordinator.run(&mut session).expect("finish");
    assert_eq!(done.progress.status, JobStatus::Completed);
    assert_eq!(done.progress.processed_rows, 250);
    assert_eq!(store.chunk_starts, vec![0, 100, 200]);
}

#[test]
fn transport_failure_fails_the_chunk_as_a_block() {
    let mut session = validated_session(250);
    let mut store = InstrumentedStore::new();
    store.fail_on_start = Some(100);
    let mut coordinator = BatchCoordinator::new(&mut store, 100);

    coordinator.begin(&mut session).expect("begin");
    let error = coordinator.run(&mut session).expect_err("transport failure");
    assert!(matches!(error, StoreError::Transport(_)));

    // First chunk succeeded, second failed as a block, third never sent.
    assert_eq!(session.status(1), Some(RowStatus::Success));
    assert_eq!(session.status(101), Some(RowStatus::Failed));
    assert_eq!(session.status(201), Some(RowStatus::Submitting));

    // Caller-initiated resubmission re-sends the failed chunk: its rows
    // reopen to submitting and the retry result settles them.
    let resumed = coordinator.run(&mut session).expect("resubmit");
    assert_eq!(resumed.progress.processed_rows, 250);
    assert_eq!(session.status(101), Some(RowStatus::Success));
    assert_eq!(session.status(250), Some(RowStatus::Success));
    assert!(resumed.failures.is_empty());
    assert_eq!(store.chunk_starts, vec![0, 100, 200]);
}

#[test]
fn store_duplicates_are_reported_per_row_without_aborting() {
    let mut store = MemoryStore::new();

    // Seed the store with an earlier import holding C-0001.
    let mut first = validated_session(2);
    {
        let mut coordinator = BatchCoordinator::new(&mut store, 100);
        coordinator.begin(&mut first).expect("begin");
        coordinator.run(&mut first).expect("run");
    }

    // A second file re-submits C-0001 alongside a fresh row.
    let mut second = ImportSession::open(
        "second.csv",
        CsvTable {
            headers: vec![
                "case_id".to_string(),
                "applicant_name".to_string(),
                "dob".to_string(),
                "category".to_string(),
            ],
            rows: vec![
                vec![
                    "C-0001".to_string(),
                    "Jane Roe".to_string(),
                    "1985-06-15".to_string(),
                    "TAX".to_string(),
                ],
                vec![
                    "C-9999".to_string(),
                    "John Doe".to_string(),
                    "1990-01-01".to_string(),
                    "PERMIT".to_string(),
                ],
            ],
        },
    );
    second.revalidate();

    let mut coordinator = BatchCoordinator::new(&mut store, 100);
    coordinator.begin(&mut second).expect("begin");
    let report = coordinator.run(&mut second).expect("run");

    assert_eq!(report.progress.success_count, 1);
    assert_eq!(report.progress.failed_count, 1);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].duplicate);
    assert_eq!(report.failures[0].identifier, "C-0001");
    assert_eq!(second.status(1), Some(RowStatus::Failed));
    assert_eq!(second.status(2), Some(RowStatus::Success));
    assert_eq!(report.progress.status, JobStatus::Completed);
}

#[test]
fn begin_requires_current_validation_and_valid_rows() {
    let mut store = MemoryStore::new();
    let mut coordinator = BatchCoordinator::new(&mut store, 100);

    let mut unvalidated = ImportSession::open("cases.csv", table(3));
    assert!(matches!(
        coordinator.begin(&mut unvalidated),
        Err(StoreError::InvalidState(_))
    ));

    let mut empty = ImportSession::open("cases.csv", table(0));
    empty.revalidate();
    assert!(matches!(
        coordinator.begin(&mut empty),
        Err(StoreError::InvalidState(_))
    ));
}
