pub mod enums;
pub mod error;
pub mod job;
pub mod mapping;
pub mod record;
pub mod schema;
pub mod status;
pub mod validation;

pub use enums::{Category, EnumParse, Priority};
pub use error::{Result, StoreError};
pub use job::{
    ChunkOutcome, ChunkRowError, ImportJob, JobProgress, JobStatus, SubmissionRecord,
};
pub use mapping::ColumnMapping;
pub use record::{CaseRecord, Row, RowId};
pub use schema::{SchemaField, case_schema, schema_field};
pub use status::RowStatus;
pub use validation::ValidationError;
