//! Downloadable error-report artifact.
//!
//! A delimited text file with columns `Row Index, Identifier, Error`, one
//! row per recorded failure, in the order the failures were recorded.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use caseflow_model::ChunkRowError;

/// Write the error report for a set of recorded failures.
pub fn write_error_report(path: &Path, failures: &[ChunkRowError]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_error_report_to(file, failures)
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Write the error report to any writer.
pub fn write_error_report_to<W: Write>(writer: W, failures: &[ChunkRowError]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(["Row Index", "Identifier", "Error"])?;
    for failure in failures {
        csv_writer.write_record([
            failure.index.to_string(),
            failure.identifier.clone(),
            failure.message.clone(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
