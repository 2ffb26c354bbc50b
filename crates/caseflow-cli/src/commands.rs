//! Command implementations.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use caseflow_core::{BatchCoordinator, ImportSession, MemoryStore};
use caseflow_ingest::read_csv_file;
use caseflow_model::schema::fields;
use caseflow_model::{
    ChunkRowError, ColumnMapping, JobProgress, RowId, RowStatus, ValidationError, case_schema,
};
use caseflow_validate::FixHelper;

use crate::cli::{CheckArgs, ImportArgs};

/// Result of `caseflow check`.
pub struct CheckReport {
    pub file_name: String,
    pub row_count: usize,
    pub mappings: Vec<ColumnMapping>,
    pub unmapped_required: Vec<&'static str>,
    pub invalid_rows: BTreeMap<RowId, Vec<ValidationError>>,
}

/// Result of `caseflow import`.
pub struct ImportSummary {
    pub file_name: String,
    pub row_count: usize,
    pub invalid_rows: usize,
    pub progress: JobProgress,
    pub failures: Vec<ChunkRowError>,
    pub status_counts: BTreeMap<RowStatus, usize>,
    pub error_report: Option<std::path::PathBuf>,
}

fn open_session(file: &std::path::Path) -> Result<ImportSession> {
    let table = read_csv_file(file)?;
    if table.is_empty() {
        bail!("{} contains no data rows", file.display());
    }
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    Ok(ImportSession::open(name, table))
}

fn apply_mapping_overrides(session: &mut ImportSession, overrides: &[String]) -> Result<()> {
    for entry in overrides {
        let (source, field) = entry
            .split_once('=')
            .with_context(|| format!("invalid --map '{entry}', expected SOURCE=FIELD"))?;
        let target = if field.is_empty() { None } else { Some(field) };
        if !session.override_mapping(source, target) {
            bail!("cannot map column '{source}' to field '{field}'");
        }
    }
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let mut session = open_session(&args.file)?;
    let unmapped = session.unmapped_required();
    if unmapped.is_empty() {
        session.revalidate();
    }
    Ok(CheckReport {
        file_name: session.file_name().to_string(),
        row_count: session.rows().len(),
        mappings: session.mapping().mappings().to_vec(),
        unmapped_required: unmapped,
        invalid_rows: session.validation_errors().clone(),
    })
}

pub fn run_import(args: &ImportArgs) -> Result<ImportSummary> {
    let mut session = open_session(&args.file)?;
    apply_mapping_overrides(&mut session, &args.map)?;

    let unmapped = session.unmapped_required();
    if !unmapped.is_empty() {
        bail!(
            "required fields are not mapped: {} (use --map SOURCE=FIELD)",
            unmapped.join(", ")
        );
    }

    if args.apply_fixes {
        session.apply_fix(fields::APPLICANT_NAME, FixHelper::CollapseWhitespace);
        session.apply_fix(fields::PHONE, FixHelper::PrefixCountryCode);
        session.apply_fix(fields::CATEGORY, FixHelper::UppercaseToken);
        session.apply_fix(fields::PRIORITY, FixHelper::UppercaseToken);
    }

    let invalid = session.revalidate();
    if invalid > 0 && !args.partial {
        bail!(
            "{invalid} of {} rows failed validation; repair the file or pass --partial \
             to submit the valid rows",
            session.rows().len()
        );
    }

    let mut store = MemoryStore::new();
    let mut coordinator = BatchCoordinator::new(&mut store, args.chunk_size);
    coordinator.begin(&mut session)?;

    let total = session
        .status_counts()
        .get(&RowStatus::Submitting)
        .copied()
        .unwrap_or(0);
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} rows {msg}")
            .expect("progress template"),
    );

    // One chunk at a time so the bar tracks real chunk boundaries.
    let report = loop {
        let report = coordinator.run_chunks(&mut session, 1)?;
        bar.set_position(report.progress.processed_rows as u64);
        if report.progress.processed_rows >= report.progress.total_rows {
            break report;
        }
    };
    bar.finish_with_message("done");

    if let Some(path) = &args.error_report {
        caseflow_report::write_error_report(path, &report.failures)?;
        info!(path = %path.display(), failures = report.failures.len(), "error report written");
    }

    Ok(ImportSummary {
        file_name: session.file_name().to_string(),
        row_count: session.rows().len(),
        invalid_rows: invalid,
        progress: report.progress,
        failures: report.failures,
        status_counts: session.status_counts(),
        error_report: args.error_report.clone(),
    })
}

pub fn run_fields() -> Result<()> {
    for field in case_schema() {
        let requiredness = if field.required { "required" } else { "optional" };
        println!(
            "{:<16} {:<16} {:<9} aliases: {}",
            field.name,
            field.label,
            requiredness,
            field.aliases.join(", ")
        );
    }
    Ok(())
}
