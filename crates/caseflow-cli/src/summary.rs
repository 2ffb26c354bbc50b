//! Terminal summaries for check and import runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use caseflow_model::RowStatus;

use crate::commands::{CheckReport, ImportSummary};

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn print_check_summary(report: &CheckReport) {
    println!("File: {} ({} rows)", report.file_name, report.row_count);

    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Source Column"),
        header_cell("Mapped Field"),
        header_cell("Confidence"),
    ]);
    for mapping in &report.mappings {
        let (field, color) = match &mapping.field {
            Some(field) => (field.clone(), Color::Green),
            None => ("-".to_string(), Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(&mapping.source_column),
            Cell::new(field).fg(color),
            Cell::new(format!("{:.0}%", mapping.confidence * 100.0))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");

    if !report.unmapped_required.is_empty() {
        eprintln!(
            "Unmapped required fields: {}",
            report.unmapped_required.join(", ")
        );
        return;
    }

    if report.invalid_rows.is_empty() {
        println!("All rows valid.");
        return;
    }

    let mut issues = styled_table();
    issues.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Error"),
        header_cell("Suggestion"),
    ]);
    for (row_id, errors) in &report.invalid_rows {
        for error in errors {
            issues.add_row(vec![
                Cell::new(row_id).set_alignment(CellAlignment::Right),
                Cell::new(&error.field),
                Cell::new(&error.message).fg(Color::Red),
                Cell::new(error.suggestion.as_deref().unwrap_or("-")),
            ]);
        }
    }
    println!("{issues}");
    println!(
        "{} of {} rows need repair.",
        report.invalid_rows.len(),
        report.row_count
    );
}

pub fn print_import_summary(summary: &ImportSummary) {
    println!(
        "File: {} ({} rows, job {})",
        summary.file_name,
        summary.row_count,
        summary.progress.status.label()
    );

    let mut table = styled_table();
    table.set_header(vec![header_cell("Status"), header_cell("Rows")]);
    for status in [
        RowStatus::Success,
        RowStatus::Failed,
        RowStatus::Invalid,
        RowStatus::Submitting,
        RowStatus::Pending,
    ] {
        let count = summary.status_counts.get(&status).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        let color = match status {
            RowStatus::Success => Color::Green,
            RowStatus::Failed | RowStatus::Invalid => Color::Red,
            _ => Color::DarkGrey,
        };
        table.add_row(vec![
            Cell::new(status.label()).fg(color),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");

    if !summary.failures.is_empty() {
        let mut failures = styled_table();
        failures.set_header(vec![
            header_cell("Row Index"),
            header_cell("Identifier"),
            header_cell("Error"),
        ]);
        for failure in &summary.failures {
            failures.add_row(vec![
                Cell::new(failure.index).set_alignment(CellAlignment::Right),
                Cell::new(&failure.identifier),
                Cell::new(&failure.message).fg(Color::Red),
            ]);
        }
        println!("{failures}");
    }

    if let Some(path) = &summary.error_report {
        println!("Error report: {}", path.display());
    }
    if summary.invalid_rows > 0 {
        println!(
            "{} of {} rows failed validation and were not submitted.",
            summary.invalid_rows, summary.row_count
        );
    }
    println!(
        "Submitted {} of {} rows ({} failed).",
        summary.progress.success_count,
        summary.progress.total_rows,
        summary.progress.failed_count
    );
}
