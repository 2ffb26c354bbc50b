use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

/// An ingested delimited file: normalized headers plus raw rows in file
/// order. Short rows are padded so every row has one cell per header.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Normalize a raw header for mapping: strip BOM, trim, lowercase, and
/// collapse internal whitespace to single underscores.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file from disk. The first row is the header line.
pub fn read_csv_file(path: &Path) -> Result<CsvTable> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_csv_reader(file).with_context(|| format!("failed to read {}", path.display()))
}

/// Read CSV content from any reader. The first row is the header line.
pub fn read_csv_reader<R: Read>(reader: R) -> Result<CsvTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("failed to read header line")?
        .iter()
        .map(normalize_header)
        .collect();

    if headers.iter().all(String::is_empty) {
        bail!("header line is empty");
    }

    let mut rows = Vec::new();
    for (line, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("failed to parse data row {}", line + 1))?;
        let mut cells: Vec<String> = record.iter().map(normalize_cell).collect();
        // Flexible parsing may yield short or long rows; resize to the
        // header width so downstream indexing stays positional.
        cells.resize(headers.len(), String::new());
        rows.push(cells);
    }

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_headers() {
        assert_eq!(normalize_header("  Case  Number "), "case_number");
        assert_eq!(normalize_header("\u{feff}Email"), "email");
        assert_eq!(normalize_header("DOB"), "dob");
    }

    #[test]
    fn reads_and_pads_rows() {
        let data = "Case ID,Applicant Name,DOB\nC-1,John Doe,1990-01-01\nC-2,Jane\n";
        let table = read_csv_reader(data.as_bytes()).expect("read csv");
        assert_eq!(table.headers, vec!["case_id", "applicant_name", "dob"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1], vec!["C-2", "Jane", ""]);
    }

    #[test]
    fn rejects_empty_header_line() {
        let data = ",,\na,b,c\n";
        assert!(read_csv_reader(data.as_bytes()).is_err());
    }
}
