//! CSV ingestion for Caseflow.
//!
//! Reads a delimited file whose first row is the header line, normalizes
//! headers for the column mapper, and hands back an ordered table of raw
//! cells. No schema knowledge lives here; mapping and validation happen
//! downstream.

pub mod csv_table;

pub use csv_table::{CsvTable, normalize_header, read_csv_file, read_csv_reader};
