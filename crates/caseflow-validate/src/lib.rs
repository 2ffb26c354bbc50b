//! Record validation for Caseflow.
//!
//! `rules` holds the per-record field checks with deterministic suggestions,
//! `dataset` the whole-file pass including in-file duplicate detection, and
//! `fix` the bulk-correction helpers.

pub mod dataset;
pub mod fix;
pub mod rules;

pub use dataset::validate_all_rows;
pub use fix::FixHelper;
pub use rules::{advisory_suggestions, parse_date, validate_record};
