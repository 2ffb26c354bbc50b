//! Per-row lifecycle state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of one row. Exactly one per row at any time.
///
/// Transitions: ingestion starts every row at `Pending`; revalidation moves
/// a row to `Valid` or `Invalid` and may fire repeatedly, but never touches
/// rows that are mid- or post-submission; submission moves `Valid` to
/// `Submitting`, and the chunk result settles `Submitting` into `Success`
/// or `Failed`. Rows failed as a block by a transport-level chunk failure
/// reopen to `Submitting` when that chunk is resubmitted; otherwise only a
/// full session reset returns a settled row to `Pending`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RowStatus {
    #[default]
    Pending,
    Valid,
    Invalid,
    Submitting,
    Success,
    Failed,
}

impl RowStatus {
    /// True while the row may still be revalidated in place.
    pub fn accepts_validation(&self) -> bool {
        matches!(self, RowStatus::Pending | RowStatus::Valid | RowStatus::Invalid)
    }

    /// True once the row has entered the submission protocol.
    pub fn is_settled_or_submitting(&self) -> bool {
        !self.accepts_validation()
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowStatus::Pending => "pending",
            RowStatus::Valid => "valid",
            RowStatus::Invalid => "invalid",
            RowStatus::Submitting => "submitting",
            RowStatus::Success => "success",
            RowStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
