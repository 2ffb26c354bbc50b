//! Deterministic fix helpers for bulk-correcting a field across rows.

use serde::{Deserialize, Serialize};

use crate::rules::{collapse_whitespace, strip_phone_punctuation, suggest_phone};

/// A deterministic text transformation a user can apply to one field across
/// many rows at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixHelper {
    /// Collapse runs of whitespace to single spaces and trim.
    CollapseWhitespace,
    /// Prefix the default country code onto bare 10-digit phone numbers.
    PrefixCountryCode,
    /// Uppercase the token (for category/priority normalization).
    UppercaseToken,
}

impl FixHelper {
    /// Apply the transformation. Returns `None` when the value is already in
    /// the target shape or the helper does not apply to it.
    pub fn apply(&self, value: &str) -> Option<String> {
        match self {
            FixHelper::CollapseWhitespace => {
                let collapsed = collapse_whitespace(value);
                (collapsed != value).then_some(collapsed)
            }
            FixHelper::PrefixCountryCode => suggest_phone(&strip_phone_punctuation(value.trim())),
            FixHelper::UppercaseToken => {
                let upper = value.trim().to_uppercase();
                (upper != value).then_some(upper)
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FixHelper::CollapseWhitespace => "collapse whitespace",
            FixHelper::PrefixCountryCode => "prefix country code",
            FixHelper::UppercaseToken => "uppercase token",
        }
    }
}
