//! Closed value sets for case records.
//!
//! Free-text tokens from source files are never coerced silently: parsing
//! returns either the canonical value or the original text tagged invalid,
//! so callers decide whether to surface an error or offer a normalization
//! suggestion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of parsing a free-text token into a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumParse<T> {
    /// Token matched a canonical member of the closed set.
    Ok(T),
    /// Token did not match; carries the original text for error reporting.
    Invalid(String),
}

impl<T> EnumParse<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            EnumParse::Ok(value) => Some(value),
            EnumParse::Invalid(_) => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, EnumParse::Ok(_))
    }
}

/// Case category. Closed set, no default: an unknown token is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tax,
    License,
    Permit,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Tax, Category::License, Category::Permit];

    /// Canonical token as stored and submitted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tax => "TAX",
            Category::License => "LICENSE",
            Category::Permit => "PERMIT",
        }
    }

    /// Parse a source token after trimming. Only the canonical uppercase
    /// spellings match; a lowercase token is invalid so the validator can
    /// attach the uppercase normalization suggestion instead of coercing.
    pub fn parse(token: &str) -> EnumParse<Self> {
        match token.trim() {
            "TAX" => EnumParse::Ok(Category::Tax),
            "LICENSE" => EnumParse::Ok(Category::License),
            "PERMIT" => EnumParse::Ok(Category::Permit),
            _ => EnumParse::Invalid(token.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case priority. Closed set; an absent value defaults to `Low` at the data
/// layer without raising an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    /// Parse a source token after trimming; canonical uppercase spellings
    /// only, as with [`Category::parse`].
    pub fn parse(token: &str) -> EnumParse<Self> {
        match token.trim() {
            "LOW" => EnumParse::Ok(Priority::Low),
            "MEDIUM" => EnumParse::Ok(Priority::Medium),
            "HIGH" => EnumParse::Ok(Priority::High),
            _ => EnumParse::Invalid(token.to_string()),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
