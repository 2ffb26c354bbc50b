//! Normalized string similarity between a source header and a schema field
//! name.
//!
//! The check order matters: substring containment is tested before the edit
//! distance fallback, because edit distance alone under-scores prefix and
//! suffix matches such as "email" vs "email_address".

use rapidfuzz::distance::levenshtein;

/// Score for a containment match (one normalized string inside the other).
pub const SUBSTRING_SCORE: f32 = 0.9;

/// Similarity between two strings in [0, 1].
///
/// Both inputs are normalized to lowercase alphanumerics first. Identical
/// normalized strings score 1.0, as does the degenerate case where either
/// normalizes to empty. Containment scores a fixed 0.9; everything else
/// falls back to `1 - levenshtein / max_len` over the normalized strings.
pub fn similarity(a: &str, b: &str) -> f32 {
    let left = normalize(a);
    let right = normalize(b);

    if left == right {
        return 1.0;
    }
    if left.is_empty() || right.is_empty() {
        return 1.0;
    }
    if left.contains(&right) || right.contains(&left) {
        return SUBSTRING_SCORE;
    }

    let distance = levenshtein::distance(left.chars(), right.chars());
    let max_len = left.chars().count().max(right.chars().count());
    1.0 - distance as f32 / max_len as f32
}

/// Lowercase and strip everything that is not ASCII-alphanumeric.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
