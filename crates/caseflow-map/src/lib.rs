//! Fuzzy column-to-schema mapping.
//!
//! The similarity engine scores a source header against a schema field's
//! key, label, and aliases; the auto-mapper resolves the resulting proposals
//! into a one-to-one assignment; [`MappingState`] layers user overrides on
//! top while keeping fields globally unique.

pub mod engine;
pub mod similarity;
pub mod state;

pub use engine::{MIN_CONFIDENCE, auto_map, unmapped_required_fields};
pub use similarity::similarity;
pub use state::MappingState;
