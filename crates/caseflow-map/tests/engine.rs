use proptest::prelude::*;

use caseflow_map::{MIN_CONFIDENCE, auto_map, similarity, unmapped_required_fields};

#[test]
fn maps_a_realistic_header_line() {
    let headers: Vec<String> = [
        "case_number",
        "applicant",
        "date_of_birth",
        "email_address",
        "phone_number",
        "case_type",
        "urgency",
        "internal_notes",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect();

    let mappings = auto_map(&headers);
    assert_eq!(mappings.len(), headers.len());

    let field_of = |header: &str| {
        mappings
            .iter()
            .find(|m| m.source_column == header)
            .and_then(|m| m.field.as_deref())
    };

    assert_eq!(field_of("case_number"), Some("case_id"));
    assert_eq!(field_of("applicant"), Some("applicant_name"));
    assert_eq!(field_of("date_of_birth"), Some("dob"));
    assert_eq!(field_of("email_address"), Some("email"));
    assert_eq!(field_of("phone_number"), Some("phone"));
    assert_eq!(field_of("case_type"), Some("category"));
    assert_eq!(field_of("urgency"), Some("priority"));
    assert_eq!(field_of("internal_notes"), None);

    assert!(unmapped_required_fields(&mappings).is_empty());
}

#[test]
fn substring_rule_scores_at_least_point_nine() {
    assert!(similarity("email", "email_address") >= 0.9);
    assert!(similarity("dob", "dob_raw") >= 0.9);
}

#[test]
fn missing_required_columns_are_reported() {
    let headers = vec!["email".to_string(), "phone".to_string()];
    let mappings = auto_map(&headers);
    let missing = unmapped_required_fields(&mappings);
    assert_eq!(
        missing,
        vec!["Case ID", "Applicant Name", "Date of Birth", "Category"]
    );
}

proptest! {
    #[test]
    fn output_matches_input_length_and_order(
        headers in proptest::collection::vec("[a-z_]{0,16}", 0..12)
    ) {
        let mappings = auto_map(&headers);
        prop_assert_eq!(mappings.len(), headers.len());
        for (mapping, header) in mappings.iter().zip(&headers) {
            prop_assert_eq!(&mapping.source_column, header);
        }
    }

    #[test]
    fn no_field_is_claimed_twice(
        headers in proptest::collection::vec("[a-z_ ]{0,16}", 0..12)
    ) {
        let mappings = auto_map(&headers);
        let mut claimed: Vec<&str> = mappings
            .iter()
            .filter_map(|m| m.field.as_deref())
            .collect();
        let before = claimed.len();
        claimed.sort_unstable();
        claimed.dedup();
        prop_assert_eq!(claimed.len(), before);
    }

    #[test]
    fn assigned_mappings_meet_the_threshold(
        headers in proptest::collection::vec("[a-z_]{1,16}", 0..12)
    ) {
        for mapping in auto_map(&headers) {
            if mapping.auto_assigned {
                // Empty-normalized headers are the degenerate exact case.
                prop_assert!(mapping.confidence >= MIN_CONFIDENCE);
            } else {
                prop_assert_eq!(mapping.confidence, 0.0);
            }
        }
    }
}
