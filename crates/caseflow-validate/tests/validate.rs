use caseflow_model::{CaseRecord, Row};
use caseflow_validate::{advisory_suggestions, validate_all_rows, validate_record};

fn record(case_id: &str, name: &str, dob: &str, category: &str) -> CaseRecord {
    CaseRecord {
        case_id: case_id.to_string(),
        applicant_name: name.to_string(),
        dob: dob.to_string(),
        category: category.to_string(),
        ..CaseRecord::default()
    }
}

fn row(id: u64, case_record: CaseRecord) -> Row {
    Row {
        id,
        record: case_record,
        source_cells: Vec::new(),
    }
}

#[test]
fn clean_row_passes_with_normalization_suggestions() {
    let mut case_record = record("C-1001", "John  Doe", "1990-01-01", "TAX");
    case_record.email = "john@example.com".to_string();
    case_record.phone = "9876543210".to_string();

    // No blocking errors: priority absent defaults to LOW.
    assert!(validate_record(&case_record).is_empty());

    let notes = advisory_suggestions(&case_record);
    let name_note = notes.iter().find(|n| n.field == "applicant_name").unwrap();
    assert_eq!(name_note.suggestion.as_deref(), Some("John Doe"));
    let phone_note = notes.iter().find(|n| n.field == "phone").unwrap();
    assert_eq!(phone_note.suggestion.as_deref(), Some("+919876543210"));
}

#[test]
fn broken_row_reports_exactly_four_errors() {
    let case_record = record("", "", "2099-01-01", "INVALID");
    let errors = validate_record(&case_record);
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().any(|e| e.field == "case_id"));
    assert!(errors.iter().any(|e| e.field == "applicant_name"));
    assert!(errors.iter().any(|e| e.field == "dob"));
    assert!(errors.iter().any(|e| e.field == "category"));
}

#[test]
fn unknown_category_always_errors_regardless_of_other_fields() {
    for (name, dob) in [("Jane Roe", "1985-06-15"), ("", "bad-date")] {
        let errors = validate_record(&record("C-9", name, dob, "RENEWAL"));
        assert!(errors.iter().any(|e| e.field == "category"));
    }
}

#[test]
fn dataset_pass_omits_valid_rows_and_flags_later_duplicates() {
    let rows = vec![
        row(10, record("C-1", "Jane Roe", "1985-06-15", "PERMIT")),
        row(11, record("C-2", "John Doe", "1990-01-01", "LICENSE")),
        row(12, record("C-1", "Someone Else", "1970-03-03", "TAX")),
    ];
    let result = validate_all_rows(&rows);
    assert_eq!(result.len(), 1);
    let errors = &result[&12];
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Duplicate case ID 'C-1'"));
}

#[test]
fn present_but_unknown_priority_is_an_error_with_suggestion() {
    let mut case_record = record("C-5", "Jane Roe", "1985-06-15", "TAX");
    case_record.priority = "high".to_string();
    assert!(validate_record(&case_record).is_empty(), "case-insensitive parse");

    case_record.priority = "urgent".to_string();
    let errors = validate_record(&case_record);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "priority");
    assert!(errors[0].suggestion.is_none());
}
