//! Per-record validation rules.
//!
//! Every rule reports independently, so a record may carry several errors at
//! once. Suggestions are deterministic candidate fixes attached to the error
//! they would resolve; the validator never applies them.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

use caseflow_model::schema::fields;
use caseflow_model::{CaseRecord, Category, EnumParse, Priority, ValidationError};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("phone pattern"));

const DOB_MIN_YEAR: i32 = 1900;
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Country code prefixed onto bare 10-digit phone numbers by the fix
/// suggestion.
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Validate one record against the schema rules.
///
/// Returns every finding; an empty vector means the record is valid.
pub fn validate_record(record: &CaseRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_required(
        fields::CASE_ID,
        "Case ID is required",
        &record.case_id,
        &mut errors,
    );
    check_applicant_name(record, &mut errors);
    check_dob(record, &mut errors);
    check_email(record, &mut errors);
    check_phone(record, &mut errors);
    check_category(record, &mut errors);
    check_priority(record, &mut errors);

    errors
}

fn check_required(field: &str, message: &str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, message));
    }
}

fn check_applicant_name(record: &CaseRecord, errors: &mut Vec<ValidationError>) {
    let name = &record.applicant_name;
    if name.trim().is_empty() {
        errors.push(ValidationError::new(
            fields::APPLICANT_NAME,
            "Applicant name is required",
        ));
    }
}

fn check_dob(record: &CaseRecord, errors: &mut Vec<ValidationError>) {
    let raw = record.dob.trim();
    let Some(date) = parse_date(raw) else {
        errors.push(
            ValidationError::new(fields::DOB, "Date of birth must be a calendar date")
                .with_value(&record.dob),
        );
        return;
    };
    let current_year = Utc::now().year();
    if date.year() < DOB_MIN_YEAR || date.year() > current_year {
        errors.push(
            ValidationError::new(
                fields::DOB,
                format!("Date of birth year must be between {DOB_MIN_YEAR} and {current_year}"),
            )
            .with_value(&record.dob),
        );
    }
}

/// Parse a date token against the accepted formats.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn check_email(record: &CaseRecord, errors: &mut Vec<ValidationError>) {
    let email = record.email.trim();
    if email.is_empty() {
        return;
    }
    if !EMAIL_RE.is_match(email) {
        errors.push(
            ValidationError::new(fields::EMAIL, "Email must look like local@domain.tld")
                .with_value(&record.email),
        );
    }
}

fn check_phone(record: &CaseRecord, errors: &mut Vec<ValidationError>) {
    let raw = record.phone.trim();
    if raw.is_empty() {
        return;
    }
    let stripped = strip_phone_punctuation(raw);
    if !PHONE_RE.is_match(&stripped) {
        let mut error = ValidationError::new(
            fields::PHONE,
            "Phone must be an international number (optional +, 2-15 digits)",
        )
        .with_value(&record.phone);
        if let Some(fixed) = suggest_phone(&stripped) {
            error = error.with_suggestion(fixed);
        }
        errors.push(error);
    }
}

fn check_category(record: &CaseRecord, errors: &mut Vec<ValidationError>) {
    let raw = record.category.trim();
    if raw.is_empty() {
        errors.push(ValidationError::new(fields::CATEGORY, "Category is required"));
        return;
    }
    if let EnumParse::Invalid(original) = Category::parse(raw) {
        let mut error = ValidationError::new(
            fields::CATEGORY,
            "Category must be one of TAX, LICENSE, PERMIT",
        )
        .with_value(&original);
        if let Some(fixed) = suggest_uppercase_token(raw, |t| Category::parse(t).is_ok()) {
            error = error.with_suggestion(fixed);
        }
        errors.push(error);
    }
}

fn check_priority(record: &CaseRecord, errors: &mut Vec<ValidationError>) {
    if record.priority.trim().is_empty() {
        // Absent priority defaults to LOW at the data layer.
        return;
    }
    if let EnumParse::Invalid(original) = record.priority() {
        let mut error = ValidationError::new(
            fields::PRIORITY,
            "Priority must be one of LOW, MEDIUM, HIGH",
        )
        .with_value(&original);
        if let Some(fixed) =
            suggest_uppercase_token(record.priority.trim(), |t| Priority::parse(t).is_ok())
        {
            error = error.with_suggestion(fixed);
        }
        errors.push(error);
    }
}

/// Remove the separator characters tolerated in phone input.
pub fn strip_phone_punctuation(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')' | '-'))
        .collect()
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Suggest a normalized phone for a bare 10-digit number.
pub fn suggest_phone(stripped: &str) -> Option<String> {
    if stripped.len() == 10 && stripped.chars().all(|c| c.is_ascii_digit()) {
        Some(format!("{DEFAULT_COUNTRY_CODE}{stripped}"))
    } else {
        None
    }
}

/// Suggest the uppercased token when uppercasing makes it valid.
fn suggest_uppercase_token(raw: &str, valid: impl Fn(&str) -> bool) -> Option<String> {
    let upper = raw.to_uppercase();
    if upper != raw && valid(&upper) { Some(upper) } else { None }
}

/// Advisory suggestions for a record that is otherwise valid.
///
/// Collapsed-whitespace names and bare 10-digit phones pass validation but
/// still benefit from normalization; these surface alongside an empty error
/// list so the repair UI can offer them.
pub fn advisory_suggestions(record: &CaseRecord) -> Vec<ValidationError> {
    let mut notes = Vec::new();

    let collapsed = collapse_whitespace(&record.applicant_name);
    if !collapsed.is_empty() && collapsed != record.applicant_name {
        notes.push(
            ValidationError::new(fields::APPLICANT_NAME, "Name has extra whitespace")
                .with_value(&record.applicant_name)
                .with_suggestion(collapsed),
        );
    }

    let stripped = strip_phone_punctuation(record.phone.trim());
    if let Some(fixed) = suggest_phone(&stripped) {
        notes.push(
            ValidationError::new(fields::PHONE, "Phone is missing a country code")
                .with_value(&record.phone)
                .with_suggestion(fixed),
        );
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> CaseRecord {
        CaseRecord {
            case_id: "C-1001".to_string(),
            applicant_name: "John Doe".to_string(),
            dob: "1990-01-01".to_string(),
            email: "john@example.com".to_string(),
            phone: "+919876543210".to_string(),
            category: "TAX".to_string(),
            priority: "LOW".to_string(),
            ..CaseRecord::default()
        }
    }

    #[test]
    fn valid_record_has_no_errors() {
        assert!(validate_record(&valid_record()).is_empty());
    }

    #[test]
    fn every_rule_reports_independently() {
        let record = CaseRecord {
            case_id: String::new(),
            applicant_name: String::new(),
            dob: "2099-01-01".to_string(),
            category: "INVALID".to_string(),
            ..CaseRecord::default()
        };
        let errors = validate_record(&record);
        assert_eq!(errors.len(), 4);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["case_id", "applicant_name", "dob", "category"]);
    }

    #[test]
    fn dob_year_bounds() {
        let mut record = valid_record();
        record.dob = "1899-12-31".to_string();
        assert_eq!(validate_record(&record).len(), 1);
        record.dob = "1900-01-01".to_string();
        assert!(validate_record(&record).is_empty());
        record.dob = "not-a-date".to_string();
        assert_eq!(validate_record(&record).len(), 1);
    }

    #[test]
    fn optional_email_and_phone() {
        let mut record = valid_record();
        record.email = String::new();
        record.phone = String::new();
        assert!(validate_record(&record).is_empty());

        record.email = "not-an-email".to_string();
        record.phone = "0123".to_string();
        let errors = validate_record(&record);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn phone_punctuation_is_tolerated() {
        let mut record = valid_record();
        record.phone = "+91 (987) 654-3210".to_string();
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn category_suggestion_uppercases() {
        let mut record = valid_record();
        record.category = "tax refund".to_string();
        let errors = validate_record(&record);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].suggestion.is_none(), "uppercasing does not make it valid");

        record.category = "permit".to_string();
        let errors = validate_record(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].suggestion.as_deref(), Some("PERMIT"));
    }

    #[test]
    fn advisory_suggestions_for_valid_input() {
        let mut record = valid_record();
        record.applicant_name = "John  Doe".to_string();
        record.phone = "9876543210".to_string();
        assert!(validate_record(&record).is_empty());

        let notes = advisory_suggestions(&record);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].suggestion.as_deref(), Some("John Doe"));
        assert_eq!(notes[1].suggestion.as_deref(), Some("+919876543210"));
    }
}
