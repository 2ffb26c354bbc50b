//! The fixed target schema every imported case record maps onto.
//!
//! The schema is static configuration: seven fields, each with a stable key,
//! a display label, a requiredness flag, and the alias spellings the column
//! mapper scores source headers against.

/// A named target attribute of the case-record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    /// Unique key, also the canonical column name after mapping.
    pub name: &'static str,
    /// Human-readable label shown in mapping and error output.
    pub label: &'static str,
    /// Required fields gate progression from mapping to validation.
    pub required: bool,
    /// Alternate header spellings commonly seen in source files.
    pub aliases: &'static [&'static str],
}

/// Field keys, kept in one place so callers never spell them inline.
pub mod fields {
    pub const CASE_ID: &str = "case_id";
    pub const APPLICANT_NAME: &str = "applicant_name";
    pub const DOB: &str = "dob";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const CATEGORY: &str = "category";
    pub const PRIORITY: &str = "priority";
}

const CASE_SCHEMA: &[SchemaField] = &[
    SchemaField {
        name: fields::CASE_ID,
        label: "Case ID",
        required: true,
        aliases: &["case number", "case no", "caseid", "id", "reference", "ref no"],
    },
    SchemaField {
        name: fields::APPLICANT_NAME,
        label: "Applicant Name",
        required: true,
        aliases: &["name", "applicant", "full name", "customer name"],
    },
    SchemaField {
        name: fields::DOB,
        label: "Date of Birth",
        required: true,
        aliases: &["date of birth", "birth date", "birthdate", "born"],
    },
    SchemaField {
        name: fields::EMAIL,
        label: "Email",
        required: false,
        aliases: &["email address", "e-mail", "mail"],
    },
    SchemaField {
        name: fields::PHONE,
        label: "Phone",
        required: false,
        aliases: &["phone number", "mobile", "contact", "telephone"],
    },
    SchemaField {
        name: fields::CATEGORY,
        label: "Category",
        required: true,
        aliases: &["case category", "type", "case type"],
    },
    SchemaField {
        name: fields::PRIORITY,
        label: "Priority",
        required: false,
        aliases: &["severity", "urgency", "priority level"],
    },
];

/// The full target schema in canonical field order.
pub fn case_schema() -> &'static [SchemaField] {
    CASE_SCHEMA
}

/// Look up a schema field by its key.
pub fn schema_field(name: &str) -> Option<&'static SchemaField> {
    CASE_SCHEMA.iter().find(|f| f.name == name)
}
