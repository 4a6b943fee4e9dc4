use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Field descriptors — the static shape of a form
// ============================================================================

/// Kind of control a field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Dropdown,
    Date,
    Password,
}

impl FieldType {
    /// Wire name, also the HTML input type of non-dropdown fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Dropdown => "dropdown",
            FieldType::Date => "date",
            FieldType::Password => "password",
        }
    }
}

/// A single field of a form type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique within its form type; key into the value map
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    pub label: String,

    #[serde(default)]
    pub required: bool,

    /// Allowed values, only populated for dropdowns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    pub fn new(name: &str, field_type: FieldType, label: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            label: label.to_string(),
            required,
            options: Vec::new(),
        }
    }

    pub fn dropdown(name: &str, label: &str, required: bool, options: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            field_type: FieldType::Dropdown,
            label: label.to_string(),
            required,
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// Whether `value` may be stored for this field.
    ///
    /// Only values the matching HTML control could produce are accepted:
    /// a listed option, a finite number, or a `YYYY-MM-DD` date. The empty
    /// string (cleared input, unselected placeholder) is always allowed.
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        match self.field_type {
            FieldType::Dropdown => self.options.iter().any(|o| o == value),
            FieldType::Number => value.parse::<f64>().is_ok_and(f64::is_finite),
            FieldType::Date => is_iso_date(value),
            FieldType::Text | FieldType::Password => true,
        }
    }

    /// Short description of what `accepts` allows, for error messages.
    pub fn expected_format(&self) -> String {
        match self.field_type {
            FieldType::Dropdown => format!("one of: {}", self.options.join(", ")),
            FieldType::Number => "a number".to_string(),
            FieldType::Date => "a date as YYYY-MM-DD".to_string(),
            FieldType::Text | FieldType::Password => "any text".to_string(),
        }
    }
}

// chrono alone takes single-digit months and days
fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// One selectable form type and its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDefinition {
    pub fn required_count(&self) -> usize {
        self.fields.iter().filter(|f| f.required).count()
    }
}

/// Ordered mapping from form-type name to its fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    pub forms: Vec<FormDefinition>,
}
