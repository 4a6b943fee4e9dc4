use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::schema_model::FieldDescriptor;

// ============================================================================
// Required-field validation and completion progress
// ============================================================================

/// A required field that was missing at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub label: String,
}

impl ValidationError {
    pub fn missing(field: &FieldDescriptor) -> Self {
        Self {
            field: field.name.clone(),
            label: field.label.clone(),
        }
    }

    /// `"<label> is required."`
    pub fn message(&self) -> String {
        format!("{} is required.", self.label)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is required.", self.label)
    }
}

/// A value counts as filled when present and non-empty.
pub fn is_filled(values: &BTreeMap<String, String>, name: &str) -> bool {
    values.get(name).is_some_and(|v| !v.is_empty())
}

/// One error per required field without a value, in schema order.
pub fn validate_required(
    fields: &[FieldDescriptor],
    values: &BTreeMap<String, String>,
) -> Vec<ValidationError> {
    fields
        .iter()
        .filter(|f| f.required && !is_filled(values, &f.name))
        .map(ValidationError::missing)
        .collect()
}

/// Percentage of required fields that are filled, in `[0, 100]`.
///
/// A schema without required fields reports 0.
pub fn compute_progress(fields: &[FieldDescriptor], values: &BTreeMap<String, String>) -> f64 {
    let total = fields.iter().filter(|f| f.required).count();
    if total == 0 {
        return 0.0;
    }
    let completed = fields
        .iter()
        .filter(|f| f.required && is_filled(values, &f.name))
        .count();
    completed as f64 / total as f64 * 100.0
}

/// Display percentage, rounded to the nearest integer.
pub fn round_percent(progress: f64) -> u32 {
    if !progress.is_finite() {
        return 0;
    }
    progress.clamp(0.0, 100.0).round() as u32
}
