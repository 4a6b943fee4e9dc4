use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::validation::{ValidationError, round_percent};

/// Everything the renderer needs to know about the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub form_type: String,
    pub values: BTreeMap<String, String>,
    pub errors: Vec<ValidationError>,
    pub progress: f64,
}

impl FormState {
    /// Fresh state for `form_type`: no values, no errors, 0% progress.
    pub fn new(form_type: &str) -> Self {
        Self {
            form_type: form_type.to_string(),
            values: BTreeMap::new(),
            errors: Vec::new(),
            progress: 0.0,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn progress_percent(&self) -> u32 {
        round_percent(self.progress)
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ValidationError::message).collect()
    }

    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Position in the per-form-type interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No interaction since the form type was selected
    Clean,
    Editing,
    /// Last submission failed validation
    Invalid,
    /// Last submission was accepted
    Valid,
}

/// UI events, the only way session state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    SelectFormType(String),
    SetFieldValue { name: String, value: String },
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; carries the submitted values
    Accepted(BTreeMap<String, String>),

    /// One error per missing required field
    Rejected(Vec<ValidationError>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Result of applying a single `FormCommand`.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Selected,
    Updated { progress: f64 },
    Submitted(SubmitOutcome),
}
