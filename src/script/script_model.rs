use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::form_model::FormState;

/// A recorded sequence of UI events, replayed against a session.
///
/// ```yaml
/// name: user info happy path
/// form_type: User Information
/// steps:
///   - action: set
///     field: firstName
///     value: Ann
///   - action: expect_progress
///     percent: 50
///   - action: submit
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionScript {
    pub name: String,

    /// Form type selected before the first step
    #[serde(default)]
    pub form_type: Option<String>,

    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Change the form-type selector
    Select { form_type: String },

    /// Edit one field
    Set { field: String, value: String },

    /// Edit several fields, in key order
    Fill { values: BTreeMap<String, String> },

    /// Click the submit button
    Submit,

    /// Displayed progress equals `percent`
    ExpectProgress { percent: u32 },

    /// Current error list equals `messages`, in order
    ExpectErrors { messages: Vec<String> },

    /// The most recent submit was accepted
    ExpectAccepted,
}

impl ScriptStep {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptStep::Select { .. } => "select",
            ScriptStep::Set { .. } => "set",
            ScriptStep::Fill { .. } => "fill",
            ScriptStep::Submit => "submit",
            ScriptStep::ExpectProgress { .. } => "expect_progress",
            ScriptStep::ExpectErrors { .. } => "expect_errors",
            ScriptStep::ExpectAccepted => "expect_accepted",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepResult {
    /// 0-indexed position in the script
    pub step_index: usize,

    pub action: String,

    pub passed: bool,

    /// Why the step failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of replaying one script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptReport {
    pub script_name: String,

    /// Whether every step passed
    pub passed: bool,

    pub steps_run: usize,

    pub step_results: Vec<StepResult>,

    /// Number of accepted submissions
    pub accepted: usize,

    /// Session state after the last step
    pub final_state: FormState,
}

impl ScriptReport {
    pub fn failures(&self) -> impl Iterator<Item = &StepResult> {
        self.step_results.iter().filter(|r| !r.passed)
    }
}
