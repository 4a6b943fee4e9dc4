use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::form::form_model::{FormState, SessionPhase};

/// One line of the session trace, written after every applied command.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub event: String,
    pub form_type: String,
    pub phase: String,

    pub progress: u32,
    pub errors: Vec<String>,

    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(step: u64, event: &str, state: &FormState, phase: SessionPhase) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            step,
            event: event.to_string(),
            form_type: state.form_type.clone(),
            phase: format!("{:?}", phase),
            progress: state.progress_percent(),
            errors: state.error_messages(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
