use crate::form::error::FormError;
use crate::form::form_model::{CommandOutcome, FormCommand, FormState, SessionPhase, SubmitOutcome};
use crate::form::validation::{compute_progress, validate_required};
use crate::schema::registry::DEFAULT_FORM_TYPE;
use crate::schema::schema_model::{FieldDescriptor, FieldType, FormSchema};
use crate::sink::submission::{NullSink, SubmissionSink};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// FormSession — sole owner and mutator of FormState
// ============================================================================

/// One interactive form session.
///
/// State only changes through `select_form_type`, `set_field_value` and
/// `submit` (or `apply`, which dispatches to them). Accepted submissions are
/// handed to the session's sink.
pub struct FormSession<'s, S: SubmissionSink = NullSink> {
    schema: &'s FormSchema,
    state: FormState,
    phase: SessionPhase,
    sink: S,
    tracer: TraceLogger,
    step: u64,
}

impl<'s> FormSession<'s, NullSink> {
    pub fn new(schema: &'s FormSchema, form_type: &str) -> Self {
        Self::with_sink(schema, form_type, NullSink)
    }
}

impl FormSession<'static, NullSink> {
    /// Session over the builtin schema, starting on the default form type.
    pub fn builtin() -> Self {
        Self::new(FormSchema::builtin(), DEFAULT_FORM_TYPE)
    }
}

impl<'s, S: SubmissionSink> FormSession<'s, S> {
    pub fn with_sink(schema: &'s FormSchema, form_type: &str, sink: S) -> Self {
        Self {
            schema,
            state: FormState::new(form_type),
            phase: SessionPhase::Clean,
            sink,
            tracer: TraceLogger::disabled(),
            step: 0,
        }
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn schema(&self) -> &'s FormSchema {
        self.schema
    }

    /// Fields of the currently selected form type.
    pub fn fields(&self) -> &'s [FieldDescriptor] {
        self.schema.lookup(&self.state.form_type)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Dispatch a UI event.
    pub fn apply(&mut self, command: FormCommand) -> Result<CommandOutcome, FormError> {
        match command {
            FormCommand::SelectFormType(name) => {
                self.select_form_type(&name);
                Ok(CommandOutcome::Selected)
            }
            FormCommand::SetFieldValue { name, value } => {
                let progress = self.set_field_value(&name, &value)?;
                Ok(CommandOutcome::Updated { progress })
            }
            FormCommand::Submit => Ok(CommandOutcome::Submitted(self.submit()?)),
        }
    }

    /// Switch form type; values, errors and progress start over.
    pub fn select_form_type(&mut self, name: &str) {
        self.state = FormState::new(name);
        self.phase = SessionPhase::Clean;
        self.trace("select_form_type", None);
    }

    /// Store a value and return the recomputed progress.
    ///
    /// The field must belong to the selected form type and the value must
    /// be one its control could produce; a rejected edit leaves the state
    /// untouched. Under an unknown form type there is no schema to check
    /// against and any edit is stored.
    pub fn set_field_value(&mut self, name: &str, value: &str) -> Result<f64, FormError> {
        if self.schema.contains(&self.state.form_type) {
            let Some(field) = self.schema.field(&self.state.form_type, name) else {
                self.trace("rejected_field", Some(name.to_string()));
                return Err(FormError::UnknownField {
                    field: name.to_string(),
                    form_type: self.state.form_type.clone(),
                });
            };

            if !field.accepts(value) {
                self.trace("rejected_value", Some(name.to_string()));
                return Err(match field.field_type {
                    FieldType::Dropdown => FormError::InvalidOption {
                        field: field.label.clone(),
                        value: value.to_string(),
                        options: field.options.clone(),
                    },
                    _ => FormError::InvalidValue {
                        field: field.label.clone(),
                        value: value.to_string(),
                        expected: field.expected_format(),
                    },
                });
            }
        }

        self.state.values.insert(name.to_string(), value.to_string());
        self.state.progress = compute_progress(self.fields(), &self.state.values);
        self.phase = SessionPhase::Editing;
        // field name only, values may be secrets
        self.trace("set_field_value", Some(name.to_string()));
        Ok(self.state.progress)
    }

    /// Validate required fields; on success hand the values to the sink.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let errors = validate_required(self.fields(), &self.state.values);

        if !errors.is_empty() {
            self.state.errors = errors.clone();
            self.phase = SessionPhase::Invalid;
            self.trace("submit_rejected", Some(format!("{} missing", errors.len())));
            return Ok(SubmitOutcome::Rejected(errors));
        }

        self.state.errors.clear();
        self.phase = SessionPhase::Valid;
        if let Err(e) = self.sink.accept(&self.state.form_type, &self.state.values) {
            self.trace("sink_failed", Some(e.to_string()));
            return Err(e);
        }
        self.trace("submit_accepted", None);
        Ok(SubmitOutcome::Accepted(self.state.values.clone()))
    }

    fn trace(&mut self, event: &str, detail: Option<String>) {
        self.step += 1;
        if !self.tracer.is_enabled() {
            return;
        }
        let mut ev = TraceEvent::now(self.step, event, &self.state, self.phase);
        if let Some(d) = detail {
            ev = ev.with_detail(d);
        }
        self.tracer.log(&ev);
    }
}
