use serde::Serialize;

use crate::form::error::FormError;
use crate::form::form_model::FormState;
use crate::schema::schema_model::{FieldDescriptor, FieldType, FormSchema};

/// Inline marker shown under a field whose required-message is active.
pub const FIELD_ERROR_TEXT: &str = "This field is required";

/// Control used to edit a field's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    Select {
        placeholder: String,
        options: Vec<String>,
        /// Empty when the placeholder is showing
        selected: String,
    },
    Input {
        input_type: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedField {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub control: Control,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A renderable snapshot of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedForm {
    pub form_type: String,
    /// Entries of the form-type selector
    pub form_types: Vec<String>,
    pub fields: Vec<RenderedField>,
    pub progress_percent: u32,
    pub error_summary: Vec<String>,
}

impl RenderedForm {
    pub fn has_errors(&self) -> bool {
        !self.error_summary.is_empty()
    }

    pub fn to_json(&self) -> Result<String, FormError> {
        serde_json::to_string_pretty(self).map_err(|e| FormError::Json {
            context: "rendered form".to_string(),
            source: e,
        })
    }
}

/// Build the view of `state` against `schema`.
///
/// Pure: the same snapshot always renders the same way.
pub fn render_form(schema: &FormSchema, state: &FormState) -> RenderedForm {
    let fields = schema
        .lookup(&state.form_type)
        .iter()
        .map(|field| RenderedField {
            name: field.name.clone(),
            label: field.label.clone(),
            required: field.required,
            control: control_for(field, state.value(&field.name)),
            error: state
                .has_error_for(&field.name)
                .then(|| FIELD_ERROR_TEXT.to_string()),
        })
        .collect();

    RenderedForm {
        form_type: state.form_type.clone(),
        form_types: schema.form_types().into_iter().map(String::from).collect(),
        fields,
        progress_percent: state.progress_percent(),
        error_summary: state.error_messages(),
    }
}

fn control_for(field: &FieldDescriptor, value: &str) -> Control {
    match field.field_type {
        FieldType::Dropdown => Control::Select {
            placeholder: format!("Select {}", field.label),
            options: field.options.clone(),
            selected: value.to_string(),
        },
        FieldType::Text | FieldType::Number | FieldType::Date | FieldType::Password => {
            Control::Input {
                input_type: field.field_type.as_str().to_string(),
                value: value.to_string(),
            }
        }
    }
}
