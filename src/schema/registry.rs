use std::sync::OnceLock;

use crate::schema::schema_model::{FieldDescriptor, FieldType, FormDefinition, FormSchema};

pub const USER_INFORMATION: &str = "User Information";
pub const ADDRESS_INFORMATION: &str = "Address Information";
pub const PAYMENT_INFORMATION: &str = "Payment Information";

/// Form type selected when a session starts.
pub const DEFAULT_FORM_TYPE: &str = USER_INFORMATION;

static BUILTIN: OnceLock<FormSchema> = OnceLock::new();

impl FormSchema {
    /// The process-wide schema served in place of a remote API.
    pub fn builtin() -> &'static FormSchema {
        BUILTIN.get_or_init(builtin_schema)
    }

    /// Fields of `form_type`, in display order.
    ///
    /// Unknown types have no fields rather than failing.
    pub fn lookup(&self, form_type: &str) -> &[FieldDescriptor] {
        self.forms
            .iter()
            .find(|f| f.name == form_type)
            .map(|f| f.fields.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, form_type: &str) -> bool {
        self.forms.iter().any(|f| f.name == form_type)
    }

    /// Form-type names in selector order.
    pub fn form_types(&self) -> Vec<&str> {
        self.forms.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn field(&self, form_type: &str, name: &str) -> Option<&FieldDescriptor> {
        self.lookup(form_type).iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self, form_type: &str) -> impl Iterator<Item = &FieldDescriptor> {
        self.lookup(form_type).iter().filter(|f| f.required)
    }
}

fn builtin_schema() -> FormSchema {
    FormSchema {
        forms: vec![
            FormDefinition {
                name: USER_INFORMATION.to_string(),
                fields: vec![
                    FieldDescriptor::new("firstName", FieldType::Text, "First Name", true),
                    FieldDescriptor::new("lastName", FieldType::Text, "Last Name", true),
                    FieldDescriptor::new("age", FieldType::Number, "Age", false),
                ],
            },
            FormDefinition {
                name: ADDRESS_INFORMATION.to_string(),
                fields: vec![
                    FieldDescriptor::new("street", FieldType::Text, "Street", true),
                    FieldDescriptor::new("city", FieldType::Text, "City", true),
                    FieldDescriptor::dropdown(
                        "state",
                        "State",
                        true,
                        &["California", "Texas", "New York"],
                    ),
                    FieldDescriptor::new("zipCode", FieldType::Text, "Zip Code", false),
                ],
            },
            FormDefinition {
                name: PAYMENT_INFORMATION.to_string(),
                fields: vec![
                    FieldDescriptor::new("cardNumber", FieldType::Text, "Card Number", true),
                    FieldDescriptor::new("expiryDate", FieldType::Date, "Expiry Date", true),
                    FieldDescriptor::new("cvv", FieldType::Password, "CVV", true),
                    FieldDescriptor::new("cardholderName", FieldType::Text, "Cardholder Name", true),
                ],
            },
        ],
    }
}
