use dynamic_form::schema::registry::{
    ADDRESS_INFORMATION, DEFAULT_FORM_TYPE, PAYMENT_INFORMATION, USER_INFORMATION,
};
use dynamic_form::schema::schema_model::{FieldDescriptor, FieldType, FormSchema};

// ============================================================================
// Builtin schema
// ============================================================================

#[test]
fn builtin_lists_form_types_in_selector_order() {
    let schema = FormSchema::builtin();
    assert_eq!(
        schema.form_types(),
        vec![USER_INFORMATION, ADDRESS_INFORMATION, PAYMENT_INFORMATION]
    );
    assert_eq!(DEFAULT_FORM_TYPE, "User Information");
}

#[test]
fn user_information_fields() {
    let fields = FormSchema::builtin().lookup(USER_INFORMATION);
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["firstName", "lastName", "age"]);
    assert!(fields[0].required);
    assert!(fields[1].required);
    assert!(!fields[2].required);
    assert_eq!(fields[2].field_type, FieldType::Number);
    assert_eq!(fields[1].label, "Last Name");
}

#[test]
fn address_state_is_a_required_dropdown() {
    let state = FormSchema::builtin()
        .field(ADDRESS_INFORMATION, "state")
        .expect("state field");
    assert_eq!(state.field_type, FieldType::Dropdown);
    assert!(state.required);
    assert_eq!(state.options, vec!["California", "Texas", "New York"]);
}

#[test]
fn payment_fields_are_all_required() {
    let schema = FormSchema::builtin();
    assert_eq!(schema.required_fields(PAYMENT_INFORMATION).count(), 4);
    assert_eq!(
        schema.field(PAYMENT_INFORMATION, "cvv").map(|f| f.field_type),
        Some(FieldType::Password)
    );
    assert_eq!(
        schema.field(PAYMENT_INFORMATION, "expiryDate").map(|f| f.field_type),
        Some(FieldType::Date)
    );
}

#[test]
fn unknown_form_type_has_no_fields() {
    let schema = FormSchema::builtin();
    assert!(schema.lookup("Shipping Information").is_empty());
    assert!(!schema.contains("Shipping Information"));
    assert_eq!(schema.required_fields("Shipping Information").count(), 0);
    assert!(schema.field("Shipping Information", "firstName").is_none());
}

#[test]
fn builtin_is_a_single_instance() {
    assert!(std::ptr::eq(FormSchema::builtin(), FormSchema::builtin()));
}

// ============================================================================
// Field descriptors
// ============================================================================

#[test]
fn dropdown_accepts_only_options_or_placeholder() {
    let field = FieldDescriptor::dropdown("state", "State", true, &["California", "Texas"]);
    assert!(field.accepts("Texas"));
    assert!(field.accepts(""));
    assert!(!field.accepts("texas"));
    assert!(!field.accepts("Oregon"));
}

#[test]
fn number_fields_accept_only_finite_numbers() {
    let field = FieldDescriptor::new("age", FieldType::Number, "Age", false);
    assert!(field.accepts("41"));
    assert!(field.accepts("-3.5"));
    assert!(field.accepts(""));
    assert!(!field.accepts("not a number"));
    assert!(!field.accepts("NaN"));
    assert!(!field.accepts("inf"));
    assert_eq!(field.expected_format(), "a number");
}

#[test]
fn date_fields_accept_only_iso_dates() {
    let field = FieldDescriptor::new("expiryDate", FieldType::Date, "Expiry Date", true);
    assert!(field.accepts("2027-09-30"));
    assert!(field.accepts("2028-02-29"));
    assert!(field.accepts(""));
    assert!(!field.accepts("2027-9-30"));
    assert!(!field.accepts("2027-02-30"));
    assert!(!field.accepts("09/30/2027"));
    assert!(!field.accepts("tomorrow"));
    assert_eq!(field.expected_format(), "a date as YYYY-MM-DD");
}

#[test]
fn text_fields_accept_anything() {
    let field = FieldDescriptor::new("firstName", FieldType::Text, "First Name", true);
    assert!(field.accepts("abc 123 <>"));
    assert!(field.accepts(""));
    let secret = FieldDescriptor::new("cvv", FieldType::Password, "CVV", true);
    assert!(secret.accepts("12a"));
}

#[test]
fn descriptor_json_uses_api_shape() {
    let json = r#"{ "name": "state", "type": "dropdown", "label": "State",
                   "options": ["California", "Texas", "New York"], "required": true }"#;
    let field: FieldDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(
        field,
        FieldDescriptor::dropdown("state", "State", true, &["California", "Texas", "New York"])
    );

    let text = FieldDescriptor::new("age", FieldType::Number, "Age", false);
    let out = serde_json::to_value(&text).unwrap();
    assert_eq!(out["type"], "number");
    assert!(out.get("options").is_none(), "options omitted for non-dropdowns");
}
