use crate::render::view_model::{Control, RenderedForm};

// ============================================================================
// Console renderer — plain-text form for the terminal
// ============================================================================

const PROGRESS_BAR_WIDTH: usize = 20;

/// Format a rendered form for terminal output.
///
/// Produces output like:
/// ```text
/// === Dynamic Form: User Information ===
/// Form types: [User Information] | Address Information | Payment Information
///
///   First Name *   text      Ann
///   Last Name *    text      ______
///                  ! This field is required
///   Age            number    ______
///
/// Progress: [##########----------] 50% completed
///
/// Errors:
///   - Last Name is required.
/// ```
pub fn format_console_form(form: &RenderedForm) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Dynamic Form: {} ===\n", form.form_type));

    let selector: Vec<String> = form
        .form_types
        .iter()
        .map(|t| {
            if *t == form.form_type {
                format!("[{}]", t)
            } else {
                t.clone()
            }
        })
        .collect();
    out.push_str(&format!("Form types: {}\n\n", selector.join(" | ")));

    if form.fields.is_empty() {
        out.push_str("  (no fields)\n");
    }

    let label_width = form
        .fields
        .iter()
        .map(|f| display_label(&f.label, f.required).chars().count())
        .max()
        .unwrap_or(0);

    for field in &form.fields {
        let label = display_label(&field.label, field.required);
        let (kind, shown) = match &field.control {
            Control::Select {
                placeholder,
                options,
                selected,
            } => {
                let shown = if selected.is_empty() {
                    format!("({}) {}", placeholder, options.join(" | "))
                } else {
                    selected.clone()
                };
                ("select", shown)
            }
            Control::Input { input_type, value } => {
                let shown = if value.is_empty() {
                    "______".to_string()
                } else if input_type == "password" {
                    "*".repeat(value.chars().count())
                } else {
                    value.clone()
                };
                (input_type.as_str(), shown)
            }
        };

        out.push_str(&format!(
            "  {:<lw$}  {:<8}  {}\n",
            label,
            kind,
            shown,
            lw = label_width
        ));

        if let Some(ref error) = field.error {
            out.push_str(&format!("  {:<lw$}  ! {}\n", "", error, lw = label_width));
        }
    }

    let filled =
        (form.progress_percent as usize * PROGRESS_BAR_WIDTH / 100).min(PROGRESS_BAR_WIDTH);
    out.push_str(&format!(
        "\nProgress: [{}{}] {}% completed\n",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled),
        form.progress_percent
    ));

    if form.has_errors() {
        out.push_str("\nErrors:\n");
        for message in &form.error_summary {
            out.push_str(&format!("  - {}\n", message));
        }
    }

    out
}

fn display_label(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}
