use crate::render::view_model::{Control, RenderedField, RenderedForm};

// ============================================================================
// HTML renderer — self-contained form page
// ============================================================================

/// Generate a self-contained HTML page for the form.
///
/// Layout:
/// - Header with the title and the form-type selector
/// - One `.form-field` block per field, with an inline `.error-text` marker
/// - Submit button, progress bar with rounded percentage
/// - `.validation-errors` list when a submission failed
pub fn generate_html_form(form: &RenderedForm) -> String {
    html_page(
        &format!("Dynamic Form \u{2014} {}", form.form_type),
        &render_app(form),
    )
}

/// Generate one HTML page holding several named forms.
///
/// Each form gets a `<section class="script">` headed by its name, so a
/// directory of script runs still produces a single document.
pub fn generate_html_forms(sections: &[(&str, RenderedForm)]) -> String {
    let mut body = String::new();
    for (name, form) in sections {
        body.push_str(&format!(
            "<section class=\"script\">\n<h2 class=\"script-name\">{}</h2>\n{}</section>\n",
            escape_html(name),
            render_app(form)
        ));
    }
    html_page("Dynamic Form \u{2014} Session Scripts", &body)
}

fn render_app(form: &RenderedForm) -> String {
    let mut type_options = String::new();
    for form_type in &form.form_types {
        let selected = if *form_type == form.form_type {
            " selected"
        } else {
            ""
        };
        type_options.push_str(&format!(
            "<option value=\"{value}\"{selected}>{value}</option>\n",
            value = escape_html(form_type),
            selected = selected,
        ));
    }

    let mut fields = String::new();
    for field in &form.fields {
        fields.push_str(&render_field(field));
    }

    let mut errors = String::new();
    if form.has_errors() {
        errors.push_str("<div class=\"validation-errors\">\n<ul>\n");
        for message in &form.error_summary {
            errors.push_str(&format!("<li>{}</li>\n", escape_html(message)));
        }
        errors.push_str("</ul>\n</div>\n");
    }

    format!(
        r##"<div class="App">
<header class="App-header">
<h1>Dynamic Form</h1>
<select name="formType">
{type_options}</select>
</header>
<form>
{fields}<div class="form-footer">
<button type="submit">Submit</button>
</div>
</form>
<div class="progress">
<progress value="{progress}" max="100"></progress>
<span>{progress}% completed</span>
</div>
{errors}</div>
"##,
        type_options = type_options,
        fields = fields,
        progress = form.progress_percent,
        errors = errors,
    )
}

fn html_page(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }}
.App-header {{ background: #282c34; color: white; padding: 20px 30px; }}
.App-header h1 {{ margin: 0 0 8px 0; font-size: 24px; }}
form {{ max-width: 600px; margin: 20px auto; background: white; border-radius: 6px; padding: 16px 20px; }}
.form-field {{ margin-bottom: 12px; }}
.form-field label {{ display: block; font-weight: bold; margin-bottom: 4px; }}
.error-text {{ color: #c62828; font-size: 13px; margin: 4px 0 0 0; }}
.progress {{ max-width: 600px; margin: 0 auto; }}
.validation-errors {{ max-width: 600px; margin: 12px auto; color: #c62828; }}
.script {{ margin-bottom: 32px; }}
.script-name {{ max-width: 600px; margin: 20px auto 0 auto; font-size: 18px; }}
</style>
</head>
<body>
{body}</body>
</html>
"##,
        title = escape_html(title),
        body = body,
    )
}

fn render_field(field: &RenderedField) -> String {
    let name = escape_html(&field.name);
    let required = if field.required { " required" } else { "" };

    let control = match &field.control {
        Control::Select {
            placeholder,
            options,
            selected,
        } => {
            let mut html = format!("<select name=\"{}\"{}>\n", name, required);
            html.push_str(&format!(
                "<option value=\"\">{}</option>\n",
                escape_html(placeholder)
            ));
            for option in options {
                let sel = if option == selected { " selected" } else { "" };
                html.push_str(&format!(
                    "<option value=\"{value}\"{sel}>{value}</option>\n",
                    value = escape_html(option),
                    sel = sel,
                ));
            }
            html.push_str("</select>\n");
            html
        }
        Control::Input { input_type, value } => format!(
            "<input type=\"{}\" name=\"{}\" value=\"{}\"{}>\n",
            escape_html(input_type),
            name,
            escape_html(value),
            required
        ),
    };

    let error = field
        .error
        .as_ref()
        .map(|e| format!("<p class=\"error-text\">{}</p>\n", escape_html(e)))
        .unwrap_or_default();

    format!(
        "<div class=\"form-field\">\n<label for=\"{name}\">{label}</label>\n{control}{error}</div>\n",
        name = name,
        label = escape_html(&field.label),
        control = control,
        error = error,
    )
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
