use std::io::Write;

use crate::cli::config::Resolved;
use crate::cli::repl::run_repl;
use crate::form::form_model::FormState;
use crate::form::session::FormSession;
use crate::render::console::format_console_form;
use crate::render::html::{generate_html_form, generate_html_forms};
use crate::render::view_model::{RenderedForm, render_form};
use crate::schema::schema_model::FormSchema;
use crate::script::report::format_console_script_report;
use crate::script::runner::{ScriptRunner, load_scripts};
use crate::sink::submission::{ConsoleTableSink, JsonSink, NullSink, SubmissionSink};
use crate::trace::logger::TraceLogger;

// ============================================================================
// types subcommand
// ============================================================================

pub fn cmd_types() -> Result<(), Box<dyn std::error::Error>> {
    let schema = FormSchema::builtin();
    for form in &schema.forms {
        println!(
            "{} ({} fields, {} required)",
            form.name,
            form.fields.len(),
            form.required_count()
        );
    }
    Ok(())
}

// ============================================================================
// render subcommand
// ============================================================================

pub fn cmd_render(
    resolved: &Resolved,
    output: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = FormSchema::builtin();

    if verbose > 0 {
        eprintln!("Rendering '{}' as {}...", resolved.form_type, resolved.format);
    }
    if !schema.contains(&resolved.form_type) {
        eprintln!("Warning: unknown form type '{}', rendering no fields", resolved.form_type);
    }

    let state = FormState::new(&resolved.form_type);
    let rendered = render_form(schema, &state);
    let content = format_form(&rendered, &resolved.format)?;
    write_or_print(output, &content)
}

// ============================================================================
// run subcommand
// ============================================================================

/// Run session scripts and return whether all passed.
pub fn cmd_run(
    script_path: &str,
    resolved: &Resolved,
    output: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let scripts = load_scripts(script_path)?;

    if scripts.is_empty() {
        eprintln!("No session scripts found at: {}", script_path);
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!("Running {} session scripts...", scripts.len());
    }

    let schema = FormSchema::builtin();
    let mut reports = Vec::new();
    for script in &scripts {
        if verbose > 0 {
            eprintln!("  Running: {}", script.name);
        }
        let mut session = FormSession::with_sink(schema, &resolved.form_type, NullSink)
            .with_tracer(build_tracer(resolved.trace_path.as_deref()));
        reports.push(ScriptRunner::run(script, &mut session));
    }

    let all_passed = reports.iter().all(|r| r.passed);

    let content = match resolved.format.as_str() {
        "json" => serde_json::to_string_pretty(&reports)?,
        "html" => {
            let sections: Vec<(&str, RenderedForm)> = reports
                .iter()
                .map(|r| (r.script_name.as_str(), render_form(schema, &r.final_state)))
                .collect();
            generate_html_forms(&sections)
        }
        _ => {
            let mut out = format_console_script_report(&reports);
            if verbose > 0 {
                for report in &reports {
                    out.push('\n');
                    out.push_str(&format_console_form(&render_form(
                        schema,
                        &report.final_state,
                    )));
                }
            }
            out
        }
    };

    write_or_print(output, &content)?;
    Ok(all_passed)
}

// ============================================================================
// interactive subcommand
// ============================================================================

pub fn cmd_interactive(resolved: &Resolved, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    if verbose > 0 {
        eprintln!(
            "Starting session on '{}' (sink: {})",
            resolved.form_type, resolved.sink
        );
    }

    let mut session =
        FormSession::with_sink(FormSchema::builtin(), &resolved.form_type, build_sink(&resolved.sink))
            .with_tracer(build_tracer(resolved.trace_path.as_deref()));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_repl(&mut session, stdin.lock(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Format a rendered form: `html`, `json`, anything else is console text.
pub fn format_form(form: &RenderedForm, format: &str) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        "html" => generate_html_form(form),
        "json" => form.to_json()?,
        _ => format_console_form(form),
    })
}

/// Sink by name: `json`, `none`, anything else prints a table.
pub fn build_sink(name: &str) -> Box<dyn SubmissionSink> {
    match name {
        "json" => Box::new(JsonSink::new(std::io::stdout())),
        "none" => Box::new(NullSink),
        _ => Box::new(ConsoleTableSink::stdout()),
    }
}

fn build_tracer(path: Option<&str>) -> TraceLogger {
    match path {
        Some(p) => TraceLogger::new(p),
        None => TraceLogger::disabled(),
    }
}

fn write_or_print(output: Option<&str>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => print!("{}", content),
    }
    Ok(())
}
