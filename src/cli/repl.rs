use std::io::{BufRead, Write};

use crate::form::error::FormError;
use crate::form::form_model::SubmitOutcome;
use crate::form::session::FormSession;
use crate::render::console::format_console_form;
use crate::render::view_model::render_form;
use crate::sink::submission::SubmissionSink;

const HELP: &str = "\
Commands:
  types                  list form types
  select <form type>     switch form type (clears the form)
  set <field> <value>    set a field value
  clear <field>          empty a field
  submit                 validate and submit
  show                   redraw the form
  help                   this text
  quit                   leave
";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Types,
    Select(String),
    Set { field: String, value: String },
    Submit,
    Show,
    Help,
    Quit,
}

/// Parse a line; blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>, FormError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let cmd = match word {
        "types" => ReplCommand::Types,
        "select" if !rest.is_empty() => ReplCommand::Select(rest.to_string()),
        "set" if !rest.is_empty() => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((f, v)) => (f, v.trim()),
                None => (rest, ""),
            };
            ReplCommand::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "clear" if !rest.is_empty() => ReplCommand::Set {
            field: rest.to_string(),
            value: String::new(),
        },
        "submit" => ReplCommand::Submit,
        "show" => ReplCommand::Show,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        _ => return Err(FormError::UnknownCommand(line.to_string())),
    };
    Ok(Some(cmd))
}

/// Drive `session` from `input` until EOF or `quit`.
///
/// Bad input is reported on `out` and the loop continues; only I/O
/// failures and sink errors end it early.
pub fn run_repl<S, R, W>(
    session: &mut FormSession<'_, S>,
    input: R,
    out: &mut W,
) -> Result<(), FormError>
where
    S: SubmissionSink,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", show(session))?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match cmd {
            ReplCommand::Types => {
                for name in session.schema().form_types() {
                    writeln!(out, "  {}", name)?;
                }
            }
            ReplCommand::Select(name) => {
                if !session.schema().contains(&name) {
                    writeln!(out, "Note: '{}' has no fields", name)?;
                }
                session.select_form_type(&name);
                write!(out, "{}", show(session))?;
            }
            ReplCommand::Set { field, value } => {
                match session.set_field_value(&field, &value) {
                    Ok(_) => writeln!(
                        out,
                        "{}% completed",
                        session.state().progress_percent()
                    )?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            ReplCommand::Submit => match session.submit()? {
                SubmitOutcome::Accepted(values) => {
                    writeln!(out, "Accepted {} value(s).", values.len())?;
                }
                SubmitOutcome::Rejected(errors) => {
                    for error in &errors {
                        writeln!(out, "  - {}", error)?;
                    }
                }
            },
            ReplCommand::Show => write!(out, "{}", show(session))?,
            ReplCommand::Help => write!(out, "{}", HELP)?,
            ReplCommand::Quit => break,
        }
    }

    Ok(())
}

fn show<S: SubmissionSink>(session: &FormSession<'_, S>) -> String {
    format_console_form(&render_form(session.schema(), session.state()))
}
