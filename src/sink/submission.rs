use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::form::error::FormError;

// ============================================================================
// SubmissionSink trait — where accepted form data goes
// ============================================================================

/// Receives the values of every accepted submission.
///
/// The form core stops at producing a validated record; a sink decides
/// whether it is displayed, logged, or dropped.
pub trait SubmissionSink {
    fn accept(&mut self, form_type: &str, values: &BTreeMap<String, String>)
        -> Result<(), FormError>;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn accept(
        &mut self,
        form_type: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<(), FormError> {
        (**self).accept(form_type, values)
    }
}

/// An accepted submission, as recorded or emitted by sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub form_type: String,
    pub values: BTreeMap<String, String>,
}

/// Discards submissions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SubmissionSink for NullSink {
    fn accept(&mut self, _: &str, _: &BTreeMap<String, String>) -> Result<(), FormError> {
        Ok(())
    }
}

/// Keeps every submission in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub submissions: Vec<Submission>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Submission> {
        self.submissions.last()
    }
}

impl SubmissionSink for RecordingSink {
    fn accept(
        &mut self,
        form_type: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<(), FormError> {
        self.submissions.push(Submission {
            form_type: form_type.to_string(),
            values: values.clone(),
        });
        Ok(())
    }
}

// ============================================================================
// Console table sink
// ============================================================================

/// Prints a success notice followed by a name/value table.
pub struct ConsoleTableSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleTableSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleTableSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> SubmissionSink for ConsoleTableSink<W> {
    fn accept(
        &mut self,
        form_type: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<(), FormError> {
        writeln!(self.out, "Form submitted successfully! ({})", form_type)?;
        write!(self.out, "{}", format_value_table(values))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Format values as a two-column table.
///
/// ```text
/// ┌───────────┬───────┐
/// │ field     │ value │
/// ├───────────┼───────┤
/// │ firstName │ Ann   │
/// └───────────┴───────┘
/// ```
pub fn format_value_table(values: &BTreeMap<String, String>) -> String {
    let name_width = values
        .keys()
        .map(|k| k.chars().count())
        .chain(std::iter::once("field".len()))
        .max()
        .unwrap_or(0);
    let value_width = values
        .values()
        .map(|v| v.chars().count())
        .chain(std::iter::once("value".len()))
        .max()
        .unwrap_or(0);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}\n",
            left,
            "\u{2500}".repeat(name_width + 2),
            mid,
            "\u{2500}".repeat(value_width + 2),
            right
        )
    };

    let mut out = String::new();
    out.push_str(&rule("\u{250c}", "\u{252c}", "\u{2510}"));
    out.push_str(&format!(
        "\u{2502} {:<nw$} \u{2502} {:<vw$} \u{2502}\n",
        "field",
        "value",
        nw = name_width,
        vw = value_width
    ));
    out.push_str(&rule("\u{251c}", "\u{253c}", "\u{2524}"));
    for (name, value) in values {
        out.push_str(&format!(
            "\u{2502} {:<nw$} \u{2502} {:<vw$} \u{2502}\n",
            name,
            value,
            nw = name_width,
            vw = value_width
        ));
    }
    out.push_str(&rule("\u{2514}", "\u{2534}", "\u{2518}"));
    out
}

// ============================================================================
// JSON lines sink
// ============================================================================

/// Writes one JSON object per submission.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SubmissionSink for JsonSink<W> {
    fn accept(
        &mut self,
        form_type: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<(), FormError> {
        let submission = Submission {
            form_type: form_type.to_string(),
            values: values.clone(),
        };
        let json = serde_json::to_string(&submission).map_err(|e| FormError::Json {
            context: "submission".to_string(),
            source: e,
        })?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()?;
        Ok(())
    }
}
