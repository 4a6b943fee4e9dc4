use std::path::Path;

use crate::form::error::FormError;
use crate::form::form_model::SubmitOutcome;
use crate::form::session::FormSession;
use crate::script::script_model::{ScriptReport, ScriptStep, SessionScript, StepResult};
use crate::sink::submission::SubmissionSink;

/// Replays a `SessionScript` against a `FormSession`.
pub struct ScriptRunner;

impl ScriptRunner {
    /// Run every step in order.
    ///
    /// A failing step is recorded and the run continues, so one report
    /// shows every broken expectation.
    pub fn run<S: SubmissionSink>(
        script: &SessionScript,
        session: &mut FormSession<'_, S>,
    ) -> ScriptReport {
        if let Some(ref form_type) = script.form_type {
            session.select_form_type(form_type);
        }

        let mut last_submit: Option<SubmitOutcome> = None;
        let mut accepted = 0;
        let mut step_results = Vec::with_capacity(script.steps.len());

        for (i, step) in script.steps.iter().enumerate() {
            let outcome = Self::execute_step(step, session, &mut last_submit);
            if matches!(step, ScriptStep::Submit)
                && outcome.is_ok()
                && last_submit.as_ref().is_some_and(SubmitOutcome::is_accepted)
            {
                accepted += 1;
            }

            step_results.push(StepResult {
                step_index: i,
                action: step.name().to_string(),
                passed: outcome.is_ok(),
                message: outcome.err(),
            });
        }

        ScriptReport {
            script_name: script.name.clone(),
            passed: step_results.iter().all(|r| r.passed),
            steps_run: step_results.len(),
            step_results,
            accepted,
            final_state: session.state().clone(),
        }
    }

    fn execute_step<S: SubmissionSink>(
        step: &ScriptStep,
        session: &mut FormSession<'_, S>,
        last_submit: &mut Option<SubmitOutcome>,
    ) -> Result<(), String> {
        match step {
            ScriptStep::Select { form_type } => {
                session.select_form_type(form_type);
                *last_submit = None;
                Ok(())
            }

            ScriptStep::Set { field, value } => session
                .set_field_value(field, value)
                .map(|_| ())
                .map_err(|e| e.to_string()),

            ScriptStep::Fill { values } => {
                for (field, value) in values {
                    session
                        .set_field_value(field, value)
                        .map_err(|e| e.to_string())?;
                }
                Ok(())
            }

            ScriptStep::Submit => {
                let outcome = session.submit().map_err(|e| e.to_string())?;
                *last_submit = Some(outcome);
                Ok(())
            }

            ScriptStep::ExpectProgress { percent } => {
                let actual = session.state().progress_percent();
                if actual == *percent {
                    Ok(())
                } else {
                    Err(format!("expected progress {}%, actual {}%", percent, actual))
                }
            }

            ScriptStep::ExpectErrors { messages } => {
                let actual = session.state().error_messages();
                if actual == *messages {
                    Ok(())
                } else {
                    Err(format!("expected errors {:?}, actual {:?}", messages, actual))
                }
            }

            ScriptStep::ExpectAccepted => match last_submit {
                Some(SubmitOutcome::Accepted(_)) => Ok(()),
                Some(SubmitOutcome::Rejected(errors)) => Err(format!(
                    "submission was rejected: {}",
                    errors
                        .iter()
                        .map(|e| e.message())
                        .collect::<Vec<_>>()
                        .join(" ")
                )),
                None => Err("no submission to check".to_string()),
            },
        }
    }
}

/// Load one script file.
pub fn load_script(path: &Path) -> Result<SessionScript, FormError> {
    let content = std::fs::read_to_string(path).map_err(|e| FormError::ScriptRead {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| FormError::ScriptParse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load a single YAML script, or every `.yaml`/`.yml` script in a directory.
pub fn load_scripts(path: &str) -> Result<Vec<SessionScript>, FormError> {
    let root = Path::new(path);
    let metadata = std::fs::metadata(root).map_err(|e| FormError::ScriptRead {
        path: path.to_string(),
        source: e,
    })?;

    if !metadata.is_dir() {
        return Ok(vec![load_script(root)?]);
    }

    let entries = std::fs::read_dir(root).map_err(|e| FormError::ScriptRead {
        path: path.to_string(),
        source: e,
    })?;

    let mut scripts = Vec::new();
    for entry in entries {
        let p = entry?.path();
        if p.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            scripts.push(load_script(&p)?);
        }
    }
    // Sort by name for deterministic order
    scripts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(scripts)
}
