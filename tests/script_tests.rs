use std::collections::BTreeMap;

use dynamic_form::form::session::FormSession;
use dynamic_form::script::report::format_console_script_report;
use dynamic_form::script::runner::{ScriptRunner, load_script, load_scripts};
use dynamic_form::script::script_model::{ScriptStep, SessionScript};
use dynamic_form::schema::registry::{ADDRESS_INFORMATION, USER_INFORMATION};
use dynamic_form::schema::schema_model::FormSchema;
use dynamic_form::sink::submission::RecordingSink;

const HAPPY_PATH: &str = r#"
name: user info happy path
form_type: User Information
steps:
  - action: set
    field: firstName
    value: Ann
  - action: expect_progress
    percent: 50
  - action: submit
  - action: expect_errors
    messages: ["Last Name is required."]
  - action: set
    field: lastName
    value: Lee
  - action: expect_progress
    percent: 100
  - action: submit
  - action: expect_accepted
  - action: expect_errors
    messages: []
"#;

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("dynamic-form-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

// ============================================================================
// Script model
// ============================================================================

#[test]
fn script_parses_from_yaml() {
    let script: SessionScript = serde_yaml::from_str(HAPPY_PATH).unwrap();
    assert_eq!(script.name, "user info happy path");
    assert_eq!(script.form_type.as_deref(), Some(USER_INFORMATION));
    assert_eq!(script.steps.len(), 9);
    assert_eq!(
        script.steps[0],
        ScriptStep::Set {
            field: "firstName".into(),
            value: "Ann".into(),
        }
    );
    assert_eq!(script.steps[2], ScriptStep::Submit);
    assert_eq!(script.steps[7], ScriptStep::ExpectAccepted);
}

#[test]
fn script_without_form_type_keeps_session_selection() {
    let script: SessionScript =
        serde_yaml::from_str("name: empty\nsteps:\n  - action: submit\n").unwrap();
    assert!(script.form_type.is_none());

    let mut session = FormSession::builtin();
    session.select_form_type(ADDRESS_INFORMATION);
    let report = ScriptRunner::run(&script, &mut session);
    assert_eq!(report.final_state.form_type, ADDRESS_INFORMATION);
    assert_eq!(report.final_state.errors.len(), 3);
}

// ============================================================================
// Runner
// ============================================================================

#[test]
fn happy_path_passes() {
    let script: SessionScript = serde_yaml::from_str(HAPPY_PATH).unwrap();
    let mut session =
        FormSession::with_sink(FormSchema::builtin(), ADDRESS_INFORMATION, RecordingSink::new());

    let report = ScriptRunner::run(&script, &mut session);

    assert!(report.passed, "failures: {:?}", report.failures().collect::<Vec<_>>());
    assert_eq!(report.steps_run, 9);
    assert_eq!(report.accepted, 1);
    assert_eq!(report.final_state.progress_percent(), 100);
    assert_eq!(session.sink().submissions.len(), 1);
}

#[test]
fn failed_expectations_are_reported_and_run_continues() {
    let script = SessionScript {
        name: "address".into(),
        form_type: Some(ADDRESS_INFORMATION.into()),
        steps: vec![
            ScriptStep::Set {
                field: "state".into(),
                value: "Oregon".into(),
            },
            ScriptStep::ExpectProgress { percent: 100 },
            ScriptStep::Submit,
            ScriptStep::ExpectAccepted,
            ScriptStep::ExpectErrors {
                messages: vec![
                    "Street is required.".into(),
                    "City is required.".into(),
                    "State is required.".into(),
                ],
            },
        ],
    };
    let mut session = FormSession::builtin();
    let report = ScriptRunner::run(&script, &mut session);

    assert!(!report.passed);
    assert_eq!(report.steps_run, 5);
    let failed: Vec<usize> = report.failures().map(|r| r.step_index).collect();
    assert_eq!(failed, vec![0, 1, 3]);

    let msg = report.step_results[0].message.as_deref().unwrap();
    assert!(msg.contains("Oregon"), "{}", msg);
    let msg = report.step_results[1].message.as_deref().unwrap();
    assert_eq!(msg, "expected progress 100%, actual 0%");
    let msg = report.step_results[3].message.as_deref().unwrap();
    assert!(msg.starts_with("submission was rejected"), "{}", msg);
    assert!(report.step_results[4].passed);
    assert_eq!(report.accepted, 0);
}

#[test]
fn misspelled_field_fails_the_step() {
    let script = SessionScript {
        name: "typo".into(),
        form_type: Some(USER_INFORMATION.into()),
        steps: vec![
            ScriptStep::Set {
                field: "firstname".into(),
                value: "Ann".into(),
            },
            ScriptStep::ExpectProgress { percent: 0 },
        ],
    };
    let report = ScriptRunner::run(&script, &mut FormSession::builtin());

    assert!(!report.passed);
    assert!(!report.step_results[0].passed);
    assert_eq!(
        report.step_results[0].message.as_deref(),
        Some("'firstname' is not a field of User Information")
    );
    assert!(report.step_results[1].passed);
    assert!(report.final_state.values.is_empty());
}

#[test]
fn fill_sets_all_values() {
    let mut values = BTreeMap::new();
    values.insert("street".to_string(), "1 Main St".to_string());
    values.insert("city".to_string(), "Austin".to_string());
    values.insert("state".to_string(), "Texas".to_string());

    let script = SessionScript {
        name: "fill".into(),
        form_type: Some(ADDRESS_INFORMATION.into()),
        steps: vec![
            ScriptStep::Fill { values },
            ScriptStep::ExpectProgress { percent: 100 },
            ScriptStep::Submit,
            ScriptStep::ExpectAccepted,
        ],
    };
    let mut session = FormSession::builtin();
    let report = ScriptRunner::run(&script, &mut session);
    assert!(report.passed);
    assert_eq!(report.accepted, 1);
}

#[test]
fn expect_accepted_without_submit_fails() {
    let script = SessionScript {
        name: "no submit".into(),
        form_type: None,
        steps: vec![ScriptStep::ExpectAccepted],
    };
    let report = ScriptRunner::run(&script, &mut FormSession::builtin());
    assert!(!report.passed);
    assert_eq!(
        report.step_results[0].message.as_deref(),
        Some("no submission to check")
    );
}

#[test]
fn select_step_resets_the_form() {
    let script = SessionScript {
        name: "switch".into(),
        form_type: None,
        steps: vec![
            ScriptStep::Submit,
            ScriptStep::Select {
                form_type: ADDRESS_INFORMATION.into(),
            },
            ScriptStep::ExpectErrors { messages: vec![] },
            ScriptStep::ExpectProgress { percent: 0 },
        ],
    };
    let report = ScriptRunner::run(&script, &mut FormSession::builtin());
    assert!(report.passed);
    assert_eq!(report.final_state.form_type, ADDRESS_INFORMATION);
}

// ============================================================================
// Loading and reporting
// ============================================================================

#[test]
fn load_scripts_from_directory_sorted_by_name() {
    let dir = temp_dir("scripts");
    std::fs::write(dir.join("b.yaml"), HAPPY_PATH).unwrap();
    std::fs::write(dir.join("a.yml"), "name: another\nsteps: []\n").unwrap();
    std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let scripts = load_scripts(dir.to_str().unwrap()).unwrap();
    let names: Vec<&str> = scripts.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["another", "user info happy path"]);

    let single = load_script(&dir.join("b.yaml")).unwrap();
    assert_eq!(single.steps.len(), 9);
}

#[test]
fn load_script_reports_parse_errors() {
    let dir = temp_dir("bad-script");
    let path = dir.join("bad.yaml");
    std::fs::write(&path, "name: bad\nsteps:\n  - action: dance\n").unwrap();

    let err = load_script(&path).unwrap_err();
    assert!(err.to_string().starts_with("Invalid script"), "{}", err);
    assert!(load_scripts("/definitely/not/here.yaml").is_err());
}

#[test]
fn console_script_report_lists_failures() {
    let passing: SessionScript = serde_yaml::from_str(HAPPY_PATH).unwrap();
    let failing = SessionScript {
        name: "broken".into(),
        form_type: None,
        steps: vec![ScriptStep::ExpectProgress { percent: 100 }],
    };
    let reports = vec![
        ScriptRunner::run(&passing, &mut FormSession::builtin()),
        ScriptRunner::run(&failing, &mut FormSession::builtin()),
    ];

    let out = format_console_script_report(&reports);
    assert!(out.contains("\u{2713} PASS  user info happy path (9 steps, 1 accepted)"));
    assert!(out.contains("\u{2717} FAIL  broken (1 steps, 0 accepted)"));
    assert!(out.contains("[FAIL] Step 0: expect_progress"));
    assert!(out.contains("=== Results: 1 passed, 1 failed (2 total) ==="));
}
