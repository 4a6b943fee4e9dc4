use crate::script::script_model::ScriptReport;

// ============================================================================
// Console reporter for script runs
// ============================================================================

/// Format script reports for terminal output.
///
/// ```text
/// ✓ PASS  user info happy path (6 steps, 1 accepted)
/// ✗ FAIL  address missing state (4 steps, 0 accepted)
///     [FAIL] Step 3: expect_progress — expected progress 100%, actual 67%
///
/// === Results: 1 passed, 1 failed (2 total) ===
/// ```
pub fn format_console_script_report(reports: &[ScriptReport]) -> String {
    let mut out = String::new();

    for report in reports {
        let marker = if report.passed {
            "\u{2713} PASS"
        } else {
            "\u{2717} FAIL"
        };

        out.push_str(&format!(
            "{}  {} ({} steps, {} accepted)\n",
            marker, report.script_name, report.steps_run, report.accepted
        ));

        for failure in report.failures() {
            out.push_str(&format!(
                "    [FAIL] Step {}: {} \u{2014} {}\n",
                failure.step_index,
                failure.action,
                failure.message.as_deref().unwrap_or("step failed")
            ));
        }
    }

    let passed = reports.iter().filter(|r| r.passed).count();
    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total) ===\n",
        passed,
        reports.len() - passed,
        reports.len()
    ));

    out
}
