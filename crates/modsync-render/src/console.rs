use modsync_types::DecisionReport;

/// One line per finding plus a closing verdict line, for terminals and log files.
///
/// Format: `[check_id:code] subject: message`, then `verdict: accept|reject`.
pub fn render_console(report: &DecisionReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let line = match &f.subject {
            Some(subject) => format!("[{}:{}] {}: {}", f.check_id, f.code, subject, f.message),
            None => format!("[{}:{}] {}", f.check_id, f.code, f.message),
        };
        // Keep each finding on a single line.
        out.push(line.replace(['\r', '\n'], " "));
    }

    let verdict = if report.verdict.is_accept() { "accept" } else { "reject" };
    out.push(format!(
        "verdict: {} ({} finding(s), {} mod(s) reported)",
        verdict, report.data.findings_total, report.data.mods_reported
    ));

    out
}
