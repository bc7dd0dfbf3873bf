use modsync_types::{DecisionReport, Verdict};

pub fn render_markdown(report: &DecisionReport) -> String {
    let mut out = String::new();

    out.push_str("# Modsync decision\n\n");
    let verdict = match report.verdict {
        Verdict::Accept => "ACCEPT",
        Verdict::Reject => "REJECT",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Mods reported: {}{}\n- Findings: {}\n",
        verdict,
        report.data.mods_reported,
        if report.data.vanilla { " (vanilla)" } else { "" },
        report.data.findings_total
    ));

    if report.data.checks_enabled.is_empty() {
        out.push_str("- Checks enabled: none\n\n");
    } else {
        let checks: Vec<String> = report
            .data
            .checks_enabled
            .iter()
            .map(|c| format!("`{c}`"))
            .collect();
        out.push_str(&format!("- Checks enabled: {}\n\n", checks.join(", ")));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        out.push_str(&format!("- `{}` / `{}`: {}\n", f.check_id, f.code, f.message));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
