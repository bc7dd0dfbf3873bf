//! Render use case: pick an output format for a decision report.

use anyhow::Context;
use modsync_types::DecisionReport;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            other => anyhow::bail!("unknown output format: {other} (expected text, json, or md)"),
        }
    }
}

pub fn render_report(report: &DecisionReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = modsync_render::render_console(report).join("\n");
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Json => {
            let bytes = crate::report::serialize_report(report)?;
            let mut out = String::from_utf8(bytes).context("decision report is not utf-8")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Markdown => Ok(modsync_render::render_markdown(report)),
    }
}
