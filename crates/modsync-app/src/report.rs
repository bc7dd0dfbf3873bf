use anyhow::Context;
use modsync_domain::policy::PolicyToggles;
use modsync_domain::report::Decision;
use modsync_types::{
    DecisionData, DecisionReport, ModInventory, ToolMeta, Verdict, SCHEMA_DECISION_V1,
};

/// Process exit code for a decision: 0 accept, 2 reject. 1 is reserved for tool errors.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Accept => 0,
        Verdict::Reject => 2,
    }
}

/// Wrap a decision in the serializable receipt.
pub fn build_report(
    decision: &Decision,
    inventory: &ModInventory,
    toggles: &PolicyToggles,
) -> DecisionReport {
    DecisionReport {
        schema: SCHEMA_DECISION_V1.to_string(),
        tool: ToolMeta {
            name: "modsync".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        verdict: decision.verdict,
        findings: decision.findings.clone(),
        data: DecisionData {
            mods_reported: u32::try_from(inventory.len()).unwrap_or(u32::MAX),
            vanilla: inventory.is_vanilla(),
            checks_enabled: toggles
                .enabled_check_ids()
                .into_iter()
                .map(str::to_string)
                .collect(),
            findings_total: u32::try_from(decision.findings.len()).unwrap_or(u32::MAX),
        },
    }
}

pub fn serialize_report(report: &DecisionReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize decision report")
}

/// Parse a peer inventory: `{"mods": [{"id": "...", "version": "1.2.3"}]}`.
pub fn parse_inventory_json(text: &str) -> anyhow::Result<ModInventory> {
    serde_json::from_str(text).context("parse inventory json")
}
