use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Stable schema identifier for decision receipts.
pub const SCHEMA_DECISION_V1: &str = "modsync.decision.v1";

/// One failed rule. `message` is the human-readable reason shown to operators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub check_id: String,
    pub code: String,
    pub message: String,

    /// The mod or rule identifier the finding is about, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted { Verdict::Accept } else { Verdict::Reject }
    }

    pub fn is_accept(self) -> bool {
        self == Verdict::Accept
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Modsync-specific summary payload for the receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct DecisionData {
    pub mods_reported: u32,
    pub vanilla: bool,

    /// Check IDs that were switched on for this decision.
    #[serde(default)]
    pub checks_enabled: Vec<String>,

    pub findings_total: u32,
}

/// Serialized outcome of one peer evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: DecisionData,
}

impl DecisionReport {
    /// Number of findings raised by `check_id`.
    pub fn count_for(&self, check_id: &str) -> usize {
        self.findings
            .iter()
            .filter(|f| f.check_id == check_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids;
    use serde_json::json;

    #[test]
    fn verdict_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Verdict::Reject).expect("serialize"),
            json!("reject")
        );
        assert_eq!(Verdict::from_accepted(true), Verdict::Accept);
        assert!(!Verdict::from_accepted(false).is_accept());
    }

    #[test]
    fn finding_omits_empty_optionals() {
        let f = Finding {
            check_id: ids::CHECK_PEER_VANILLA.to_string(),
            code: ids::CODE_VANILLA_DISALLOWED.to_string(),
            message: "vanilla players disallowed".to_string(),
            subject: None,
            help: None,
            data: JsonValue::Null,
        };
        let v = serde_json::to_value(&f).expect("serialize");
        let obj = v.as_object().expect("object");
        assert!(!obj.contains_key("subject"));
        assert!(!obj.contains_key("help"));
        assert!(!obj.contains_key("data"));
    }
}
