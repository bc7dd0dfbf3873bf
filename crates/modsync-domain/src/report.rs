use modsync_types::{Finding, Verdict};

/// Result of evaluating one inventory.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub verdict: Verdict,
    /// One entry per failed rule, in check order.
    pub findings: Vec<Finding>,
}

impl Decision {
    pub fn accepted(&self) -> bool {
        self.verdict.is_accept()
    }

    /// Human-readable reason for every failed rule.
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.findings.iter().map(|f| f.message.as_str())
    }
}
