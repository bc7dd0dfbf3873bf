use crate::checks;
use crate::policy::PolicyConfig;
use crate::report::Decision;
use modsync_types::{Finding, ModInventory, Verdict};

/// Run every check against `inventory`.
///
/// Checks do not short-circuit: a rejection still collects the reasons of every
/// other failing rule.
pub fn evaluate(inventory: &ModInventory, policy: &PolicyConfig) -> Decision {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(inventory, policy, &mut findings);

    // Every failing check pushes at least one finding, so an empty list is the AND of all checks.
    let verdict = Verdict::from_accepted(findings.is_empty());

    Decision { verdict, findings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyToggles;
    use crate::rule::RuleEntry;
    use modsync_types::{ids, ModVersion, ReportedMod};

    fn inventory(mods: &[(&str, (u32, u32, u32))]) -> ModInventory {
        mods.iter()
            .map(|(id, (a, b, c))| ReportedMod::new(*id, ModVersion::new(*a, *b, *c)))
            .collect()
    }

    fn rule(line: &str) -> RuleEntry {
        RuleEntry::parse(line).expect("valid rule")
    }

    #[test]
    fn vanilla_peer_rejected_when_vanilla_disallowed() {
        let policy = PolicyConfig::new(
            PolicyToggles {
                allow_vanilla: false,
                allow_modded: true,
                ..PolicyToggles::permissive()
            },
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        let decision = evaluate(&ModInventory::vanilla(), &policy);
        assert_eq!(decision.verdict, Verdict::Reject);
        let reasons: Vec<&str> = decision.reasons().collect();
        assert_eq!(reasons, vec!["vanilla players disallowed"]);
    }

    #[test]
    fn required_mod_below_minimum_rejects() {
        let policy = PolicyConfig::new(
            PolicyToggles {
                enforce_required: true,
                ..PolicyToggles::permissive()
            },
            vec![rule("ModA | false | 1.0.0 | ")],
            Vec::new(),
            Vec::new(),
        );

        let decision = evaluate(&inventory(&[("ModA", (0, 9, 0))]), &policy);
        assert!(!decision.accepted());
        assert_eq!(decision.findings.len(), 1);
        assert!(decision.findings[0].message.contains("ModA"));
        assert_eq!(decision.findings[0].code, ids::CODE_MISSING_REQUIRED_MOD);
    }

    #[test]
    fn banned_range_only_rejects_inside_range() {
        let policy = PolicyConfig::new(
            PolicyToggles {
                enforce_banned: true,
                ..PolicyToggles::permissive()
            },
            Vec::new(),
            vec![rule("BadMod | false | | 2.0.0")],
            Vec::new(),
        );

        let inside = evaluate(&inventory(&[("BadMod", (1, 5, 0))]), &policy);
        assert!(!inside.accepted());
        assert!(inside.findings[0].message.contains("BadMod"));

        let outside = evaluate(&inventory(&[("BadMod", (3, 0, 0))]), &policy);
        assert!(outside.accepted());
        assert!(outside.findings.is_empty());
    }

    #[test]
    fn nothing_enforced_accepts_anything() {
        let policy = PolicyConfig::new(
            PolicyToggles::permissive(),
            vec![rule("ModA | false | 1.0.0 | ")],
            vec![rule("BadMod | false | | ")],
            Vec::new(),
        );

        for inv in [
            ModInventory::vanilla(),
            inventory(&[("BadMod", (1, 0, 0))]),
            inventory(&[("Whatever", (0, 0, 1)), ("ModA", (0, 1, 0))]),
        ] {
            let decision = evaluate(&inv, &policy);
            assert!(decision.accepted());
            assert_eq!(decision.reasons().count(), 0);
        }
    }

    #[test]
    fn evaluation_is_exhaustive_across_checks() {
        let policy = PolicyConfig::new(
            PolicyToggles {
                allow_vanilla: true,
                allow_modded: false,
                enforce_required: true,
                enforce_banned: true,
                enforce_approved: true,
            },
            vec![rule("Core | false | 1.0.0 | "), rule("Maps | false | | ")],
            vec![rule("Cheat | false | | ")],
            vec![rule("Ui | false | | ")],
        );

        let decision = evaluate(
            &inventory(&[("Core", (0, 5, 0)), ("Cheat", (1, 0, 0)), ("Ui", (2, 0, 0))]),
            &policy,
        );
        assert!(!decision.accepted());

        let codes: Vec<&str> = decision.findings.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![
                ids::CODE_MODDED_DISALLOWED,
                ids::CODE_MISSING_REQUIRED_MOD,
                ids::CODE_MISSING_REQUIRED_MOD,
                ids::CODE_BANNED_MOD,
                ids::CODE_UNAPPROVED_MOD,
                ids::CODE_UNAPPROVED_MOD,
            ]
        );
    }
}
