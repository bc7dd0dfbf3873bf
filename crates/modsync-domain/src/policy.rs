use crate::rule::RuleEntry;
use modsync_types::{ids, ReportedMod};

/// The five independent switches that shape a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyToggles {
    pub allow_vanilla: bool,
    pub allow_modded: bool,
    pub enforce_required: bool,
    pub enforce_banned: bool,
    pub enforce_approved: bool,
}

impl Default for PolicyToggles {
    /// Modded players in, vanilla players out, no list enforcement.
    fn default() -> Self {
        Self {
            allow_vanilla: false,
            allow_modded: true,
            enforce_required: false,
            enforce_banned: false,
            enforce_approved: false,
        }
    }
}

impl PolicyToggles {
    /// Everyone in, nothing enforced.
    pub fn permissive() -> Self {
        Self {
            allow_vanilla: true,
            allow_modded: true,
            enforce_required: false,
            enforce_banned: false,
            enforce_approved: false,
        }
    }

    /// Check IDs whose rule can fail under these toggles, in evaluation order.
    pub fn enabled_check_ids(&self) -> Vec<&'static str> {
        [
            (!self.allow_vanilla, ids::CHECK_PEER_VANILLA),
            (!self.allow_modded, ids::CHECK_PEER_MODDED),
            (self.enforce_required, ids::CHECK_MODS_REQUIRED),
            (self.enforce_banned, ids::CHECK_MODS_BANNED),
            (self.enforce_approved, ids::CHECK_MODS_APPROVED),
        ]
        .into_iter()
        .filter_map(|(on, id)| on.then_some(id))
        .collect()
    }
}

/// Toggles plus the three parsed rule lists.
///
/// Built once at startup and only read afterwards; evaluations share it by reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    pub toggles: PolicyToggles,
    pub required: Vec<RuleEntry>,
    pub banned: Vec<RuleEntry>,
    pub approved: Vec<RuleEntry>,
}

impl PolicyConfig {
    pub fn new(
        toggles: PolicyToggles,
        required: Vec<RuleEntry>,
        banned: Vec<RuleEntry>,
        approved: Vec<RuleEntry>,
    ) -> Self {
        Self {
            toggles,
            required,
            banned,
            approved,
        }
    }

    /// Approved-or-required: an entry in either list vouches for the mod.
    pub fn is_approved(&self, reported: &ReportedMod) -> bool {
        self.approved
            .iter()
            .chain(&self.required)
            .any(|e| e.matches(reported))
    }
}
