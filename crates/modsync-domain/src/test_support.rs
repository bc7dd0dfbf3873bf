use crate::policy::{PolicyConfig, PolicyToggles};
use crate::rule::RuleEntry;
use modsync_types::{ModInventory, ModVersion, ReportedMod};

pub fn v(major: u32, minor: u32, patch: u32) -> ModVersion {
    ModVersion::new(major, minor, patch)
}

pub fn reported(id: &str, version: ModVersion) -> ReportedMod {
    ReportedMod::new(id, version)
}

pub fn inventory(mods: Vec<ReportedMod>) -> ModInventory {
    ModInventory::new(mods)
}

pub fn rule(id: &str, min: Option<ModVersion>, max: Option<ModVersion>) -> RuleEntry {
    RuleEntry::any_version(id).with_range(min, max)
}

/// Permissive toggles with only the given enforcement switches turned on.
pub fn enforcing(required: bool, banned: bool, approved: bool) -> PolicyToggles {
    PolicyToggles {
        enforce_required: required,
        enforce_banned: banned,
        enforce_approved: approved,
        ..PolicyToggles::permissive()
    }
}

pub fn policy(
    toggles: PolicyToggles,
    required: Vec<RuleEntry>,
    banned: Vec<RuleEntry>,
    approved: Vec<RuleEntry>,
) -> PolicyConfig {
    PolicyConfig::new(toggles, required, banned, approved)
}
