use modsync_domain::policy::PolicyToggles;

pub const DEFAULT_PROFILE: &str = "default";

/// Preset profiles are opinionated starting points.
///
/// Keep these small and readable. Anything specific belongs in `modsync.toml`.
pub fn preset(profile: &str) -> Option<PolicyToggles> {
    match profile {
        "default" => Some(PolicyToggles::default()),
        "open" => Some(PolicyToggles::permissive()),
        "strict" => Some(strict_profile()),
        _ => None,
    }
}

pub fn known_profiles() -> &'static [&'static str] {
    &["default", "open", "strict"]
}

fn strict_profile() -> PolicyToggles {
    PolicyToggles {
        allow_vanilla: false,
        allow_modded: true,
        enforce_required: true,
        enforce_banned: true,
        enforce_approved: true,
    }
}
