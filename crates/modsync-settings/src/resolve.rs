use crate::{model::ModSyncSettingsV1, presets};
use modsync_domain::policy::PolicyToggles;

/// Per-run overrides (typically from CLI flags). They win over the settings file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub allow_vanilla: Option<bool>,
    pub allow_modded: Option<bool>,
    pub enforce_required: Option<bool>,
    pub enforce_banned: Option<bool>,
    pub enforce_approved: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub profile: String,
    pub toggles: PolicyToggles,
}

pub fn resolve_settings(
    cfg: ModSyncSettingsV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedSettings> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let Some(mut toggles) = presets::preset(&profile) else {
        anyhow::bail!(
            "unknown profile: {profile} (expected one of: {})",
            presets::known_profiles().join(", ")
        );
    };

    // File keys first, then overrides.
    for layer in [
        [
            cfg.allow_vanilla,
            cfg.allow_modded,
            cfg.enforce_required,
            cfg.enforce_banned,
            cfg.enforce_approved,
        ],
        [
            overrides.allow_vanilla,
            overrides.allow_modded,
            overrides.enforce_required,
            overrides.enforce_banned,
            overrides.enforce_approved,
        ],
    ] {
        apply_layer(&mut toggles, layer);
    }

    Ok(ResolvedSettings { profile, toggles })
}

fn apply_layer(toggles: &mut PolicyToggles, layer: [Option<bool>; 5]) {
    let [allow_vanilla, allow_modded, enforce_required, enforce_banned, enforce_approved] = layer;
    if let Some(v) = allow_vanilla {
        toggles.allow_vanilla = v;
    }
    if let Some(v) = allow_modded {
        toggles.allow_modded = v;
    }
    if let Some(v) = enforce_required {
        toggles.enforce_required = v;
    }
    if let Some(v) = enforce_banned {
        toggles.enforce_banned = v;
    }
    if let Some(v) = enforce_approved {
        toggles.enforce_approved = v;
    }
}
