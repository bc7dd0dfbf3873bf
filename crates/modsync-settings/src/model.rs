use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `modsync.toml` schema v1.
///
/// Every key is optional; anything left out falls back to the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ModSyncSettingsV1 {
    /// Optional schema string for tooling (`modsync.settings.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `default`, `open`, or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Should players without mods be allowed to connect?
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_vanilla: Option<bool>,

    /// Should players with mods be allowed to connect?
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_modded: Option<bool>,

    /// Should the required mods list be enforced for connecting players?
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_required: Option<bool>,

    /// Should the banned mods list be enforced? (blacklist)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_banned: Option<bool>,

    /// Should the approved mods list be enforced? (whitelist)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_approved: Option<bool>,
}
