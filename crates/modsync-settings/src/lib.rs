//! Settings parsing and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves settings provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::ModSyncSettingsV1;
pub use presets::{known_profiles, DEFAULT_PROFILE};
pub use resolve::{Overrides, ResolvedSettings};

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "modsync.toml";

/// Parse `modsync.toml` into a typed model.
pub fn parse_settings_toml(input: &str) -> anyhow::Result<ModSyncSettingsV1> {
    let cfg: ModSyncSettingsV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// JSON schema for `modsync.toml`, for editor tooling.
pub fn settings_json_schema() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(ModSyncSettingsV1);
    Ok(serde_json::to_string_pretty(&schema)?)
}

/// Resolve the toggles used by the engine (profile + file keys + overrides).
pub fn resolve_settings(
    cfg: ModSyncSettingsV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedSettings> {
    resolve::resolve_settings(cfg, overrides)
}
