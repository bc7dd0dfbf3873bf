//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_PEER_VANILLA: &str = "peer.vanilla";
pub const CHECK_PEER_MODDED: &str = "peer.modded";
pub const CHECK_MODS_REQUIRED: &str = "mods.required";
pub const CHECK_MODS_BANNED: &str = "mods.banned";
pub const CHECK_MODS_APPROVED: &str = "mods.approved";

// Codes: peer.vanilla
pub const CODE_VANILLA_DISALLOWED: &str = "vanilla_disallowed";

// Codes: peer.modded
pub const CODE_MODDED_DISALLOWED: &str = "modded_disallowed";

// Codes: mods.required
pub const CODE_MISSING_REQUIRED_MOD: &str = "missing_required_mod";

// Codes: mods.banned
pub const CODE_BANNED_MOD: &str = "banned_mod";

// Codes: mods.approved
pub const CODE_UNAPPROVED_MOD: &str = "unapproved_mod";
