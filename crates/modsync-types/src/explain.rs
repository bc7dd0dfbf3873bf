//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and when it applies.
    pub description: &'static str,
    /// How an operator or player resolves a rejection.
    pub remediation: &'static str,
    /// Before/after rule-list or settings examples.
    pub examples: ExamplePair,
}

/// Before and after configuration examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Configuration that rejects the peer.
    pub before: &'static str,
    /// Configuration that lets the peer in.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_PEER_VANILLA | ids::CODE_VANILLA_DISALLOWED => Some(explain_vanilla()),
        ids::CHECK_PEER_MODDED | ids::CODE_MODDED_DISALLOWED => Some(explain_modded()),
        ids::CHECK_MODS_REQUIRED | ids::CODE_MISSING_REQUIRED_MOD => Some(explain_required()),
        ids::CHECK_MODS_BANNED | ids::CODE_BANNED_MOD => Some(explain_banned()),
        ids::CHECK_MODS_APPROVED | ids::CODE_UNAPPROVED_MOD => Some(explain_approved()),
        _ => None,
    }
}

/// List all known check IDs, in evaluation order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_PEER_VANILLA,
        ids::CHECK_PEER_MODDED,
        ids::CHECK_MODS_REQUIRED,
        ids::CHECK_MODS_BANNED,
        ids::CHECK_MODS_APPROVED,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_VANILLA_DISALLOWED,
        ids::CODE_MODDED_DISALLOWED,
        ids::CODE_MISSING_REQUIRED_MOD,
        ids::CODE_BANNED_MOD,
        ids::CODE_UNAPPROVED_MOD,
    ]
}

fn explain_vanilla() -> Explanation {
    Explanation {
        title: "Vanilla Players",
        description: "\
Rejects peers that report no mods at all when `allow_vanilla` is false.",
        remediation: "\
Install at least the required mods, or set `allow_vanilla = true` in modsync.toml.",
        examples: ExamplePair {
            before: "allow_vanilla = false",
            after: "allow_vanilla = true",
        },
    }
}

fn explain_modded() -> Explanation {
    Explanation {
        title: "Modded Players",
        description: "\
Rejects peers that report one or more mods when `allow_modded` is false.",
        remediation: "\
Connect without mods, or set `allow_modded = true` in modsync.toml.",
        examples: ExamplePair {
            before: "allow_modded = false",
            after: "allow_modded = true",
        },
    }
}

fn explain_required() -> Explanation {
    Explanation {
        title: "Required Mods",
        description: "\
When `enforce_required` is true, every row in ModSyncLists/RequiredMods.txt must be
matched by at least one reported mod: same identifier, version inside [min, max].
Each unmatched row produces its own finding.",
        remediation: "\
Install the named mod at a version inside the listed range, or widen/remove the row.",
        examples: ExamplePair {
            before: "com.example.Core | false | 2.0.0 |",
            after: "com.example.Core | false | 1.0.0 |",
        },
    }
}

fn explain_banned() -> Explanation {
    Explanation {
        title: "Banned Mods",
        description: "\
When `enforce_banned` is true, a reported mod matching any row in
ModSyncLists/BannedMods.txt rejects the peer. Blank bounds ban every version.",
        remediation: "\
Uninstall the mod, or update it to a version outside the banned range.",
        examples: ExamplePair {
            before: "com.example.Cheats | false | |",
            after: "com.example.Cheats | false | | 2.0.0",
        },
    }
}

fn explain_approved() -> Explanation {
    Explanation {
        title: "Approved Mods",
        description: "\
When `enforce_approved` is true, every reported mod must match a row in
ModSyncLists/ApprovedMods.txt or RequiredMods.txt. Anything else rejects the peer.",
        remediation: "\
Uninstall the mod, or add a row for it to ApprovedMods.txt.",
        examples: ExamplePair {
            before: "# ApprovedMods.txt has no row for com.example.Map",
            after: "com.example.Map | false | 1.0.0 |",
        },
    }
}
