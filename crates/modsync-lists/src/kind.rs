use std::fmt;

/// Line separating the documentation header from data rows.
pub const INFO_TERMINATOR: &str = "----------";

/// Directory (under the config dir) holding the three rule lists.
pub const LISTS_DIR_NAME: &str = "ModSyncLists";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListKind {
    Required,
    Banned,
    Approved,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Required, ListKind::Banned, ListKind::Approved];

    pub fn file_name(self) -> &'static str {
        match self {
            ListKind::Required => "RequiredMods.txt",
            ListKind::Banned => "BannedMods.txt",
            ListKind::Approved => "ApprovedMods.txt",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ListKind::Required => "required",
            ListKind::Banned => "banned",
            ListKind::Approved => "approved",
        }
    }

    /// Shipped documentation header, without the terminator line.
    ///
    /// Editing any of these lines makes every existing file rewrite its header on next load.
    pub fn documentation(self) -> &'static [&'static str] {
        match self {
            ListKind::Required => REQUIRED_DOCS,
            ListKind::Banned => BANNED_DOCS,
            ListKind::Approved => APPROVED_DOCS,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const REQUIRED_DOCS: &[&str] = &[
    "Required Mods",
    "If enabled in the standard config, any connecting players must have all mods on this list installed.",
    "Format is GUID | Enforce Config | Min Version | Max Version",
    "Example: com.testMods.RandomMod | false | 0.0.0 | 2.1.0",
    "GUID = the name of the mod (Might not match thunderstore, need to ask the developer or decompile and check",
    "Enforce Config = does nothing at the moment, true or false",
    "Min Version = The lowest version number accepted. Leave blank for no minimum.",
    "Max Version = The highest version number accepted. Leave blank for no maximum.",
    "Recommended settings for min and max are minimum set to version installed on server, and max left blank.",
];

const BANNED_DOCS: &[&str] = &[
    "Banned Mods",
    "If enabled in the standard config, players will be unable to connect with any of the mods on this list installed.",
    "Format is GUID | Enforce Config | Min Version | Max Version",
    "Example: com.testMods.RandomMod | false | 0.0.0 | 2.1.0",
    "GUID = the name of the mod (Might not match thunderstore, need to ask the developer or decompile and check",
    "Enforce Config = does nothing at the moment, true or false",
    "Min Version = The lowest version number accepted. Leave blank for no minimum.",
    "Max Version = The highest version number accepted. Leave blank for no maximum.",
];

const APPROVED_DOCS: &[&str] = &[
    "Approved Mods",
    "If enabled in the standard config, any players with mods that are not on this list (Or required list) will be unable to connect.",
    "Format is GUID | Enforce Config | Min Version | Max Version",
    "Example: com.testMods.RandomMod | false | 0.0.0 | 2.1.0",
    "GUID = the name of the mod (Might not match thunderstore, need to ask the developer or decompile and check",
    "Enforce Config = does nothing at the moment, true or false",
    "Min Version = The lowest version number accepted. Leave blank for no minimum.",
    "Max Version = The highest version number accepted. Leave blank for no maximum.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documentation_never_contains_terminator() {
        for kind in ListKind::ALL {
            assert!(!kind.documentation().is_empty());
            assert!(!kind.documentation().contains(&INFO_TERMINATOR), "{kind}");
        }
    }

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<_> = ListKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 3);
    }
}
