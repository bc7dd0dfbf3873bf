use crate::ModVersion;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One mod as reported by a connecting peer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportedMod {
    /// Opaque, case-sensitive identifier (plugin GUID).
    pub id: String,
    #[schemars(with = "String")]
    pub version: ModVersion,
}

impl ReportedMod {
    pub fn new(id: impl Into<String>, version: ModVersion) -> Self {
        Self {
            id: id.into(),
            version,
        }
    }
}

/// The full mod list a peer reported, in the order it was sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModInventory {
    #[serde(default)]
    pub mods: Vec<ReportedMod>,
}

impl ModInventory {
    pub fn new(mods: Vec<ReportedMod>) -> Self {
        Self { mods }
    }

    /// A peer without any mods.
    pub fn vanilla() -> Self {
        Self::default()
    }

    pub fn is_vanilla(&self) -> bool {
        self.mods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportedMod> {
        self.mods.iter()
    }
}

impl<'a> IntoIterator for &'a ModInventory {
    type Item = &'a ReportedMod;
    type IntoIter = std::slice::Iter<'a, ReportedMod>;

    fn into_iter(self) -> Self::IntoIter {
        self.mods.iter()
    }
}

impl FromIterator<ReportedMod> for ModInventory {
    fn from_iter<I: IntoIterator<Item = ReportedMod>>(iter: I) -> Self {
        Self {
            mods: iter.into_iter().collect(),
        }
    }
}
