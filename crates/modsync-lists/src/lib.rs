//! Rule-list adapters: create, repair and parse the three mod lists on disk.
//!
//! This crate is allowed to do filesystem IO, and only does it at startup. Each list is a
//! documentation header, a `----------` terminator, then one rule per line:
//!
//! ```text
//! com.testMods.RandomMod | false | 0.0.0 | 2.1.0
//! ```
//!
//! When the shipped header changes between releases the file is rewritten in place with the
//! new header and every stored row carried over in order.

#![forbid(unsafe_code)]

mod document;
mod kind;
mod rows;
mod sync;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};

pub use document::{render, render_bytes, ListDocument};
pub use kind::{ListKind, INFO_TERMINATOR, LISTS_DIR_NAME};
pub use rows::{parse_rows, LoadDiagnostic};
pub use sync::{sync_rule_file, LoadedList, SyncAction};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Split arbitrary bytes into header and rows, then check it for drift.
    /// **Never panics** on any input.
    pub fn parse_document(text: &[u8]) -> bool {
        ListDocument::parse(text).needs_rewrite(ListKind::Required.documentation())
    }

    /// Parse arbitrary bytes as data rows, one per `\n`. **Never panics** on any input.
    pub fn parse_rows(text: &[u8]) -> usize {
        let rows: Vec<Vec<u8>> = text.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect();
        let (entries, _) = super::parse_rows(&rows, 1);
        entries.len()
    }
}

/// The three lists, loaded and repaired.
#[derive(Clone, Debug)]
pub struct RuleLists {
    pub required: LoadedList,
    pub banned: LoadedList,
    pub approved: LoadedList,
}

impl RuleLists {
    pub fn iter(&self) -> impl Iterator<Item = &LoadedList> {
        [&self.required, &self.banned, &self.approved].into_iter()
    }
}

/// `<config_dir>/ModSyncLists`.
pub fn lists_dir(config_dir: &Utf8Path) -> Utf8PathBuf {
    config_dir.join(LISTS_DIR_NAME)
}

pub fn list_path(config_dir: &Utf8Path, kind: ListKind) -> Utf8PathBuf {
    lists_dir(config_dir).join(kind.file_name())
}

/// Load (creating or repairing as needed) all three rule lists under `config_dir`.
///
/// Any filesystem error aborts: a policy without its lists is meaningless.
pub fn load_rule_lists(config_dir: &Utf8Path) -> anyhow::Result<RuleLists> {
    let dir = lists_dir(config_dir);
    std::fs::create_dir_all(&dir).with_context(|| format!("create directory: {dir}"))?;

    let load = |kind: ListKind| {
        sync_rule_file(&list_path(config_dir, kind), kind)
            .with_context(|| format!("load {kind} mods list"))
    };

    Ok(RuleLists {
        required: load(ListKind::Required)?,
        banned: load(ListKind::Banned)?,
        approved: load(ListKind::Approved)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    #[test]
    fn load_creates_all_three_lists() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        let lists = load_rule_lists(&root).expect("load lists");
        for list in lists.iter() {
            assert_eq!(list.action, SyncAction::Created);
            assert!(list.entries.is_empty());
            let text = std::fs::read_to_string(&list.path).expect("read list");
            assert_eq!(text, render(list.kind.documentation(), &[]));
        }
        assert_eq!(lists.banned.path, root.join("ModSyncLists").join("BannedMods.txt"));
    }

    #[test]
    fn second_load_is_a_no_op() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        load_rule_lists(&root).expect("first load");
        let lists = load_rule_lists(&root).expect("second load");
        assert!(lists.iter().all(|l| l.action == SyncAction::Unchanged));
    }

    proptest! {
        #[test]
        fn fuzz_parsers_never_panic(input in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = fuzz::parse_document(&input);
            let _ = fuzz::parse_rows(&input);
        }
    }
}
