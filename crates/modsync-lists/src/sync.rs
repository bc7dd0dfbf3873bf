use crate::document::{render, render_bytes, ListDocument};
use crate::kind::ListKind;
use crate::rows::{parse_rows, LoadDiagnostic};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use modsync_domain::rule::RuleEntry;

/// What the loader did to the file on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncAction {
    /// File was missing and has been created with the shipped header and no rows.
    Created,
    /// Stored header drifted; file rewritten with the shipped header and the same rows.
    Rewritten,
    /// Stored header already matched; file untouched.
    Unchanged,
}

impl SyncAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncAction::Created => "created",
            SyncAction::Rewritten => "rewritten",
            SyncAction::Unchanged => "unchanged",
        }
    }
}

/// One rule list after load/repair.
#[derive(Clone, Debug)]
pub struct LoadedList {
    pub kind: ListKind,
    pub path: Utf8PathBuf,
    pub action: SyncAction,
    /// Data rows as stored on disk after the sync (malformed ones included).
    pub stored_rows: usize,
    pub entries: Vec<RuleEntry>,
    pub diagnostics: Vec<LoadDiagnostic>,
}

/// Load `path` as a `kind` rule list, creating or repairing it first.
pub fn sync_rule_file(path: &Utf8Path, kind: ListKind) -> anyhow::Result<LoadedList> {
    let docs = kind.documentation();

    let exists = path
        .try_exists()
        .with_context(|| format!("stat {path}"))?;

    let (action, rows) = if !exists {
        tracing::info!(list = %kind, %path, "rule list not found, creating new");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory: {parent}"))?;
        }
        std::fs::write(path, render(docs, &[])).with_context(|| format!("write {path}"))?;
        (SyncAction::Created, Vec::new())
    } else {
        let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
        let doc = ListDocument::parse(&bytes);

        if doc.needs_rewrite(docs) {
            if !doc.terminated && !doc.info.is_empty() {
                tracing::warn!(
                    list = %kind,
                    %path,
                    lines = doc.info.len(),
                    "no '----------' line found; whole file treated as header and replaced"
                );
            }
            tracing::info!(list = %kind, %path, rows = doc.rows.len(), "updating rule list header");
            std::fs::write(path, render_bytes(docs, &doc.rows))
                .with_context(|| format!("write {path}"))?;
            (SyncAction::Rewritten, doc.rows)
        } else {
            (SyncAction::Unchanged, doc.rows)
        }
    };

    let (entries, diagnostics) = parse_rows(&rows, ListDocument::first_row_line(docs));
    for diag in &diagnostics {
        tracing::warn!(list = %kind, %path, "{diag}");
    }
    tracing::debug!(
        list = %kind,
        entries = entries.len(),
        action = action.as_str(),
        "rule list loaded"
    );

    Ok(LoadedList {
        kind,
        path: path.to_path_buf(),
        action,
        stored_rows: rows.len(),
        entries,
        diagnostics,
    })
}
