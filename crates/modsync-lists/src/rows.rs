use modsync_domain::rule::RuleEntry;
use modsync_types::FormatError;
use std::fmt;

/// Something worth telling the operator about a data row. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadDiagnostic {
    /// Row could not be parsed; it stays on disk but is ignored for this run.
    Skipped {
        line: usize,
        text: String,
        error: FormatError,
    },
    /// Row parsed but its min version is above its max version, so it matches nothing.
    InvertedRange { line: usize, id: String },
}

impl LoadDiagnostic {
    pub fn line(&self) -> usize {
        match self {
            LoadDiagnostic::Skipped { line, .. } | LoadDiagnostic::InvertedRange { line, .. } => {
                *line
            }
        }
    }
}

impl fmt::Display for LoadDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadDiagnostic::Skipped { line, text, error } => {
                write!(f, "line {line}: invalid row '{text}', skipping ({error})")
            }
            LoadDiagnostic::InvertedRange { line, id } => {
                write!(
                    f,
                    "line {line}: '{id}' has min version above max version and matches nothing"
                )
            }
        }
    }
}

/// Parse stored data rows into entries, collecting a diagnostic for every row that is off.
///
/// `first_line` is the 1-based file line number of `rows[0]`. Blank rows are skipped silently.
/// Each row is decoded on its own, so one row in a foreign encoding only costs that row.
pub fn parse_rows(rows: &[Vec<u8>], first_line: usize) -> (Vec<RuleEntry>, Vec<LoadDiagnostic>) {
    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();

    for (idx, raw) in rows.iter().enumerate() {
        let line = first_line + idx;
        let Ok(row) = std::str::from_utf8(raw) else {
            diagnostics.push(LoadDiagnostic::Skipped {
                line,
                text: String::from_utf8_lossy(raw).into_owned(),
                error: FormatError::InvalidUtf8,
            });
            continue;
        };
        if row.trim().is_empty() {
            continue;
        }

        match RuleEntry::parse(row) {
            Ok(entry) => {
                if entry.has_inverted_range() {
                    diagnostics.push(LoadDiagnostic::InvertedRange {
                        line,
                        id: entry.id.clone(),
                    });
                }
                entries.push(entry);
            }
            Err(error) => diagnostics.push(LoadDiagnostic::Skipped {
                line,
                text: row.to_string(),
                error,
            }),
        }
    }

    (entries, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<Vec<u8>> {
        lines.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn skips_blank_and_malformed_rows() {
        let (entries, diags) = parse_rows(
            &rows(&[
                "ModA | false | 1.0.0 | ",
                "",
                "   ",
                "not a rule",
                "ModB | maybe | | ",
                "ModC|true||2.0.0",
            ]),
            11,
        );

        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["ModA", "ModC"]);

        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].line(), 14);
        assert_eq!(diags[1].line(), 15);
        assert!(matches!(
            &diags[0],
            LoadDiagnostic::Skipped { error: FormatError::FieldCount { found: 1 }, .. }
        ));
        assert!(diags[1].to_string().contains("ModB | maybe"));
    }

    #[test]
    fn inverted_range_is_kept_but_reported() {
        let (entries, diags) = parse_rows(&rows(&["ModA | false | 2.0.0 | 1.0.0"]), 1);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            diags,
            vec![LoadDiagnostic::InvertedRange {
                line: 1,
                id: "ModA".to_string()
            }]
        );
    }

    #[test]
    fn undecodable_row_is_skipped_and_the_rest_still_load() {
        let mut input = rows(&["Core | false | | "]);
        input.insert(0, b"Caf\xe9Mod | false | | ".to_vec());

        let (entries, diags) = parse_rows(&input, 20);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "Core");
        assert_eq!(
            diags,
            vec![LoadDiagnostic::Skipped {
                line: 20,
                text: "Caf\u{fffd}Mod | false | | ".to_string(),
                error: FormatError::InvalidUtf8,
            }]
        );
    }
}
