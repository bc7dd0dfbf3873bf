use crate::kind::INFO_TERMINATOR;

/// A rule-list file split at the first terminator line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListDocument {
    /// Lines before the terminator (the stored documentation header).
    pub info: Vec<String>,
    /// Whether a terminator line was found at all.
    pub terminated: bool,
    /// Every line after the terminator, byte-for-byte, blanks included.
    ///
    /// Rows are not decoded here: a row in a foreign encoding must survive a rewrite.
    pub rows: Vec<Vec<u8>>,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl ListDocument {
    /// Split raw file contents at `\n` (a trailing `\r` is dropped from each line).
    pub fn parse(input: impl AsRef<[u8]>) -> Self {
        let bytes = input.as_ref();
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        let mut doc = ListDocument::default();
        for line in split_lines(bytes) {
            if doc.terminated {
                doc.rows.push(line.to_vec());
            } else if line == INFO_TERMINATOR.as_bytes() {
                doc.terminated = true;
            } else {
                doc.info.push(String::from_utf8_lossy(line).into_owned());
            }
        }
        doc
    }

    /// True when the stored header differs from `docs` in length or in any line.
    pub fn needs_rewrite(&self, docs: &[&str]) -> bool {
        self.info.len() != docs.len()
            || self.info.iter().zip(docs).any(|(have, want)| have != want)
    }

    /// 1-based line number of the first data row once the file carries `docs`.
    pub fn first_row_line(docs: &[&str]) -> usize {
        docs.len() + 2
    }
}

fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let mut lines = body.split(|&b| b == b'\n');
    if bytes.is_empty() {
        // `split` yields one empty slice for empty input; an empty file has no lines.
        lines.next();
    }
    lines.map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Serialize a header + terminator + rows, one `\n`-terminated line each.
pub fn render(docs: &[&str], rows: &[String]) -> String {
    let mut out = String::new();
    for line in docs {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(INFO_TERMINATOR);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// Like [`render`], but rows are written back exactly as they were read.
pub fn render_bytes(docs: &[&str], rows: &[Vec<u8>]) -> Vec<u8> {
    let mut out = render(docs, &[]).into_bytes();
    for row in rows {
        out.extend_from_slice(row);
        out.push(b'\n');
    }
    out
}
