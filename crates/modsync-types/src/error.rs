use thiserror::Error;

/// Malformed version text or rule line.
///
/// Always recovered where it is raised: list loaders turn it into a skipped-line
/// diagnostic instead of aborting.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("version '{text}' must have exactly three components (major.minor.patch)")]
    VersionComponentCount { text: String },

    #[error("version '{text}' has a non-numeric component '{component}'")]
    InvalidVersionComponent { text: String, component: String },

    #[error("expected 4 '|'-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("mod identifier must not be empty")]
    EmptyIdentifier,

    #[error("enforce flag '{text}' is not 'true' or 'false'")]
    InvalidBool { text: String },

    #[error("row is not valid UTF-8")]
    InvalidUtf8,
}
