use modsync_types::{parse_bound, FormatError, ModVersion, ReportedMod};
use std::fmt;

/// Field separator in rule-list rows.
pub const FIELD_SEPARATOR: char = '|';

/// One parsed row of a rule list: `identifier | enforceConfig | minVersion | maxVersion`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleEntry {
    pub id: String,

    /// Parsed and kept for format compatibility; has no effect on matching.
    pub enforce_config: bool,

    /// `None` means no lower bound.
    pub min_version: Option<ModVersion>,
    /// `None` means no upper bound.
    pub max_version: Option<ModVersion>,
}

impl RuleEntry {
    /// A rule matching every version of `id`.
    pub fn any_version(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enforce_config: false,
            min_version: None,
            max_version: None,
        }
    }

    pub fn with_range(mut self, min: Option<ModVersion>, max: Option<ModVersion>) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Parse one data row. Fields are trimmed; exactly four are required.
    pub fn parse(line: &str) -> Result<Self, FormatError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        let [id, enforce, min, max] = fields.as_slice() else {
            return Err(FormatError::FieldCount {
                found: fields.len(),
            });
        };

        if id.is_empty() {
            return Err(FormatError::EmptyIdentifier);
        }

        Ok(Self {
            id: (*id).to_string(),
            enforce_config: parse_bool(enforce)?,
            min_version: parse_bound(min)?,
            max_version: parse_bound(max)?,
        })
    }

    /// Exact identifier match and version inside the inclusive `[min, max]` range.
    pub fn matches(&self, reported: &ReportedMod) -> bool {
        reported.id == self.id
            && self.min_version.is_none_or(|min| reported.version >= min)
            && self.max_version.is_none_or(|max| reported.version <= max)
    }

    /// Both bounds present and `min > max`: the row can never match.
    pub fn has_inverted_range(&self) -> bool {
        matches!((self.min_version, self.max_version), (Some(min), Some(max)) if min > max)
    }

    /// Human-readable range, e.g. `>=1.0.0, <=2.0.0` or `any version`.
    pub fn range_label(&self) -> String {
        match (self.min_version, self.max_version) {
            (None, None) => "any version".to_string(),
            (Some(min), None) => format!(">={min}"),
            (None, Some(max)) => format!("<={max}"),
            (Some(min), Some(max)) => format!(">={min}, <={max}"),
        }
    }
}

fn parse_bool(text: &str) -> Result<bool, FormatError> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(FormatError::InvalidBool {
            text: text.to_string(),
        })
    }
}

/// Renders the canonical row form written by hand into rule lists.
impl fmt::Display for RuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |v: Option<ModVersion>| v.map(|v| v.to_string()).unwrap_or_default();
        write!(
            f,
            "{} | {} | {} | {}",
            self.id,
            self.enforce_config,
            bound(self.min_version),
            bound(self.max_version)
        )
    }
}
