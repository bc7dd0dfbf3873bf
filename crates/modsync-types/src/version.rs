use crate::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-part mod version (`major.minor.patch`).
///
/// Ordering is lexicographic on `(major, minor, patch)`, which is what the derived `Ord`
/// gives for this field order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ModVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `int.int.int`. Each component must be a non-empty run of ASCII digits.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let parts: Vec<&str> = text.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(FormatError::VersionComponentCount {
                text: text.to_string(),
            });
        };

        Ok(Self {
            major: parse_component(text, major)?,
            minor: parse_component(text, minor)?,
            patch: parse_component(text, patch)?,
        })
    }
}

fn parse_component(text: &str, component: &str) -> Result<u32, FormatError> {
    let invalid = || FormatError::InvalidVersionComponent {
        text: text.to_string(),
        component: component.to_string(),
    };
    // `u32::from_str` accepts a leading '+', which is not a valid component here.
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    component.parse().map_err(|_| invalid())
}

/// Parse one side of a version range.
///
/// Blank text (after trimming) is the unbounded sentinel and yields `Ok(None)`.
pub fn parse_bound(text: &str) -> Result<Option<ModVersion>, FormatError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    ModVersion::parse(text).map(Some)
}

impl FromStr for ModVersion {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ModVersion {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ModVersion> for String {
    fn from(value: ModVersion) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ModVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    #[test]
    fn parses_three_components() {
        assert_eq!(ModVersion::parse("1.2.3"), Ok(ModVersion::new(1, 2, 3)));
        assert_eq!(ModVersion::parse("0.0.0"), Ok(ModVersion::new(0, 0, 0)));
        assert_eq!(ModVersion::parse("10.020.3"), Ok(ModVersion::new(10, 20, 3)));
    }

    #[test]
    fn rejects_wrong_component_count() {
        for text in ["1", "1.2", "1.2.3.4", "", "..."] {
            assert!(
                matches!(
                    ModVersion::parse(text),
                    Err(FormatError::VersionComponentCount { .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn rejects_non_numeric_components() {
        for text in ["1.x.3", "1..3", "+1.2.3", "-1.2.3", "1.2.3b", " 1.2.3", "1.2.99999999999"] {
            assert!(
                matches!(
                    ModVersion::parse(text),
                    Err(FormatError::InvalidVersionComponent { .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn blank_bound_is_unbounded() {
        assert_eq!(parse_bound(""), Ok(None));
        assert_eq!(parse_bound("   "), Ok(None));
        assert_eq!(parse_bound(" 2.1.0 "), Ok(Some(ModVersion::new(2, 1, 0))));
        assert!(parse_bound("2.1").is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let v = ModVersion::new;
        assert!(v(1, 0, 0) > v(0, 99, 99));
        assert!(v(1, 2, 0) > v(1, 1, 99));
        assert!(v(1, 2, 4) > v(1, 2, 3));
        assert_eq!(v(3, 4, 5).cmp(&v(3, 4, 5)), Ordering::Equal);
    }

    #[test]
    fn serde_uses_string_form() {
        let v: ModVersion = serde_json::from_str("\"4.5.6\"").expect("deserialize");
        assert_eq!(v, ModVersion::new(4, 5, 6));
        assert_eq!(serde_json::to_string(&v).expect("serialize"), "\"4.5.6\"");
        assert!(serde_json::from_str::<ModVersion>("\"4.5\"").is_err());
    }

    fn arb_version() -> impl Strategy<Value = ModVersion> {
        (0u32..20, 0u32..20, 0u32..20).prop_map(|(a, b, c)| ModVersion::new(a, b, c))
    }

    proptest! {
        #[test]
        fn compare_is_reflexive(a in arb_version()) {
            prop_assert_eq!(a.cmp(&a), Ordering::Equal);
        }

        #[test]
        fn compare_is_antisymmetric(a in arb_version(), b in arb_version()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn compare_is_transitive(a in arb_version(), b in arb_version(), c in arb_version()) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
        }

        #[test]
        fn display_then_parse_is_identity(a in arb_version()) {
            prop_assert_eq!(ModVersion::parse(&a.to_string()), Ok(a));
        }

        #[test]
        fn parse_never_panics(input in ".*") {
            let _ = ModVersion::parse(&input);
            let _ = parse_bound(&input);
        }
    }
}
