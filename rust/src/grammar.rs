//! Field layout of the hyphenated text form, shared by validation and decoding.

use once_cell::sync::Lazy;
use regex::Regex;

/// `(name, hex digits)` for each hyphen-separated field, in order.
pub(crate) const FIELDS: [(&str, usize); 5] = [
    ("time_low", 8),
    ("time_mid", 4),
    ("time_hi_and_version", 4),
    ("clock_seq", 4),
    ("node", 12),
];

pub(crate) const NIL_STR: &str = "00000000-0000-0000-0000-000000000000";

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    let groups: Vec<String> = FIELDS
        .iter()
        .map(|(_, width)| format!("([0-9a-fA-F]{{{width}}})"))
        .collect();
    Regex::new(&format!("^{}$", groups.join("-"))).expect("field table yields a valid pattern")
});

/// The five fields of a structurally well-formed identifier string.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    pub time_low: &'a str,
    pub time_mid: &'a str,
    pub time_hi_and_version: &'a str,
    pub clock_seq: &'a str,
    pub node: &'a str,
}

impl Fields<'_> {
    /// Leading digit of `time_hi_and_version`.
    pub fn version_digit(&self) -> char {
        first_char(self.time_hi_and_version)
    }

    /// Leading digit of `clock_seq`.
    pub fn variant_digit(&self) -> char {
        first_char(self.clock_seq)
    }

    pub fn version(&self) -> u8 {
        self.version_digit().to_digit(16).unwrap_or(0) as u8
    }
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or('0')
}

/// Split `s` into its fields, or `None` if the shape is wrong.
pub(crate) fn split(s: &str) -> Option<Fields<'_>> {
    let caps = PATTERN.captures(s)?;
    let field = |i: usize| caps.get(i).map(|m| m.as_str());
    Some(Fields {
        time_low: field(1)?,
        time_mid: field(2)?,
        time_hi_and_version: field(3)?,
        clock_seq: field(4)?,
        node: field(5)?,
    })
}

/// Version digits accepted from external input: the generated set plus the
/// reserved 2, 6 and 8.
pub(crate) fn is_accepted_version(digit: char) -> bool {
    matches!(digit, '1'..='8')
}

/// The RFC 4122 variant family as a leading hex digit.
pub(crate) fn is_rfc4122_variant(digit: char) -> bool {
    matches!(digit, '8' | '9' | 'a' | 'b' | 'A' | 'B')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_widths_cover_32_digits() {
        let total: usize = FIELDS.iter().map(|(_, w)| w).sum();
        assert_eq!(total, 32);
        assert_eq!(NIL_STR.len(), total + FIELDS.len() - 1);
    }

    #[test]
    fn test_split_canonical() {
        let f = split("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
        assert_eq!(f.time_low, "6ba7b810");
        assert_eq!(f.time_mid, "9dad");
        assert_eq!(f.time_hi_and_version, "11d1");
        assert_eq!(f.clock_seq, "80b4");
        assert_eq!(f.node, "00c04fd430c8");
        assert_eq!(f.version_digit(), '1');
        assert_eq!(f.variant_digit(), '8');
        assert_eq!(f.version(), 1);
    }

    #[test]
    fn test_split_rejects_shape_errors() {
        assert!(split("6ba7b8109dad11d180b400c04fd430c8").is_none());
        assert!(split("6ba7b810-9dad-11d1-80b4-00c04fd430c8 ").is_none());
        assert!(split("6ba7b810-9dad-11d1-80b400c04fd430c8-").is_none());
        assert!(split("6ba7b81g-9dad-11d1-80b4-00c04fd430c8").is_none());
        assert!(split("").is_none());
    }

    #[test]
    fn test_split_accepts_uppercase() {
        let f = split("6BA7B810-9DAD-11D1-B0B4-00C04FD430C8").unwrap();
        assert!(is_rfc4122_variant(f.variant_digit()));
    }

    #[test]
    fn test_version_and_variant_digit_sets() {
        for d in ['1', '2', '3', '4', '5', '6', '7', '8'] {
            assert!(is_accepted_version(d));
        }
        for d in ['0', '9', 'a', 'f'] {
            assert!(!is_accepted_version(d));
        }
        for d in ['0', '7', 'c', 'e', 'F'] {
            assert!(!is_rfc4122_variant(d));
        }
    }
}
