//! Alternative textual styles for an identifier.

use serde::{Deserialize, Serialize};

const URN_PREFIX: &str = "urn:uuid:";

/// Output style. The default is the canonical lowercase hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub hyphens: bool,
    pub uppercase: bool,
    pub braces: bool,
    pub urn: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            hyphens: true,
            uppercase: false,
            braces: false,
            urn: false,
        }
    }
}

/// Extract the 32 hex digits, ignoring a `urn:uuid:` prefix, braces,
/// hyphens and surrounding whitespace.
fn hex_digits(s: &str) -> Option<String> {
    let mut body = s.trim();
    if body
        .get(..URN_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(URN_PREFIX))
    {
        body = &body[URN_PREFIX.len()..];
    }
    let digits: String = body
        .chars()
        .filter(|c| !matches!(c, '-' | '{' | '}'))
        .collect();
    (digits.len() == 32 && digits.chars().all(|c| c.is_ascii_hexdigit())).then_some(digits)
}

/// Restyle `s`: case, then hyphen grouping, then braces, then the URN prefix.
///
/// Input that does not reduce to exactly 32 hex digits is returned unchanged.
pub fn format_uuid(s: &str, options: &FormatOptions) -> String {
    let Some(digits) = hex_digits(s) else {
        return s.to_string();
    };

    let digits = if options.uppercase {
        digits.to_ascii_uppercase()
    } else {
        digits.to_ascii_lowercase()
    };

    let mut out = if options.hyphens {
        format!(
            "{}-{}-{}-{}-{}",
            &digits[0..8],
            &digits[8..12],
            &digits[12..16],
            &digits[16..20],
            &digits[20..32]
        )
    } else {
        digits
    };

    if options.braces {
        out = format!("{{{out}}}");
    }
    if options.urn {
        out = format!("{URN_PREFIX}{out}");
    }
    out
}
