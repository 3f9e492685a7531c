//! Structural and semantic validation of identifier strings.

use crate::error::UuidError;
use crate::grammar::{self, Fields, NIL_STR};
use crate::uuid::{Uuid, string_to_bytes};

/// Outcome of a successful check.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Checked<'a> {
    Nil,
    Fields(Fields<'a>),
}

pub(crate) fn check(s: &str) -> Result<Checked<'_>, UuidError> {
    if s == NIL_STR {
        return Ok(Checked::Nil);
    }
    let fields = grammar::split(s).ok_or_else(|| UuidError::MalformedInput(s.to_string()))?;
    if !grammar::is_accepted_version(fields.version_digit())
        || !grammar::is_rfc4122_variant(fields.variant_digit())
    {
        return Err(UuidError::MalformedInput(s.to_string()));
    }
    Ok(Checked::Fields(fields))
}

/// Whether `s` is the NIL literal or a hyphenated identifier with an
/// accepted version digit (1-8) and the RFC 4122 variant. Never fails.
pub fn is_valid(s: &str) -> bool {
    check(s).is_ok()
}

/// Validate `s` and return its bytes.
pub fn validate_uuid(s: &str) -> Result<Uuid, UuidError> {
    match check(s)? {
        Checked::Nil => Ok(Uuid::NIL),
        Checked::Fields(_) => string_to_bytes(s).map(Uuid::from_bytes),
    }
}
