//! Semantic decoding of validated identifier strings.
//!
//! Decoding runs the same field grammar as [`crate::validate`], so anything
//! [`crate::is_valid`] accepts decodes and anything it rejects is
//! [`UuidError::MalformedInput`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::UuidError;
use crate::grammar::Fields;
use crate::source::UUID_EPOCH_OFFSET_MS;
use crate::uuid::{Uuid, string_to_bytes};
use crate::validate::{Checked, check};

/// Variant family selected by the top bits of byte 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VariantKind {
    /// `0xxxxxxx`
    #[serde(rename = "NCS")]
    Ncs,
    /// `10xxxxxx`
    #[serde(rename = "RFC 4122")]
    Rfc4122,
    /// `110xxxxx`
    #[serde(rename = "Microsoft")]
    Microsoft,
    /// `111xxxxx`
    #[serde(rename = "Future")]
    Future,
}

impl VariantKind {
    pub const fn from_octet(octet: u8) -> Self {
        if octet & 0x80 == 0 {
            Self::Ncs
        } else if octet & 0x40 == 0 {
            Self::Rfc4122
        } else if octet & 0x20 == 0 {
            Self::Microsoft
        } else {
            Self::Future
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ncs => "NCS",
            Self::Rfc4122 => "RFC 4122",
            Self::Microsoft => "Microsoft",
            Self::Future => "Future",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of timestamp extraction.
///
/// `NotApplicable` is not a failure: the identifier is valid, its version
/// simply carries no timestamp of the requested kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedTime {
    At(DateTime<Utc>),
    NotApplicable,
}

impl EmbeddedTime {
    pub fn at(self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(t) => Some(t),
            Self::NotApplicable => None,
        }
    }
}

/// Parsed identifier components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedUuid {
    pub raw: String,
    pub uuid: Uuid,
    pub version: u8,
    pub variant: VariantKind,
    /// Creation time for v1 and v7 identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Parse a string into version, variant and (where present) timestamp.
///
/// NIL reports version 0 and, by convention, the RFC 4122 variant.
pub fn parse_uuid(s: &str) -> Result<ParsedUuid, UuidError> {
    let fields = match check(s)? {
        Checked::Nil => {
            return Ok(ParsedUuid {
                raw: s.to_string(),
                uuid: Uuid::NIL,
                version: 0,
                variant: VariantKind::Rfc4122,
                timestamp: None,
            });
        }
        Checked::Fields(fields) => fields,
    };

    let uuid = Uuid::from_bytes(string_to_bytes(s)?);
    let timestamp = match fields.version() {
        1 => Some(v1_time(&fields)?),
        7 => Some(v7_time(&fields)?),
        _ => None,
    };

    Ok(ParsedUuid {
        raw: s.to_string(),
        uuid,
        version: fields.version(),
        variant: uuid.variant(),
        timestamp,
    })
}

/// Creation time of a version-1 identifier.
pub fn decode_v1_timestamp(s: &str) -> Result<EmbeddedTime, UuidError> {
    match check(s)? {
        Checked::Fields(fields) if fields.version() == 1 => v1_time(&fields).map(EmbeddedTime::At),
        _ => Ok(EmbeddedTime::NotApplicable),
    }
}

/// Creation time of a version-7 identifier.
pub fn decode_v7_timestamp(s: &str) -> Result<EmbeddedTime, UuidError> {
    match check(s)? {
        Checked::Fields(fields) if fields.version() == 7 => v7_time(&fields).map(EmbeddedTime::At),
        _ => Ok(EmbeddedTime::NotApplicable),
    }
}

fn hex_field(field: &str) -> Result<u64, UuidError> {
    u64::from_str_radix(field, 16).map_err(|_| UuidError::MalformedInput(field.to_string()))
}

fn v1_time(fields: &Fields<'_>) -> Result<DateTime<Utc>, UuidError> {
    let time_hi = hex_field(fields.time_hi_and_version)? & 0x0fff;
    let time_mid = hex_field(fields.time_mid)?;
    let time_low = hex_field(fields.time_low)?;
    let ticks = (time_hi << 48) | (time_mid << 32) | time_low;
    let millis = (ticks / 10_000) as i64 - UUID_EPOCH_OFFSET_MS;
    DateTime::from_timestamp_millis(millis).ok_or(UuidError::InvalidTimestamp)
}

fn v7_time(fields: &Fields<'_>) -> Result<DateTime<Utc>, UuidError> {
    let millis = (hex_field(fields.time_low)? << 16) | hex_field(fields.time_mid)?;
    DateTime::from_timestamp_millis(millis as i64).ok_or(UuidError::InvalidTimestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_v1_dns_namespace() {
        let p = parse_uuid("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
        assert_eq!(p.version, 1);
        assert_eq!(p.variant, VariantKind::Rfc4122);
        assert_eq!(
            p.timestamp.unwrap().timestamp_millis(),
            886_630_433_151,
            "1998-02-04T22:13:53.151Z"
        );
    }

    #[test]
    fn test_parse_nil() {
        let p = parse_uuid("00000000-0000-0000-0000-000000000000").unwrap();
        assert_eq!(p.version, 0);
        assert_eq!(p.variant, VariantKind::Rfc4122);
        assert!(p.uuid.is_nil());
        assert_eq!(p.timestamp, None);
    }

    #[test]
    fn test_parse_other_versions() {
        let p = parse_uuid("2ed6657d-e927-568b-95e1-2665a8aea6a2").unwrap();
        assert_eq!(p.version, 5);
        assert_eq!(p.timestamp, None);

        let p = parse_uuid("1EC9414C-232A-6B00-B3C8-9F6BDECED846").unwrap();
        assert_eq!(p.version, 6);
        assert_eq!(p.raw, "1EC9414C-232A-6B00-B3C8-9F6BDECED846");
        assert_eq!(p.uuid.encode(), "1ec9414c-232a-6b00-b3c8-9f6bdeced846");
    }

    #[test]
    fn test_parse_rejects_what_validator_rejects() {
        for s in [
            "waldo",
            "6ba7b8109dad11d180b400c04fd430c8",
            "6ba7b810-9dad-01d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-c0b4-00c04fd430c8",
        ] {
            assert!(!crate::is_valid(s));
            assert!(matches!(parse_uuid(s), Err(UuidError::MalformedInput(_))));
            assert!(matches!(
                decode_v1_timestamp(s),
                Err(UuidError::MalformedInput(_))
            ));
        }
    }

    #[test]
    fn test_rfc9562_v1_example() {
        let t = decode_v1_timestamp("C232AB00-9414-11EC-B3C8-9F6BDECED846").unwrap();
        assert_eq!(
            t,
            EmbeddedTime::At(Utc.with_ymd_and_hms(2022, 2, 22, 19, 22, 22).unwrap())
        );
    }

    #[test]
    fn test_rfc9562_v7_example() {
        let s = "017F22E2-79B0-7CC3-98C4-DC0C0C07398F";
        let expected = Utc.with_ymd_and_hms(2022, 2, 22, 19, 22, 22).unwrap();
        assert_eq!(decode_v7_timestamp(s).unwrap(), EmbeddedTime::At(expected));
        assert_eq!(parse_uuid(s).unwrap().timestamp, Some(expected));
        assert_eq!(decode_v1_timestamp(s).unwrap(), EmbeddedTime::NotApplicable);
    }

    #[test]
    fn test_timestamp_not_applicable_for_other_versions() {
        for s in [
            "919108f7-52d1-4320-9bac-f847db4148a8",
            "2ed6657d-e927-568b-95e1-2665a8aea6a2",
            "00000000-0000-0000-0000-000000000000",
        ] {
            assert_eq!(decode_v1_timestamp(s).unwrap(), EmbeddedTime::NotApplicable);
            assert_eq!(decode_v1_timestamp(s).unwrap().at(), None);
        }
        assert_eq!(
            decode_v7_timestamp("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap(),
            EmbeddedTime::NotApplicable
        );
    }

    #[test]
    fn test_variant_from_octet() {
        assert_eq!(VariantKind::from_octet(0x00), VariantKind::Ncs);
        assert_eq!(VariantKind::from_octet(0x7f), VariantKind::Ncs);
        assert_eq!(VariantKind::from_octet(0x80), VariantKind::Rfc4122);
        assert_eq!(VariantKind::from_octet(0xbf), VariantKind::Rfc4122);
        assert_eq!(VariantKind::from_octet(0xc0), VariantKind::Microsoft);
        assert_eq!(VariantKind::from_octet(0xdf), VariantKind::Microsoft);
        assert_eq!(VariantKind::from_octet(0xe0), VariantKind::Future);
        assert_eq!(VariantKind::from_octet(0xff), VariantKind::Future);
        assert_eq!(VariantKind::Rfc4122.to_string(), "RFC 4122");
    }

    #[test]
    fn test_parsed_json_shape() {
        let p = parse_uuid("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["uuid"], "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(v["version"], 1);
        assert_eq!(v["variant"], "RFC 4122");
        assert!(v["timestamp"].as_str().unwrap().starts_with("1998-02-04T22:13:53.151"));

        let p = parse_uuid("2ed6657d-e927-568b-95e1-2665a8aea6a2").unwrap();
        let v = serde_json::to_value(&p).unwrap();
        assert!(v.get("timestamp").is_none());
    }
}
