//! The 16-byte identifier value and its canonical text codec.
//!
//! The codec is purely structural: it knows nothing about versions or
//! variants. Semantic checks live in [`crate::validate`] and
//! [`crate::decode`].

use std::{fmt, str};

use serde::{Deserializer, Serializer, de};

use crate::decode::VariantKind;
use crate::error::UuidError;

/// Encode 16 bytes as the 8-4-4-4-12 lowercase hexadecimal string.
pub fn bytes_to_string(bytes: &[u8; 16]) -> String {
    let digits = hex::encode(bytes);
    let mut out = String::with_capacity(36);
    for (i, group) in [0..8, 8..12, 12..16, 16..20, 20..32].into_iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.push_str(&digits[group]);
    }
    out
}

/// Decode a hexadecimal identifier string.
///
/// Hyphens are stripped wherever they appear; exactly 32 hex digits of either
/// case must remain.
pub fn string_to_bytes(s: &str) -> Result<[u8; 16], UuidError> {
    let digits: String = s.chars().filter(|&c| c != '-').collect();
    if digits.len() != 32 {
        return Err(UuidError::MalformedInput(s.to_string()));
    }
    let mut out = [0u8; 16];
    hex::decode_to_slice(&digits, &mut out).map_err(|_| UuidError::MalformedInput(s.to_string()))?;
    Ok(out)
}

/// A 128-bit identifier stored as 16 big-endian bytes.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Stamp the version nibble and the `10` variant bits onto raw bytes.
    pub(crate) fn stamped(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | (version << 4);
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// High nibble of byte 6. Zero for NIL.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Variant family from the top bits of byte 8.
    pub const fn variant(&self) -> VariantKind {
        VariantKind::from_octet(self.0[8])
    }

    pub fn is_nil(&self) -> bool {
        self.0 == [0u8; 16]
    }

    /// Canonical lowercase hyphenated form.
    pub fn encode(&self) -> String {
        bytes_to_string(&self.0)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = UuidError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        string_to_bytes(src).map(Self)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.encode()
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.encode())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(UuidVisitor)
        } else {
            deserializer.deserialize_bytes(UuidVisitor)
        }
    }
}

struct UuidVisitor;

impl de::Visitor<'_> for UuidVisitor {
    type Value = Uuid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a UUID string or 16 bytes")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse::<Uuid>().map_err(de::Error::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        <[u8; 16]>::try_from(value)
            .map(Uuid::from)
            .map_err(de::Error::custom)
    }
}
