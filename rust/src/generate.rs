//! Identifier generation.
//!
//! Each call is a single computation over the injected byte source, clock and
//! hasher; the generator itself holds no mutable state.

use std::fmt;

use crate::digest::{HashAlgorithm, HashProvider, RustCryptoHasher};
use crate::error::UuidError;
use crate::source::{ByteSource, Clock, OsRandom, SystemClock};
use crate::uuid::Uuid;
use crate::validate::validate_uuid;

/// Upper bound on identifiers produced by one batch request.
pub const MAX_BATCH: usize = 100;

/// Well-known namespace identifiers (RFC 9562 section 6.6).
pub mod namespace {
    use crate::error::UuidError;
    use crate::uuid::Uuid;
    use crate::validate::validate_uuid;

    pub const DNS: Uuid = Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);
    pub const URL: Uuid = Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);
    pub const OID: Uuid = Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);
    pub const X500: Uuid = Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Resolve an alias (`dns`, `url`, `oid`, `x500`) or a valid identifier string.
    pub fn resolve(s: &str) -> Result<Uuid, UuidError> {
        match s.to_ascii_lowercase().as_str() {
            "dns" => Ok(DNS),
            "url" => Ok(URL),
            "oid" => Ok(OID),
            "x500" => Ok(X500),
            _ => validate_uuid(s).map_err(|_| UuidError::InvalidNamespace(s.to_string())),
        }
    }
}

/// The identifier variant to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UuidKind {
    Nil,
    /// Gregorian time, random clock sequence and node.
    V1,
    /// MD5 of namespace and name.
    V3 { namespace: Uuid, name: String },
    /// Random.
    V4,
    /// SHA-1 of namespace and name.
    V5 { namespace: Uuid, name: String },
    /// Unix milliseconds followed by random bits.
    V7,
}

impl UuidKind {
    /// Build a kind from the selector label and optional name-based inputs.
    ///
    /// `namespace` and `name` are only consulted for `v3` and `v5`.
    pub fn select(
        label: &str,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, UuidError> {
        let name_based = || -> Result<(Uuid, String), UuidError> {
            let ns = namespace::resolve(namespace.ok_or(UuidError::MissingNamespace)?)?;
            let name = name.ok_or(UuidError::MissingName)?;
            Ok((ns, name.to_string()))
        };

        match label.to_ascii_lowercase().as_str() {
            "nil" => Ok(Self::Nil),
            "v1" => Ok(Self::V1),
            "v3" => {
                let (namespace, name) = name_based()?;
                Ok(Self::V3 { namespace, name })
            }
            "v4" => Ok(Self::V4),
            "v5" => {
                let (namespace, name) = name_based()?;
                Ok(Self::V5 { namespace, name })
            }
            "v7" => Ok(Self::V7),
            _ => Err(UuidError::UnknownVersion(label.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::V1 => "v1",
            Self::V3 { .. } => "v3",
            Self::V4 => "v4",
            Self::V5 { .. } => "v5",
            Self::V7 => "v7",
        }
    }

    /// Version nibble written into generated identifiers.
    pub fn version(&self) -> u8 {
        match self {
            Self::Nil => 0,
            Self::V1 => 1,
            Self::V3 { .. } => 3,
            Self::V4 => 4,
            Self::V5 { .. } => 5,
            Self::V7 => 7,
        }
    }
}

impl fmt::Display for UuidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Clamp a requested batch size into `[1, MAX_BATCH]`.
pub fn clamp_count(count: usize) -> usize {
    count.clamp(1, MAX_BATCH)
}

/// Newline-separated canonical strings, one per line, no trailing newline.
pub fn export_batch(uuids: &[Uuid]) -> String {
    uuids
        .iter()
        .map(Uuid::encode)
        .collect::<Vec<_>>()
        .join("\n")
}

/// UUID generator over explicit entropy, clock and digest sources.
#[derive(Debug, Clone, Default)]
pub struct UuidGen<R = OsRandom, C = SystemClock, H = RustCryptoHasher> {
    random: R,
    clock: C,
    hasher: H,
}

impl UuidGen {
    /// Generator backed by the OS random source, the system clock and
    /// RustCrypto digests.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ByteSource, C: Clock, H: HashProvider> UuidGen<R, C, H> {
    pub fn with_sources(random: R, clock: C, hasher: H) -> Self {
        Self {
            random,
            clock,
            hasher,
        }
    }

    /// Generate one identifier of the given kind.
    pub fn generate(&self, kind: &UuidKind) -> Result<Uuid, UuidError> {
        match kind {
            UuidKind::Nil => Ok(Uuid::NIL),
            UuidKind::V1 => self.v1(),
            UuidKind::V3 { namespace, name } => {
                Ok(self.name_based(HashAlgorithm::Md5, namespace, name))
            }
            UuidKind::V4 => self.v4(),
            UuidKind::V5 { namespace, name } => {
                Ok(self.name_based(HashAlgorithm::Sha1, namespace, name))
            }
            UuidKind::V7 => self.v7(),
        }
    }

    /// Generate `clamp_count(count)` identifiers.
    pub fn generate_batch(&self, kind: &UuidKind, count: usize) -> Result<Vec<Uuid>, UuidError> {
        let count = clamp_count(count);
        tracing::debug!(kind = %kind, count, "generating batch");
        self.iter(kind).take(count).collect()
    }

    /// Unbounded stream of identifiers of one kind.
    pub fn iter<'a>(
        &'a self,
        kind: &'a UuidKind,
    ) -> impl Iterator<Item = Result<Uuid, UuidError>> + 'a {
        std::iter::repeat_with(move || self.generate(kind))
    }

    pub fn v4(&self) -> Result<Uuid, UuidError> {
        let bytes: [u8; 16] = self.random.random()?;
        Ok(Uuid::stamped(bytes, 4))
    }

    pub fn v1(&self) -> Result<Uuid, UuidError> {
        let ticks = self.clock.ticks_100ns();
        let tail: [u8; 8] = self.random.random()?;

        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&(ticks as u32).to_be_bytes());
        bytes[4..6].copy_from_slice(&((ticks >> 32) as u16).to_be_bytes());
        bytes[6..8].copy_from_slice(&(((ticks >> 48) & 0x0fff) as u16).to_be_bytes());
        // clock_seq (bytes 8-9) and node (bytes 10-15)
        bytes[8..16].copy_from_slice(&tail);
        // random node: multicast bit marks it as not an IEEE 802 address
        bytes[10] |= 0x01;
        Ok(Uuid::stamped(bytes, 1))
    }

    pub fn v7(&self) -> Result<Uuid, UuidError> {
        let unix_ts_ms = self.clock.unix_millis();
        let rand: [u8; 10] = self.random.random()?;

        let mut bytes = [0u8; 16];
        bytes[0..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..8]);
        bytes[6..16].copy_from_slice(&rand);
        Ok(Uuid::stamped(bytes, 7))
    }

    pub fn v3(&self, namespace: &Uuid, name: &str) -> Uuid {
        self.name_based(HashAlgorithm::Md5, namespace, name)
    }

    pub fn v5(&self, namespace: &Uuid, name: &str) -> Uuid {
        self.name_based(HashAlgorithm::Sha1, namespace, name)
    }

    fn name_based(&self, algorithm: HashAlgorithm, namespace: &Uuid, name: &str) -> Uuid {
        let mut input = Vec::with_capacity(16 + name.len());
        input.extend_from_slice(namespace.as_bytes());
        input.extend_from_slice(name.as_bytes());

        let digest = self.hasher.digest(algorithm, &input);
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        let version = match algorithm {
            HashAlgorithm::Md5 => 3,
            HashAlgorithm::Sha1 => 5,
        };
        Uuid::stamped(bytes, version)
    }
}

/// Validate `namespace` as an identifier string and derive a v5 identifier.
pub fn uuid5(namespace: &str, name: &str) -> Result<Uuid, UuidError> {
    let ns = validate_uuid(namespace)
        .map_err(|_| UuidError::InvalidNamespace(namespace.to_string()))?;
    Ok(UuidGen::new().v5(&ns, name))
}

/// Validate `namespace` as an identifier string and derive a v3 identifier.
pub fn uuid3(namespace: &str, name: &str) -> Result<Uuid, UuidError> {
    let ns = validate_uuid(namespace)
        .map_err(|_| UuidError::InvalidNamespace(namespace.to_string()))?;
    Ok(UuidGen::new().v3(&ns, name))
}
