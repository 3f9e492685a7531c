//! uuidkit: UUID generation, validation, decoding and formatting.
//!
//! Produces RFC 9562 identifiers of versions 1, 3, 4, 5 and 7 plus the NIL
//! value, checks arbitrary strings against the canonical grammar, extracts
//! version, variant and embedded timestamps, and restyles identifiers.
//!
//! # Format
//!
//! ```text
//! xxxxxxxx-xxxx-Mxxx-Nxxx-xxxxxxxxxxxx
//! M ::= version digit
//! N ::= 8 | 9 | a | b   (RFC 4122 variant)
//! ```
//!
//! # Example
//!
//! ```
//! use uuidkit::{UuidGen, UuidKind, parse_uuid};
//!
//! let uuid_gen = UuidGen::new();
//! let kind = UuidKind::select("v5", Some("dns"), Some("www.example.com"))?;
//! let id = uuid_gen.generate(&kind)?;
//! assert_eq!(id.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! assert_eq!(parse_uuid(&id.to_string())?.version, 5);
//! # Ok::<(), uuidkit::UuidError>(())
//! ```

mod decode;
mod digest;
mod error;
mod format;
mod generate;
mod grammar;
mod source;
mod uuid;
mod validate;

pub use decode::{
    EmbeddedTime, ParsedUuid, VariantKind, decode_v1_timestamp, decode_v7_timestamp, parse_uuid,
};
pub use digest::{HashAlgorithm, HashProvider, RustCryptoHasher};
pub use error::UuidError;
pub use format::{FormatOptions, format_uuid};
pub use generate::{
    MAX_BATCH, UuidGen, UuidKind, clamp_count, export_batch, namespace, uuid3, uuid5,
};
pub use source::{
    ByteSource, Clock, OsRandom, SystemClock, UUID_EPOCH_OFFSET_MS, UUID_EPOCH_OFFSET_TICKS,
};
pub use uuid::{Uuid, bytes_to_string, string_to_bytes};
pub use validate::{is_valid, validate_uuid};
