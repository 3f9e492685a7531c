//! Content digests for name-based (v3/v5) identifiers.

use md5::Md5;
use sha1::{Digest, Sha1};

/// Digest algorithm selected by the identifier version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// Version 3.
    Md5,
    /// Version 5.
    Sha1,
}

/// Deterministic digest: the same input always yields the same output.
pub trait HashProvider {
    fn digest(&self, algorithm: HashAlgorithm, input: &[u8]) -> Vec<u8>;
}

/// MD5 and SHA-1 from the RustCrypto hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoHasher;

impl HashProvider for RustCryptoHasher {
    fn digest(&self, algorithm: HashAlgorithm, input: &[u8]) -> Vec<u8> {
        match algorithm {
            HashAlgorithm::Md5 => Md5::digest(input).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(input).to_vec(),
        }
    }
}
