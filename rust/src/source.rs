//! Entropy and time sources consumed by the generator.
//!
//! Both traits take `&self` so one instance can be shared across threads;
//! implementations acquire fresh state on every call.

use chrono::{DateTime, Utc};

use crate::error::UuidError;

/// 100-nanosecond intervals between 1582-10-15T00:00:00Z and the Unix epoch.
pub const UUID_EPOCH_OFFSET_TICKS: u64 = 0x01B2_1DD2_1381_4000;

/// Milliseconds between 1582-10-15T00:00:00Z and the Unix epoch.
pub const UUID_EPOCH_OFFSET_MS: i64 = 12_219_292_800_000;

const MAX_TICKS: i128 = (1 << 60) - 1;
const MAX_UNIX_MS: i64 = (1 << 48) - 1;

/// Supplier of cryptographically strong random bytes.
pub trait ByteSource {
    /// Fill `dst` entirely or fail with [`UuidError::EntropyUnavailable`].
    fn fill(&self, dst: &mut [u8]) -> Result<(), UuidError>;

    /// Return `N` fresh random bytes.
    fn random<const N: usize>(&self) -> Result<[u8; N], UuidError>
    where
        Self: Sized,
    {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }
}

/// Operating-system CSPRNG via `getrandom`.
///
/// There is no fallback: if the OS source fails the error is surfaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl ByteSource for OsRandom {
    fn fill(&self, dst: &mut [u8]) -> Result<(), UuidError> {
        getrandom::fill(dst).map_err(|e| {
            tracing::warn!(error = %e, "OS random source failed");
            UuidError::EntropyUnavailable(e.to_string())
        })
    }
}

/// Wall-clock reader.
///
/// Backward jumps of the underlying clock are passed through; identifiers
/// generated across such a jump stay valid but lose time ordering.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// 60-bit count of 100ns ticks since 1582-10-15T00:00:00Z.
    fn ticks_100ns(&self) -> u64 {
        let now = self.now();
        let unix_ticks =
            now.timestamp() as i128 * 10_000_000 + (now.timestamp_subsec_nanos() / 100) as i128;
        (unix_ticks + UUID_EPOCH_OFFSET_TICKS as i128).clamp(0, MAX_TICKS) as u64
    }

    /// 48-bit count of milliseconds since the Unix epoch.
    fn unix_millis(&self) -> u64 {
        self.now().timestamp_millis().clamp(0, MAX_UNIX_MS) as u64
    }
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
