//! Time-ordered 64-bit ids for users and posts.
//!
//! The high bits hold a millisecond timestamp, so `ORDER BY id DESC` is
//! already the feed's newest-first order and no separate sort column is
//! needed. The remaining bits carry a worker id and a per-millisecond
//! sequence:
//!
//! - bits 63-22: milliseconds since 2024-01-01 00:00:00 UTC
//! - bits 21-12: worker id (0-1023)
//! - bits 11-0:  sequence (0-4095)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds between the Unix epoch and 2024-01-01 00:00:00 UTC.
const EPOCH_MS: i64 = 1_704_067_200_000;

const SEQUENCE_BITS: u8 = 12;
const WORKER_BITS: u8 = 10;
const TIMESTAMP_SHIFT: u8 = SEQUENCE_BITS + WORKER_BITS;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;
const WORKER_LIMIT: u16 = 1 << WORKER_BITS;

/// Time-ordered 64-bit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Wrap a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Unwrap to the raw i64 (the database column type)
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch at which this id was minted
    #[inline]
    pub fn timestamp_ms(&self) -> i64 {
        (self.0 >> TIMESTAMP_SHIFT) + EPOCH_MS
    }

    /// Worker id of the generator that minted this id
    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) as u16) & (WORKER_LIMIT - 1)
    }

    /// Position within the minting millisecond
    #[inline]
    pub fn sequence(&self) -> u16 {
        (self.0 & SEQUENCE_MASK) as u16
    }

    /// Parse a decimal string, e.g. a URL path segment
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>().map(Self).map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Returned when a supposed id is not a decimal integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Always serialized as a string; 64-bit values overflow JavaScript numbers.
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Accepts either form on the way in; session records store strings.
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a snowflake id as a string or integer")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Snowflake, E> {
                Ok(Snowflake::new(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Snowflake, E> {
                Ok(Snowflake::new(value as i64))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Snowflake, E> {
                Snowflake::parse(value).map_err(|_| de::Error::custom("invalid snowflake string"))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Lock-free Snowflake generator.
///
/// The only shared in-process state in the application. A single atomic
/// word packs the last-used millisecond and sequence, advanced by
/// compare-and-swap, so up to 4096 ids per millisecond come out strictly
/// increasing even under thread contention.
pub struct SnowflakeGenerator {
    worker_id: u16,
    // (millis << SEQUENCE_BITS) | sequence
    state: AtomicI64,
}

impl SnowflakeGenerator {
    /// Create a generator for the given worker id
    ///
    /// # Panics
    /// Panics if `worker_id` does not fit in 10 bits.
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < WORKER_LIMIT, "worker id out of range");
        Self {
            worker_id,
            state: AtomicI64::new(0),
        }
    }

    /// Mint the next id
    pub fn generate(&self) -> Snowflake {
        loop {
            let observed = self.state.load(Ordering::Acquire);
            let last_ms = observed >> SEQUENCE_BITS;

            let mut now = now_ms();
            if now < last_ms {
                // Clock went backwards; hold until it catches up
                std::thread::sleep(std::time::Duration::from_millis((last_ms - now) as u64));
                now = now_ms();
            }

            let next = if now == last_ms {
                if (observed & SEQUENCE_MASK) == SEQUENCE_MASK {
                    // Sequence exhausted, spin into the next millisecond
                    while now_ms() <= last_ms {
                        std::hint::spin_loop();
                    }
                    now_ms() << SEQUENCE_BITS
                } else {
                    observed + 1
                }
            } else {
                now << SEQUENCE_BITS
            };

            if self
                .state
                .compare_exchange(observed, next, Ordering::Release, Ordering::Relaxed)
                .is_ok()
            {
                let millis = next >> SEQUENCE_BITS;
                let id = ((millis - EPOCH_MS) << TIMESTAMP_SHIFT)
                    | (i64::from(self.worker_id) << SEQUENCE_BITS)
                    | (next & SEQUENCE_MASK);
                return Snowflake::new(id);
            }
            // Lost the race to another thread, reload and retry
        }
    }

    /// Worker id this generator stamps into every id
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[inline]
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as i64)
}
