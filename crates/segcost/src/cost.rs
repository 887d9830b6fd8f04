//! Tiered cost of a single record.
//!
//! A record is billed on two measures at once: how many characters it holds
//! and how many bytes those characters take once encoded. Short records in
//! both measures are the most valuable; records that are long in both are
//! worth nothing.

use core::ops::{Add, AddAssign};

/// Records of at most this many characters count as "short".
pub const MAX_SHORT_CHARS: usize = 140;

/// Records of at most this many bytes count as "small".
pub const MAX_SMALL_BYTES: usize = 160;

/// Cost of a record that is both short and small.
pub const COST_SHORT_SMALL: u64 = 13;

/// Cost of a small record with too many characters.
pub const COST_SMALL_ONLY: u64 = 11;

/// Cost of a short record with too many bytes.
pub const COST_SHORT_ONLY: u64 = 7;

/// Cost of a record that is neither short nor small.
pub const COST_OVERSIZED: u64 = 0;

/// Map a record's character count and byte length to its cost.
///
/// ```rust
/// use segcost::record_cost;
///
/// assert_eq!(record_cost(0, 0), 13);
/// assert_eq!(record_cost(141, 150), 11);
/// assert_eq!(record_cost(100, 161), 7);
/// assert_eq!(record_cost(200, 300), 0);
/// ```
#[must_use]
#[inline]
pub const fn record_cost(chars: usize, bytes: usize) -> u64 {
    let short = chars <= MAX_SHORT_CHARS;
    let small = bytes <= MAX_SMALL_BYTES;
    match (short, small) {
        (true, true) => COST_SHORT_SMALL,
        (false, true) => COST_SMALL_ONLY,
        (true, false) => COST_SHORT_ONLY,
        (false, false) => COST_OVERSIZED,
    }
}

/// Character count and byte length of a record or of a piece of one.
///
/// Measures of adjacent pieces add up to the measure of the whole, even when
/// the split falls inside a multi-byte character: a character is counted with
/// its lead byte, and continuation bytes only add to `bytes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure {
    /// Number of Unicode scalar values.
    pub chars: usize,
    /// Number of encoded bytes.
    pub bytes: usize,
}

impl Measure {
    /// The measure of an empty record.
    pub const EMPTY: Self = Self { chars: 0, bytes: 0 };

    /// Measure a run of UTF-8 encoded bytes.
    ///
    /// The run does not need to start or end on a character boundary.
    #[must_use]
    #[inline]
    pub fn of(bytes: &[u8]) -> Self {
        Self {
            chars: count_chars(bytes),
            bytes: bytes.len(),
        }
    }

    /// `true` when no bytes have been measured.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bytes == 0
    }

    /// Cost of a record with this measure.
    #[must_use]
    #[inline]
    pub const fn cost(self) -> u64 {
        record_cost(self.chars, self.bytes)
    }
}

impl Add for Measure {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            chars: self.chars + rhs.chars,
            bytes: self.bytes + rhs.bytes,
        }
    }
}

impl AddAssign for Measure {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Count the bytes that start a UTF-8 sequence, i.e. everything except
/// `0b10xx_xxxx` continuation bytes.
#[inline]
#[expect(clippy::cast_possible_wrap)]
fn count_chars(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| (b as i8) >= -0x40).count()
}
