//! Sequential scans over a byte range.
//!
//! Records are never copied: the scan walks delimiter positions with a
//! memchr search and measures the bytes in between in place.

use bstr::ByteSlice;

use crate::{cost::Measure, seam::Partial};

/// The byte that terminates a record.
pub const DELIMITER: u8 = b'\n';

/// Total cost of every record in `buf`.
///
/// Each delimiter closes one record, so `"\n"` holds a single empty record.
/// Bytes after the last delimiter form one more record, counted once, unless
/// they are empty.
///
/// ```rust
/// use segcost::total_cost;
///
/// assert_eq!(total_cost(b"ab\ncd\n"), 26);
/// assert_eq!(total_cost(b"ab\ncd"), 26);
/// assert_eq!(total_cost(b""), 0);
/// ```
#[must_use]
pub fn total_cost(buf: &[u8]) -> u64 {
    let (total, trailing) = total_cost_with_trailing(buf);
    if trailing.is_empty() {
        total
    } else {
        total + trailing.cost()
    }
}

/// Cost of the delimiter-terminated records in `buf`, plus the measure of
/// whatever follows the last delimiter.
///
/// The trailing measure is not folded into the total.
#[must_use]
pub fn total_cost_with_trailing(buf: &[u8]) -> (u64, Measure) {
    let mut records = Terminated::new(buf);
    let total = records.by_ref().map(Measure::cost).sum();
    (total, records.remainder())
}

/// Scan a range whose edges may fall inside records.
///
/// The record running into the range from the left and the one running out
/// of it on the right are only measured, never costed: their other pieces
/// live in neighbouring ranges. Everything strictly between the first and
/// the last delimiter is costed into [`Partial::interior`].
///
/// A range without any delimiter is entirely the middle of some record; it
/// is reported as a leading fragment with [`Partial::delimited`] unset.
#[must_use]
pub fn scan_edges(range: &[u8]) -> Partial {
    let Some(first) = range.find_byte(DELIMITER) else {
        return Partial::pass_through(Measure::of(range));
    };
    // `first` exists, so the reverse search always finds a delimiter.
    let last = range.rfind_byte(DELIMITER).unwrap_or(first);

    let (interior, rest) = total_cost_with_trailing(&range[first + 1..=last]);
    debug_assert!(rest.is_empty());

    Partial {
        interior,
        leading: Measure::of(&range[..first]),
        trailing: Measure::of(&range[last + 1..]),
        delimited: true,
    }
}

/// Iterator over the measures of delimiter-terminated records.
#[derive(Debug, Clone)]
pub(crate) struct Terminated<'a> {
    rest: &'a [u8],
}

impl<'a> Terminated<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { rest: buf }
    }

    /// Measure of the unterminated bytes left after iteration stopped.
    pub(crate) fn remainder(&self) -> Measure {
        Measure::of(self.rest)
    }
}

impl Iterator for Terminated<'_> {
    type Item = Measure;

    #[inline]
    fn next(&mut self) -> Option<Measure> {
        let at = self.rest.find_byte(DELIMITER)?;
        let record = &self.rest[..at];
        self.rest = &self.rest[at + 1..];
        Some(Measure::of(record))
    }
}
