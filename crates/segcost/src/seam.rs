//! Reassembling records cut by byte-offset splits.

use crate::cost::Measure;

/// What one range contributes when its edges ignore record boundaries.
///
/// Produced by [`scan_edges`](crate::scan_edges).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Partial {
    /// Cost of the records lying entirely inside the range.
    pub interior: u64,
    /// Bytes before the first delimiter: the tail of a record that started
    /// at or before the range start.
    pub leading: Measure,
    /// Bytes after the last delimiter: the head of a record that continues
    /// past the range end.
    pub trailing: Measure,
    /// Whether the range holds at least one delimiter. When unset, `leading`
    /// covers the whole range and `trailing` is empty.
    pub delimited: bool,
}

impl Partial {
    /// A range that is entirely the middle of one record.
    #[must_use]
    pub const fn pass_through(fragment: Measure) -> Self {
        Self {
            interior: 0,
            leading: fragment,
            trailing: Measure::EMPTY,
            delimited: false,
        }
    }
}

/// Combine per-range partials, in buffer order, into the total cost.
///
/// The record open at each seam is assembled from the trailing fragment on
/// its left and the leading fragment on its right, and costed exactly once.
/// Ranges without a delimiter extend the open record across several seams.
/// A non-empty record still open at the end of the buffer is costed as an
/// unterminated final record.
///
/// ```rust
/// use segcost::{reconcile, scan_edges};
///
/// let buf = b"ab\ncd\nef";
/// let partials = [scan_edges(&buf[..4]), scan_edges(&buf[4..])];
/// assert_eq!(reconcile(partials), 39);
/// ```
#[must_use]
pub fn reconcile<I>(partials: I) -> u64
where
    I: IntoIterator<Item = Partial>,
{
    let mut total = 0;
    let mut open = Measure::EMPTY;
    for partial in partials {
        if partial.delimited {
            total += (open + partial.leading).cost() + partial.interior;
            open = partial.trailing;
        } else {
            open += partial.leading;
        }
    }
    if !open.is_empty() {
        total += open.cost();
    }
    total
}
