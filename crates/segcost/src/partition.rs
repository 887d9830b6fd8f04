//! Splitting a buffer into contiguous ranges, one per worker.
//!
//! Both splitters always yield exactly as many ranges as requested. The
//! ranges are ordered, disjoint and cover the buffer; some may be empty when
//! there is not enough input to go around.

use alloc::vec::Vec;
use core::{iter::FusedIterator, num::NonZeroUsize, ops::Range};

use bstr::ByteSlice;

use crate::scan::DELIMITER;

/// Ranges whose inner boundaries sit immediately after a delimiter.
///
/// Each boundary starts from an even share of what is left,
/// `(len - pos) / workers_left`, and then walks forward to just past the
/// next delimiter, or to the end of the buffer if there is none. Shrinking
/// the divisor as ranges are handed out spreads the remaining bytes over the
/// remaining workers, so one long record does not push all the slack onto
/// the last range.
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use segcost::AlignedSplits;
///
/// let workers = NonZeroUsize::new(2).unwrap();
/// let ranges: Vec<_> = AlignedSplits::new(b"ab\ncd\nef\n", workers).collect();
/// assert_eq!(ranges, [0..6, 6..9]);
/// ```
#[derive(Debug, Clone)]
pub struct AlignedSplits<'a> {
    buf: &'a [u8],
    pos: usize,
    index: usize,
    count: usize,
}

impl<'a> AlignedSplits<'a> {
    /// Split `buf` into `workers` delimiter-aligned ranges.
    #[must_use]
    pub fn new(buf: &'a [u8], workers: NonZeroUsize) -> Self {
        Self {
            buf,
            pos: 0,
            index: 0,
            count: workers.get(),
        }
    }

    fn next_boundary(&self) -> usize {
        let len = self.buf.len();
        let workers_left = self.count - self.index;
        let target = self.pos + (len - self.pos) / workers_left;
        match self.buf[target..].find_byte(DELIMITER) {
            Some(at) => target + at + 1,
            None => len,
        }
    }
}

impl Iterator for AlignedSplits<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.index == self.count {
            return None;
        }
        let end = if self.index + 1 == self.count {
            self.buf.len()
        } else {
            self.next_boundary()
        };
        let range = self.pos..end;
        self.pos = end;
        self.index += 1;
        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for AlignedSplits<'_> {}

impl FusedIterator for AlignedSplits<'_> {}

/// Collect the delimiter-aligned ranges of `buf`.
#[must_use]
pub fn aligned_ranges(buf: &[u8], workers: NonZeroUsize) -> Vec<Range<usize>> {
    AlignedSplits::new(buf, workers).collect()
}

/// Ranges of `len / workers` bytes each, with the last range taking the
/// remainder.
///
/// Boundaries ignore both record delimiters and UTF-8 character boundaries.
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use segcost::EvenSplits;
///
/// let workers = NonZeroUsize::new(3).unwrap();
/// let ranges: Vec<_> = EvenSplits::new(11, workers).collect();
/// assert_eq!(ranges, [0..3, 3..6, 6..11]);
/// ```
#[derive(Debug, Clone)]
pub struct EvenSplits {
    len: usize,
    chunk: usize,
    index: usize,
    count: usize,
}

impl EvenSplits {
    /// Split a buffer of `len` bytes into `workers` ranges.
    #[must_use]
    pub fn new(len: usize, workers: NonZeroUsize) -> Self {
        Self {
            len,
            chunk: len / workers,
            index: 0,
            count: workers.get(),
        }
    }
}

impl Iterator for EvenSplits {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.index == self.count {
            return None;
        }
        let start = self.chunk * self.index;
        self.index += 1;
        let end = if self.index == self.count {
            self.len
        } else {
            self.chunk * self.index
        };
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for EvenSplits {}

impl FusedIterator for EvenSplits {}

/// Collect the even byte ranges of a buffer of `len` bytes.
#[must_use]
pub fn even_ranges(len: usize, workers: NonZeroUsize) -> Vec<Range<usize>> {
    EvenSplits::new(len, workers).collect()
}
