//! Tiered cost of newline-delimited text.
//!
//! Every record (a run of bytes terminated by `\n`, or the non-empty tail
//! after the last one) is billed by [`record_cost`] on its character count
//! and byte length. The total can be computed with one sequential scan, or
//! split across threads in two ways that always agree with it:
//!
//! - [`total_cost_aligned`] moves every split point to just after a
//!   delimiter, so no thread ever sees part of a record.
//! - [`total_cost_naive`] splits at even byte offsets and combines the
//!   records cut at each seam with [`reconcile`].
//!
//! ```rust
//! use segcost::{Strategy, TallyOptions, tally};
//!
//! let text = "hello\nwörld\n";
//! for strategy in Strategy::ALL {
//!     let options = TallyOptions::with_workers(4)?.strategy(strategy);
//!     assert_eq!(tally(text, options), 26);
//! }
//! # Ok::<(), segcost::OptionsError>(())
//! ```
//!
//! Without the default `std` feature the crate is `no_std` + `alloc` and
//! provides the sequential scans, the splitters and the reconciler only.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod cost;
mod error;
mod options;
mod partition;
mod scan;
mod seam;

#[cfg(feature = "std")]
mod parallel;

#[cfg(test)]
mod tests;

pub use cost::{
    COST_OVERSIZED, COST_SHORT_ONLY, COST_SHORT_SMALL, COST_SMALL_ONLY, MAX_SHORT_CHARS,
    MAX_SMALL_BYTES, Measure, record_cost,
};
pub use error::OptionsError;
pub use options::{Strategy, TallyOptions};
#[cfg(feature = "std")]
pub use parallel::{total_cost_aligned, total_cost_naive};
pub use partition::{AlignedSplits, EvenSplits, aligned_ranges, even_ranges};
pub use scan::{DELIMITER, scan_edges, total_cost, total_cost_with_trailing};
pub use seam::{Partial, reconcile};

/// Total cost of `text` using the strategy and worker count in `options`.
#[cfg(feature = "std")]
#[must_use]
pub fn tally(text: &str, options: TallyOptions) -> u64 {
    match options.strategy {
        Strategy::Sequential => total_cost(text.as_bytes()),
        Strategy::Aligned => total_cost_aligned(text, options.workers),
        Strategy::Naive => total_cost_naive(text, options.workers),
    }
}
