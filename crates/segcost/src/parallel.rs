//! Multi-threaded reducers.
//!
//! Every call spawns one scoped thread per non-empty range and joins them all
//! before returning, so a worker count above the buffer length only leaves
//! workers idle. Threads only read the shared buffer; nothing outlives the
//! call.

use core::{
    num::NonZeroUsize,
    sync::atomic::{AtomicU64, Ordering},
};
use std::{thread, vec::Vec};

use tracing::{debug, trace};

use crate::{
    partition::{AlignedSplits, EvenSplits},
    scan::{scan_edges, total_cost},
    seam::{Partial, reconcile},
};

/// Total cost of `text`, reduced over `workers` delimiter-aligned ranges.
///
/// No range cuts a record, so each thread costs its range independently and
/// adds the result to a shared atomic counter. Equal to
/// [`total_cost`] over the whole buffer for every worker count.
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use segcost::total_cost_aligned;
///
/// let workers = NonZeroUsize::new(2).unwrap();
/// assert_eq!(total_cost_aligned("ab\ncd\n", workers), 26);
/// ```
#[must_use]
pub fn total_cost_aligned(text: &str, workers: NonZeroUsize) -> u64 {
    let buf = text.as_bytes();
    debug!(workers = workers.get(), len = buf.len(), "aligned reduction");

    let total = AtomicU64::new(0);
    thread::scope(|s| {
        // Once a range starts at the end of the buffer, every later one is empty.
        let ranges = AlignedSplits::new(buf, workers).take_while(|r| r.start < buf.len());
        for range in ranges {
            let total = &total;
            s.spawn(move || {
                let cost = total_cost(&buf[range.clone()]);
                trace!(?range, cost, "aligned range");
                total.fetch_add(cost, Ordering::Relaxed);
            });
        }
    });
    total.into_inner()
}

/// Total cost of `text`, reduced over `workers` ranges of equal byte length.
///
/// Ranges are cut without regard to records or characters. Each thread
/// returns a [`Partial`] through its join handle, and the calling thread
/// stitches the cut records back together with [`reconcile`]. Equal to
/// [`total_cost`] over the whole buffer for every worker count.
///
/// # Panics
///
/// Re-raises the panic of a worker thread. Scanning does not panic.
#[must_use]
pub fn total_cost_naive(text: &str, workers: NonZeroUsize) -> u64 {
    let buf = text.as_bytes();
    debug!(workers = workers.get(), len = buf.len(), "naive reduction");

    let partials: Vec<Partial> = thread::scope(|s| {
        // An empty range is a pass-through of nothing and leaves `reconcile`
        // unchanged.
        let handles: Vec<_> = EvenSplits::new(buf.len(), workers)
            .filter(|r| !r.is_empty())
            .map(|range| {
                s.spawn(move || {
                    let partial = scan_edges(&buf[range.clone()]);
                    trace!(?range, ?partial, "naive range");
                    partial
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });
    reconcile(partials)
}
