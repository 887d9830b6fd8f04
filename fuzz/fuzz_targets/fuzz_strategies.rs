#![no_main]

use std::num::NonZeroUsize;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use segcost::{
    DELIMITER, aligned_ranges, even_ranges, reconcile, scan_edges, total_cost,
    total_cost_aligned, total_cost_naive,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    workers: u8,
    text: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let workers = NonZeroUsize::MIN.saturating_add(usize::from(input.workers));
    let text = input.text;
    let buf = text.as_bytes();
    let expected = total_cost(buf);

    let ranges = aligned_ranges(buf, workers);
    assert_eq!(ranges.len(), workers.get());
    assert_eq!(ranges.last().map(|r| r.end), Some(buf.len()));
    for pair in ranges.windows(2) {
        let at = pair[0].end;
        assert_eq!(at, pair[1].start);
        assert!(at == 0 || at == buf.len() || buf[at - 1] == DELIMITER);
    }

    let partials = even_ranges(buf.len(), workers)
        .into_iter()
        .map(|r| scan_edges(&buf[r]));
    assert_eq!(reconcile(partials), expected);

    assert_eq!(total_cost_aligned(text, workers), expected);
    assert_eq!(total_cost_naive(text, workers), expected);
});
