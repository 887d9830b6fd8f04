use quickcheck::QuickCheck;

use super::arbitrary::{Text, Workers, test_count};
use crate::{Strategy, TallyOptions, tally, total_cost, total_cost_aligned, total_cost_naive};

/// Property: the aligned parallel reducer agrees with one sequential scan.
#[test]
fn aligned_matches_sequential_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, workers: Workers) -> bool {
        total_cost_aligned(&text.0, workers.0) == total_cost(text.0.as_bytes())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Text, Workers) -> bool);
}

/// Property: the naive parallel reducer, after seam reconciliation, agrees
/// with one sequential scan.
#[test]
fn naive_matches_sequential_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, workers: Workers) -> bool {
        total_cost_naive(&text.0, workers.0) == total_cost(text.0.as_bytes())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Text, Workers) -> bool);
}

/// Property: reducing twice yields the same total for every strategy.
#[test]
fn repeated_tally_is_stable_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, workers: Workers) -> bool {
        Strategy::ALL.into_iter().all(|strategy| {
            let options = TallyOptions {
                workers: workers.0,
                strategy,
            };
            tally(&text.0, options) == tally(&text.0, options)
        })
    }

    QuickCheck::new()
        .tests(test_count() / 10)
        .quickcheck(prop as fn(Text, Workers) -> bool);
}
