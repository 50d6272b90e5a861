//! The two sample trees: a six-node tree with a gap on the last level, and a
//! seven-node perfect tree built from descending values.

use tracing::{info, instrument};

use crate::report::TreeReport;

pub fn demo_sequences() -> Vec<Vec<i64>> {
    vec![vec![1, 2, 3, 4, 5, 6], vec![6, 5, 4, 3, 2, 1, 0]]
}

/// Builds one report per sequence, numbered from 1.
#[instrument(level = "debug", skip(sequences))]
pub fn run_demo(sequences: &[Vec<i64>]) -> Vec<(usize, TreeReport<i64>)> {
    sequences
        .iter()
        .enumerate()
        .map(|(i, values)| {
            info!(tree = i + 1, count = values.len(), "building demo tree");
            (i + 1, TreeReport::from_values(values))
        })
        .collect()
}
