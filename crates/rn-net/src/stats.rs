//! Reporting statistics over a network.
//!
//! Read-only summaries consumed by front ends; nothing here mutates the
//! network.

use rn_rand::RandomSource;

use crate::network::Network;

/// Histogram of realized degrees: entry `d` counts nodes of degree `d`.
///
/// Empty for an empty network; otherwise sized to the maximum degree
/// plus one, so the entries sum to the node count.
pub fn degree_histogram<R: RandomSource>(network: &Network<R>) -> Vec<usize> {
    let degrees: Vec<usize> = (0..network.size()).map(|n| network.degree(n)).collect();
    let max = match degrees.iter().max() {
        Some(&max) => max,
        None => return Vec::new(),
    };

    let mut histogram = vec![0; max + 1];
    for degree in degrees {
        histogram[degree] += 1;
    }
    histogram
}

/// Average realized degree (`0.0` for an empty network).
pub fn mean_degree<R: RandomSource>(network: &Network<R>) -> f64 {
    if network.size() == 0 {
        return 0.0;
    }
    let total: usize = (0..network.size()).map(|n| network.degree(n)).sum();
    total as f64 / network.size() as f64
}
