//! The random-number capability consumed by the network core.

use rn_core::Real;

/// Random-number collaborator injected into the network.
///
/// Three primitives cover everything the core needs: node-value
/// initialization (`fill_normal`), per-node degree targets (`poisson`)
/// and candidate-neighbor selection (`uniform_int`).
///
/// Degenerate inputs follow the same lenient contract as the rest of the
/// system: they yield a quiet default instead of an error.
pub trait RandomSource {
    /// Fill `out` with independent standard-normal draws.
    fn fill_normal(&mut self, out: &mut [Real]);

    /// One Poisson-distributed draw with the given mean.
    ///
    /// A non-positive or non-finite mean yields 0.
    fn poisson(&mut self, mean: f64) -> usize;

    /// One uniform draw from the inclusive range `[lo, hi]`.
    ///
    /// A degenerate range (`hi < lo`) yields `lo`.
    fn uniform_int(&mut self, lo: usize, hi: usize) -> usize;
}
