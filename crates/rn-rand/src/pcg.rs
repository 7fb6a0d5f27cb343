//! PCG-backed production source.

use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Poisson};
use rand_pcg::Pcg64Mcg;
use rn_core::Real;

use crate::source::RandomSource;

/// Production random source backed by a PCG-64 generator.
///
/// Construct with [`PcgSource::seeded`] for bit-reproducible runs, or
/// [`PcgSource::from_entropy`] when replay doesn't matter.
#[derive(Debug, Clone)]
pub struct PcgSource {
    rng: Pcg64Mcg,
    normal: Normal<f64>,
}

impl PcgSource {
    /// Create a source from an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Pcg64Mcg::seed_from_u64(seed))
    }

    /// Create a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(Pcg64Mcg::from_entropy())
    }

    fn with_rng(rng: Pcg64Mcg) -> Self {
        Self {
            rng,
            // sd = 1 is always a valid parameterization
            normal: Normal::new(0.0, 1.0).expect("standard normal parameters"),
        }
    }
}

impl RandomSource for PcgSource {
    fn fill_normal(&mut self, out: &mut [Real]) {
        for slot in out.iter_mut() {
            *slot = self.normal.sample(&mut self.rng);
        }
    }

    fn poisson(&mut self, mean: f64) -> usize {
        if !mean.is_finite() || mean <= 0.0 {
            return 0;
        }
        match Poisson::new(mean) {
            Ok(dist) => dist.sample(&mut self.rng) as usize,
            Err(_) => 0,
        }
    }

    fn uniform_int(&mut self, lo: usize, hi: usize) -> usize {
        if hi < lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rn_core::{Tolerances, nearly_equal};

    #[test]
    fn seeded_sources_replay_identically() {
        let mut a = PcgSource::seeded(42);
        let mut b = PcgSource::seeded(42);

        let mut va = vec![0.0; 16];
        let mut vb = vec![0.0; 16];
        a.fill_normal(&mut va);
        b.fill_normal(&mut vb);
        assert_eq!(va, vb);

        for _ in 0..100 {
            assert_eq!(a.poisson(3.0), b.poisson(3.0));
            assert_eq!(a.uniform_int(0, 9), b.uniform_int(0, 9));
        }
    }

    #[test]
    fn uniform_int_stays_in_bounds() {
        let mut source = PcgSource::seeded(7);
        for _ in 0..1000 {
            let draw = source.uniform_int(3, 11);
            assert!((3..=11).contains(&draw));
        }
    }

    #[test]
    fn uniform_int_degenerate_range_yields_lo() {
        let mut source = PcgSource::seeded(7);
        assert_eq!(source.uniform_int(5, 2), 5);
        assert_eq!(source.uniform_int(4, 4), 4);
    }

    #[test]
    fn poisson_lenient_on_bad_mean() {
        let mut source = PcgSource::seeded(7);
        assert_eq!(source.poisson(0.0), 0);
        assert_eq!(source.poisson(-3.0), 0);
        assert_eq!(source.poisson(f64::NAN), 0);
        assert_eq!(source.poisson(f64::INFINITY), 0);
    }

    #[test]
    fn poisson_sample_mean_tracks_parameter() {
        // Deterministic under the fixed seed; the bound is deliberately loose.
        let mut source = PcgSource::seeded(123);
        let n = 2000;
        let total: usize = (0..n).map(|_| source.poisson(4.0)).sum();
        let mean = total as f64 / n as f64;
        assert!(mean > 3.5 && mean < 4.5, "sample mean {mean} far from 4.0");
    }

    #[test]
    fn fill_normal_populates_every_slot() {
        let mut source = PcgSource::seeded(99);
        let mut values = vec![f64::NAN; 64];
        source.fill_normal(&mut values);
        assert!(values.iter().all(|v| v.is_finite()));
        // Standard normal draws are almost surely distinct.
        let tol = Tolerances::default();
        assert!(!nearly_equal(values[0], values[1], tol));
    }
}
