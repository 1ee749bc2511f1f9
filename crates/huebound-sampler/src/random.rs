//! Integer draws over closed intervals, seeded or from entropy.
//!
//! The two modes differ at the top of the interval:
//!
//! - [`RandomSource::Entropy`] is uniform over every whole number in
//!   `[min, max]`, both ends included.
//! - [`RandomSource::Seeded`] computes `floor(min + t * (max - min))` with
//!   `t` in `[0, 1)`, so `max` itself is never produced.

use rand::RngExt;

// ---------------------------------------------------------------------------
// Lcg — the seeded generator
// ---------------------------------------------------------------------------

/// Linear congruential generator with the classic 9301/49297/233280
/// constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    const MULTIPLIER: i128 = 9301;
    const INCREMENT: i128 = 49297;
    const MODULUS: i128 = 233_280;

    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { state: seed }
    }

    /// The current state. Starts as the seed, then stays in `[0, 233280)`.
    #[must_use]
    pub const fn state(&self) -> i64 {
        self.state
    }

    /// Advance and return a fraction in `[0, 1)`.
    fn next_fraction(&mut self) -> f64 {
        // Widened so any i64 seed survives the multiply; the Euclidean
        // remainder keeps negative seeds inside the modulus too.
        let next = (i128::from(self.state) * Self::MULTIPLIER + Self::INCREMENT)
            .rem_euclid(Self::MODULUS);
        self.state = next as i64;
        self.state as f64 / Self::MODULUS as f64
    }

    /// Draw `floor(min + t * (max - min))`.
    ///
    /// A `max` of exactly 0 is read as 1.
    pub fn within(&mut self, min: f64, max: f64) -> f64 {
        let max = if max == 0.0 { 1.0 } else { max };
        let t = self.next_fraction();
        (min + t * (max - min)).floor()
    }
}

// ---------------------------------------------------------------------------
// RandomSource
// ---------------------------------------------------------------------------

/// Where a sampler's draws come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomSource {
    /// Reproducible draws from a seed.
    Seeded(Lcg),
    /// Fresh draws from the thread-local generator.
    Entropy,
}

impl RandomSource {
    #[must_use]
    pub const fn new(seed: Option<i64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Lcg::new(seed)),
            None => Self::Entropy,
        }
    }

    /// Draw a whole number from `[min, max]` (see the module docs for the
    /// seeded upper bound).
    pub fn within(&mut self, min: f64, max: f64) -> f64 {
        match self {
            Self::Seeded(lcg) => lcg.within(min, max),
            Self::Entropy => entropy_within(min, max),
        }
    }
}

/// Uniform whole number in `[ceil(min), floor(max)]`.
///
/// A degenerate interval with no whole number inside (e.g. a single
/// fractional hue) yields `floor(min)`.
fn entropy_within(min: f64, max: f64) -> f64 {
    let lo = min.ceil();
    let hi = max.floor();
    if lo > hi {
        return min.floor();
    }
    let mut rng = rand::rng();
    rng.random_range(lo as i64..=hi as i64) as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lcg_sequence_is_fixed() {
        let mut lcg = Lcg::new(42);
        lcg.next_fraction();
        assert_eq!(lcg.state(), (42 * 9301 + 49297) % 233_280);
        let first = lcg.state();
        lcg.next_fraction();
        assert_eq!(lcg.state(), (first * 9301 + 49297) % 233_280);
    }

    #[test]
    fn lcg_is_deterministic() {
        let mut a = Lcg::new(7);
        let mut b = Lcg::new(7);
        for _ in 0..100 {
            assert_eq!(a.within(0.0, 360.0), b.within(0.0, 360.0));
        }
    }

    #[test]
    fn seeded_never_reaches_max() {
        let mut lcg = Lcg::new(1);
        for _ in 0..10_000 {
            let v = lcg.within(10.0, 20.0);
            assert!((10.0..20.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn seeded_zero_max_reads_as_one() {
        let mut lcg = Lcg::new(3);
        for _ in 0..100 {
            assert_eq!(lcg.within(0.0, 0.0), 0.0);
        }
    }

    #[test]
    fn seeded_handles_negative_and_huge_seeds() {
        for seed in [-1, -233_281, i64::MIN, i64::MAX] {
            let mut lcg = Lcg::new(seed);
            let v = lcg.within(0.0, 100.0);
            assert!((0.0..100.0).contains(&v), "seed {seed} drew {v}");
            assert!((0..233_280).contains(&lcg.state()));
        }
    }

    #[test]
    fn seeded_negative_interval() {
        let mut lcg = Lcg::new(11);
        for _ in 0..1000 {
            let v = lcg.within(-26.0, 18.0);
            assert!((-26.0..18.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn entropy_includes_both_ends() {
        let mut source = RandomSource::Entropy;
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = source.within(0.0, 2.0);
            seen[v as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn entropy_stays_inside_fractional_bounds() {
        let mut source = RandomSource::Entropy;
        for _ in 0..1000 {
            let v = source.within(42.5, 62.5);
            assert!((43.0..=62.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn entropy_degenerate_interval() {
        let mut source = RandomSource::Entropy;
        assert_eq!(source.within(210.0, 210.0), 210.0);
        assert_eq!(source.within(209.6, 209.6), 209.0);
    }

    #[test]
    fn new_picks_mode_from_seed() {
        assert_eq!(RandomSource::new(None), RandomSource::Entropy);
        assert_eq!(RandomSource::new(Some(5)), RandomSource::Seeded(Lcg::new(5)));
    }
}
