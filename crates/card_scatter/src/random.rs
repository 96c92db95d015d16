//! Uniform draws on top of a raw [`RngCore`].
//!
//! Everything in the crate that needs randomness goes through these helpers so a
//! single seeded generator reproduces a whole session.
use rand::Rng as RngCore;

/// Generate a random float in the range [0, 1) from the top 24 bits of a `u32`.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Generate a random double in the range [0, 1) from the top 53 bits of a `u64`.
#[inline]
pub(crate) fn rand01_f64(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform float in `[lo, hi]`. Bounds may be given in either order.
#[inline]
pub(crate) fn range_f32(rng: &mut dyn RngCore, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    (lo + rand01(rng) * (hi - lo)).clamp(lo, hi)
}

/// Uniform integer in `[lo, hi]` inclusive. Returns `lo` when `hi <= lo`.
#[inline]
pub(crate) fn range_inclusive_u32(rng: &mut dyn RngCore, lo: u32, hi: u32) -> u32 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo) as u64 + 1;
    let offset = ((rng.next_u32() as u64 * span) >> 32) as u32;
    lo + offset
}

/// Uniform index in `[0, len)`. `len` must be non-zero.
#[inline]
pub(crate) fn index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0, "index() needs a non-empty range");
    ((rng.next_u64() as u128 * len as u128) >> 64) as usize
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Generator that always returns the same word; handy to pin a draw.
    pub(crate) struct FixedRng {
        pub value: u32,
    }

    impl rand::TryRng for FixedRng {
        type Error = core::convert::Infallible;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Ok(self.value)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Ok(((self.value as u64) << 32) | self.value as u64)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Self::Error> {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
            Ok(())
        }
    }

    #[test]
    fn rand01_bounds() {
        assert_eq!(rand01(&mut FixedRng { value: 0 }), 0.0);
        let top = rand01(&mut FixedRng { value: u32::MAX });
        assert!(top < 1.0);
        assert!(top > 0.9999);
    }

    #[test]
    fn rand01_f64_stays_below_one() {
        let top = rand01_f64(&mut FixedRng { value: u32::MAX });
        assert!(top < 1.0);
        assert!(top > 0.999);
    }

    #[test]
    fn range_inclusive_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let v = range_inclusive_u32(&mut rng, 3, 6);
            assert!((3..=6).contains(&v));
            seen[(v - 3) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn range_inclusive_degenerate_returns_lo() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(range_inclusive_u32(&mut rng, 10, 10), 10);
        assert_eq!(range_inclusive_u32(&mut rng, 10, 2), 10);
    }

    #[test]
    fn range_f32_accepts_swapped_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let v = range_f32(&mut rng, 180.0, -180.0);
            assert!((-180.0..=180.0).contains(&v));
        }
    }

    #[test]
    fn index_is_in_range() {
        let mut rng = StdRng::seed_from_u64(77);
        for len in 1..20 {
            assert!(index(&mut rng, len) < len);
        }
        assert_eq!(index(&mut FixedRng { value: u32::MAX }, 3), 2);
    }
}
