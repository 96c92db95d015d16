//! Priority-weighted, capacity-capped selection of a [crate::spawn::SpawnableKind].
//!
//! - [pick_weighted_capped]: draws one eligible kind proportionally to its priority and
//!   bumps its `current_count`.
//! - [select_kind]: same draw, returning the chosen kind instead of its index.
//! - [WeightedPrefabSelector]: the selector a session is built with.
//!
//! Zero priorities weigh as [crate::spawn::DEFAULT_PRIORITY], so callers need not
//! normalize kinds first.
//!
//! A kind is eligible while it has capacity left (see
//! [crate::spawn::SpawnableKind::has_capacity]). When randomness is required, pass an RNG
//! that implements [rand::RngCore].
use rand::Rng as RngCore;

use crate::random::rand01_f64;
use crate::spawn::SpawnableKind;

/// Picks an eligible kind weighted by priority and increments its counter.
///
/// Returns the index into `kinds`, or `None` when nothing is eligible. The draw
/// never fails once an eligible kind exists.
pub fn pick_weighted_capped<R: RngCore>(kinds: &mut [SpawnableKind], rng: &mut R) -> Option<usize> {
    let eligible: Vec<usize> = kinds
        .iter()
        .enumerate()
        .filter(|(_, k)| k.has_capacity())
        .map(|(i, _)| i)
        .collect();
    if eligible.is_empty() {
        return None;
    }

    let total: u64 = eligible.iter().map(|&i| kinds[i].weight()).sum();

    let roll = rand01_f64(rng) * total as f64;
    let mut cumulative = 0u64;
    let mut chosen = None;
    for &i in &eligible {
        cumulative += kinds[i].weight();
        if cumulative as f64 >= roll {
            chosen = Some(i);
            break;
        }
    }

    let index = chosen.unwrap_or(eligible[0]);
    kinds[index].current_count += 1;
    Some(index)
}

/// Like [pick_weighted_capped] but hands back the chosen kind.
pub fn select_kind<'a, R: RngCore>(
    kinds: &'a mut [SpawnableKind],
    rng: &mut R,
) -> Option<&'a SpawnableKind> {
    let index = pick_weighted_capped(kinds, rng)?;
    Some(&kinds[index])
}

/// Capped weighted selector used by [crate::spawn::session::SpawnCoordinator].
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedPrefabSelector;

impl WeightedPrefabSelector {
    pub fn new() -> Self {
        Self
    }

    /// Index of the chosen kind, see [pick_weighted_capped].
    #[inline]
    pub fn pick<R: RngCore>(&self, kinds: &mut [SpawnableKind], rng: &mut R) -> Option<usize> {
        pick_weighted_capped(kinds, rng)
    }

    /// The chosen kind, see [select_kind].
    pub fn select<'a, R: RngCore>(
        &self,
        kinds: &'a mut [SpawnableKind],
        rng: &mut R,
    ) -> Option<&'a SpawnableKind> {
        select_kind(kinds, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::random::tests::FixedRng;

    fn kind(id: &str, priority: u32, max_count: u32) -> SpawnableKind {
        SpawnableKind::new(id, priority).with_max_count(max_count)
    }

    #[test]
    fn weighted_pick_follows_cumulative_weights() {
        let mut kinds = vec![kind("a", 1, 0), kind("b", 3, 0)];

        let mut rng_first = FixedRng { value: 0 };
        assert_eq!(pick_weighted_capped(&mut kinds, &mut rng_first), Some(0));

        let mut rng_second = FixedRng {
            value: (0.8 * u32::MAX as f64) as u32,
        };
        assert_eq!(pick_weighted_capped(&mut kinds, &mut rng_second), Some(1));

        assert_eq!(kinds[0].current_count, 1);
        assert_eq!(kinds[1].current_count, 1);
    }

    #[test]
    fn empty_input_returns_none() {
        let mut kinds: Vec<SpawnableKind> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert!(pick_weighted_capped(&mut kinds, &mut rng).is_none());
        }
    }

    #[test]
    fn exhausted_kinds_return_none() {
        let mut kinds = vec![kind("a", 5, 1), kind("b", 2, 2)];
        kinds[0].current_count = 1;
        kinds[1].current_count = 2;
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..10 {
            assert!(select_kind(&mut kinds, &mut rng).is_none());
        }
        assert_eq!(kinds[0].current_count, 1);
        assert_eq!(kinds[1].current_count, 2);
    }

    #[test]
    fn zero_priority_counts_as_default_weight() {
        let mut kinds = vec![kind("zero", 0, 0), kind("three", 3, 0)];
        // 0.2 of a total weight of 4 lands inside the first kind's unit share.
        let mut rng = FixedRng {
            value: (0.2 * u32::MAX as f64) as u32,
        };
        assert_eq!(pick_weighted_capped(&mut kinds, &mut rng), Some(0));
        assert_eq!(kinds[0].priority, 0);

        let mut kinds = vec![kind("a", 0, 0), kind("b", 0, 0)];
        let mut rng = StdRng::seed_from_u64(3);
        assert!(pick_weighted_capped(&mut kinds, &mut rng).is_some());
    }

    #[test]
    fn caps_are_never_exceeded() {
        let mut kinds = vec![kind("a", 10, 3), kind("b", 1, 5), kind("c", 4, 0)];
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..500 {
            pick_weighted_capped(&mut kinds, &mut rng);
            assert!(kinds[0].current_count <= 3);
            assert!(kinds[1].current_count <= 5);
        }
        assert_eq!(kinds[0].current_count, 3);
        assert_eq!(kinds[1].current_count, 5);
        assert_eq!(kinds[2].current_count, 492);
    }

    #[test]
    fn capped_kinds_are_skipped() {
        let mut kinds = vec![kind("a", 100, 1), kind("b", 1, 0)];
        kinds[0].current_count = 1;
        let mut rng = StdRng::seed_from_u64(5);
        let picked = select_kind(&mut kinds, &mut rng).map(|k| k.id.clone());
        assert_eq!(picked.as_deref(), Some("b"));
    }

    #[test]
    fn selector_draws_and_counts() {
        let selector = WeightedPrefabSelector::new();
        let mut kinds = vec![kind("a", 1, 1), kind("b", 1, 1)];
        let mut rng = StdRng::seed_from_u64(6);

        let first = selector.select(&mut kinds, &mut rng).map(|k| k.id.clone());
        assert!(first.is_some());
        assert!(selector.pick(&mut kinds, &mut rng).is_some());
        assert!(selector.select(&mut kinds, &mut rng).is_none());
        assert_eq!(kinds[0].current_count, 1);
        assert_eq!(kinds[1].current_count, 1);
    }

    #[test]
    fn priorities_set_relative_frequency() {
        let mut kinds = vec![kind("a", 1, 0), kind("b", 3, 0)];
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut counts = [0u32; 2];
        for _ in 0..10_000 {
            let i = pick_weighted_capped(&mut kinds, &mut rng).unwrap();
            counts[i] += 1;
        }
        let ratio = counts[1] as f64 / counts[0] as f64;
        assert!((2.6..3.4).contains(&ratio), "ratio {ratio} outside tolerance");
    }
}
