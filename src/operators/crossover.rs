//! Recombination operators.

use rand::{Rng, RngCore};

use crate::strategy::Crossover;

/// One-point crossover for permutations.
///
/// Chooses a cut point `k` uniformly in `[1, n-1]`. Offspring A is the
/// first `k` elements of parent 1 followed by parent 2's elements in
/// their original order, skipping any already present; offspring B is
/// symmetric with the parents swapped. Both offspring are valid
/// permutations of the same element set — no duplicates, no omissions.
///
/// # Panics
///
/// Panics unless given exactly two parents of equal length whose
/// elements lie in `[0, n)`.
#[derive(Debug, Clone, Copy)]
pub struct OnePointCrossover;

impl<C> Crossover<Vec<usize>, C> for OnePointCrossover {
    fn cross(&self, parents: &[&Vec<usize>], rng: &mut dyn RngCore, _context: &C) -> Vec<Vec<usize>> {
        assert_eq!(parents.len(), 2, "one-point crossover expects exactly two parents");
        let (p1, p2) = (parents[0], parents[1]);
        let n = p1.len();
        assert_eq!(n, p2.len(), "parents must have equal length");

        if n < 2 {
            return vec![p1.clone(), p2.clone()];
        }

        let k = rng.random_range(1..n);
        vec![splice(p1, p2, k), splice(p2, p1, k)]
    }
}

/// Builds one offspring: `head[..k]`, then `tail`'s elements in order,
/// skipping those already taken from `head`.
fn splice(head: &[usize], tail: &[usize], k: usize) -> Vec<usize> {
    let n = head.len();
    let mut child = Vec::with_capacity(n);
    let mut used = vec![false; n];
    for &v in &head[..k] {
        child.push(v);
        used[v] = true;
    }
    for &v in tail {
        if !used[v] {
            child.push(v);
        }
    }
    child
}

/// Uniform crossover for generic same-length sequences.
///
/// For each position, the pair of values is swapped independently with
/// probability 0.5, producing two offspring. Unlike
/// [`OnePointCrossover`] this does not preserve permutation validity;
/// use it for representations where positions are independent genes.
///
/// # Panics
///
/// Panics unless given exactly two parents of equal length.
#[derive(Debug, Clone, Copy)]
pub struct UniformCrossover;

impl<T: Clone, C> Crossover<Vec<T>, C> for UniformCrossover {
    fn cross(&self, parents: &[&Vec<T>], rng: &mut dyn RngCore, _context: &C) -> Vec<Vec<T>> {
        assert_eq!(parents.len(), 2, "uniform crossover expects exactly two parents");
        let (p1, p2) = (parents[0], parents[1]);
        assert_eq!(p1.len(), p2.len(), "parents must have equal length");

        let mut o1 = Vec::with_capacity(p1.len());
        let mut o2 = Vec::with_capacity(p2.len());
        for (a, b) in p1.iter().zip(p2.iter()) {
            if rng.random_bool(0.5) {
                o1.push(b.clone());
                o2.push(a.clone());
            } else {
                o1.push(a.clone());
                o2.push(b.clone());
            }
        }
        vec![o1, o2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let distinct: HashSet<usize> = perm.iter().copied().collect();
        distinct.len() == n && perm.iter().all(|&v| v < n)
    }

    // ---- One-point crossover ----

    #[test]
    fn test_one_point_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<usize> = (0..8).collect();
        let p2: Vec<usize> = (0..8).rev().collect();

        for _ in 0..100 {
            let offspring = OnePointCrossover.cross(&[&p1, &p2], &mut rng, &());
            assert_eq!(offspring.len(), 2);
            assert!(is_valid_permutation(&offspring[0], 8), "not valid: {:?}", offspring[0]);
            assert!(is_valid_permutation(&offspring[1], 8), "not valid: {:?}", offspring[1]);
        }
    }

    #[test]
    fn test_one_point_fixed_cut() {
        // With n = 2 the only cut point is k = 1, so the result is exact.
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0, 1];
        let p2 = vec![1, 0];
        let offspring = OnePointCrossover.cross(&[&p1, &p2], &mut rng, &());
        assert_eq!(offspring[0], vec![0, 1]);
        assert_eq!(offspring[1], vec![1, 0]);
    }

    #[test]
    fn test_one_point_head_is_preserved() {
        let mut rng = StdRng::seed_from_u64(9);
        let p1 = vec![3, 1, 4, 0, 2];
        let p2 = vec![0, 1, 2, 3, 4];
        for _ in 0..50 {
            let offspring = OnePointCrossover.cross(&[&p1, &p2], &mut rng, &());
            // Offspring A always starts with a prefix of parent 1.
            let a = &offspring[0];
            let k = (1..p1.len()).rfind(|&k| a[..k] == p1[..k]).unwrap_or(0);
            assert!(k >= 1, "no prefix of parent 1 in {a:?}");
        }
    }

    #[test]
    fn test_one_point_identical_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![2, 0, 1, 3];
        let offspring = OnePointCrossover.cross(&[&p, &p], &mut rng, &());
        assert_eq!(offspring[0], p);
        assert_eq!(offspring[1], p);
    }

    #[test]
    fn test_one_point_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![0];
        let offspring = OnePointCrossover.cross(&[&p, &p], &mut rng, &());
        assert_eq!(offspring, vec![vec![0], vec![0]]);
    }

    #[test]
    #[should_panic(expected = "exactly two parents")]
    fn test_one_point_wrong_arity_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![0, 1, 2];
        OnePointCrossover.cross(&[&p], &mut rng, &());
    }

    proptest! {
        #[test]
        fn prop_one_point_closure(
            p1 in Just((0..12usize).collect::<Vec<_>>()).prop_shuffle(),
            p2 in Just((0..12usize).collect::<Vec<_>>()).prop_shuffle(),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let offspring = OnePointCrossover.cross(&[&p1, &p2], &mut rng, &());
            prop_assert!(is_valid_permutation(&offspring[0], 12));
            prop_assert!(is_valid_permutation(&offspring[1], 12));
        }
    }

    // ---- Uniform crossover ----

    #[test]
    fn test_uniform_positions_come_from_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![1, 2, 3, 4, 5];
        let p2 = vec![10, 20, 30, 40, 50];

        for _ in 0..50 {
            let offspring = UniformCrossover.cross(&[&p1, &p2], &mut rng, &());
            for i in 0..p1.len() {
                let (a, b) = (offspring[0][i], offspring[1][i]);
                // Each position holds the parent pair, possibly swapped.
                assert!(
                    (a == p1[i] && b == p2[i]) || (a == p2[i] && b == p1[i]),
                    "position {i} lost the parent pair: {a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_uniform_actually_mixes() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0i32; 32];
        let p2 = vec![1i32; 32];
        let offspring = UniformCrossover.cross(&[&p1, &p2], &mut rng, &());
        // With 32 fair coin flips, an all-zero offspring is vanishingly rare.
        assert!(offspring[0].iter().any(|&v| v == 1));
        assert!(offspring[0].iter().any(|&v| v == 0));
    }

    #[test]
    fn test_uniform_empty_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty: Vec<i32> = Vec::new();
        let offspring = UniformCrossover.cross(&[&empty, &empty], &mut rng, &());
        assert_eq!(offspring, vec![Vec::<i32>::new(), Vec::new()]);
    }
}
