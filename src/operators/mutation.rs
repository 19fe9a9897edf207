//! Mutation operators.
//!
//! All mutators here follow the contract to the letter: the input is
//! never touched, the result is a fresh copy. They operate on generic
//! `Vec<T>` sequences, so they keep permutations valid by construction
//! (element positions change, the multiset of elements does not).

use rand::{Rng, RngCore};

use crate::strategy::Mutator;

/// Swaps the values at two distinct random positions on a copy of the
/// input.
///
/// Inputs shorter than two elements are returned unchanged — there is
/// nothing to swap.
#[derive(Debug, Clone, Copy)]
pub struct InterchangeMutation;

impl<T: Clone, C> Mutator<Vec<T>, C> for InterchangeMutation {
    fn mutate(&self, representation: &Vec<T>, rng: &mut dyn RngCore, _context: &C) -> Vec<T> {
        let mut copy = representation.clone();
        let n = copy.len();
        if n < 2 {
            return copy;
        }
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }
        copy.swap(i, j);
        copy
    }
}

/// Removes one random element and reinserts it at a random position, on
/// a copy of the input.
#[derive(Debug, Clone, Copy)]
pub struct InsertMutation;

impl<T: Clone, C> Mutator<Vec<T>, C> for InsertMutation {
    fn mutate(&self, representation: &Vec<T>, rng: &mut dyn RngCore, _context: &C) -> Vec<T> {
        let mut copy = representation.clone();
        let n = copy.len();
        if n < 2 {
            return copy;
        }
        let from = rng.random_range(0..n);
        let to = rng.random_range(0..n);
        let value = copy.remove(from);
        copy.insert(to, value);
        copy
    }
}

/// Reverses a random segment on a copy of the input (a 2-opt style
/// move).
#[derive(Debug, Clone, Copy)]
pub struct InversionMutation;

impl<T: Clone, C> Mutator<Vec<T>, C> for InversionMutation {
    fn mutate(&self, representation: &Vec<T>, rng: &mut dyn RngCore, _context: &C) -> Vec<T> {
        let mut copy = representation.clone();
        let n = copy.len();
        if n < 2 {
            return copy;
        }
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        let (start, end) = if i <= j { (i, j) } else { (j, i) };
        copy[start..=end].reverse();
        copy
    }
}

/// Applies the wrapped mutator with probability `p`, otherwise returns
/// the input unchanged.
///
/// A decorator over any [`Mutator`], preserving its contract, so gated
/// and ungated mutators are interchangeable anywhere a mutator is
/// accepted.
pub struct GatedMutation<G, C> {
    inner: Box<dyn Mutator<G, C>>,
    probability: f64,
}

impl<G, C> GatedMutation<G, C> {
    /// Wraps `inner`, applying it with probability `probability`.
    ///
    /// # Panics
    ///
    /// Panics if `probability` is not within `[0, 1]`.
    pub fn new(inner: impl Mutator<G, C> + 'static, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "mutation probability must be within [0, 1], got {probability}"
        );
        Self {
            inner: Box::new(inner),
            probability,
        }
    }
}

impl<G: Clone, C> Mutator<G, C> for GatedMutation<G, C> {
    fn mutate(&self, representation: &G, rng: &mut dyn RngCore, context: &C) -> G {
        if rng.random_bool(self.probability) {
            self.inner.mutate(representation, rng, context)
        } else {
            representation.clone()
        }
    }
}
