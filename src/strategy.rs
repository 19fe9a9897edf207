//! The seven pluggable strategy contracts.
//!
//! Each trait captures exactly one capability of the evolutionary loop:
//!
//! - [`Generator`]: create one valid representation
//! - [`Evaluator`]: score a representation
//! - [`Selector`]: pick parent candidates from a ranked population
//! - [`Crossover`]: recombine parent representations into offspring
//! - [`Mutator`]: perturb a single representation
//! - [`Replacer`]: merge population and offspring into the next generation
//! - [`StopCriterion`]: decide when the run is finished
//!
//! The engine holds each strategy as an opaque `Box<dyn …>` handle, so
//! independent implementations compose freely and each operator can be
//! unit-tested in isolation. All randomness is drawn from the
//! `&mut dyn RngCore` handed in by the engine; strategies must not keep
//! their own entropy sources, or seeded runs stop being reproducible.
//!
//! Every trait is also implemented for the matching closure shape, so a
//! plain function works wherever a strategy is expected:
//!
//! ```
//! use evoloop::Evaluator;
//!
//! let evaluator = |repr: &Vec<usize>, _ctx: &()| repr.len() as f64;
//! let fitness = evaluator.evaluate(&vec![0, 1, 2], &());
//! assert!((fitness - 3.0).abs() < 1e-12);
//! ```

use rand::RngCore;

use crate::engine::EngineView;
use crate::types::{Candidate, Fitness, ProblemType};

/// Produces one independent, valid representation per call.
///
/// Used by the engine to build the initial population. Calls must not
/// share state: each invocation returns a representation drawn fresh
/// from the given entropy source.
pub trait Generator<G, C> {
    fn generate(&self, rng: &mut dyn RngCore, context: &C) -> G;
}

impl<G, C, T> Generator<G, C> for T
where
    T: Fn(&mut dyn RngCore, &C) -> G,
{
    fn generate(&self, rng: &mut dyn RngCore, context: &C) -> G {
        self(rng, context)
    }
}

/// Computes the numeric fitness of a representation.
///
/// Must be deterministic and side-effect-free given identical inputs;
/// the engine assumes evaluating the same representation twice yields
/// the same fitness.
pub trait Evaluator<G, F, C> {
    fn evaluate(&self, representation: &G, context: &C) -> F;
}

impl<G, F, C, T> Evaluator<G, F, C> for T
where
    T: Fn(&G, &C) -> F,
{
    fn evaluate(&self, representation: &G, context: &C) -> F {
        self(representation, context)
    }
}

/// Chooses parent candidates from a ranked population.
///
/// The input slice is always sorted best-first; selectors may rely on
/// index order as rank order. The output length is selector-defined,
/// and selectors may select with or without replacement.
pub trait Selector<G, F: Fitness> {
    fn select<'a>(
        &self,
        ranked: &'a [Candidate<G, F>],
        rng: &mut dyn RngCore,
        problem_type: ProblemType,
    ) -> Vec<&'a Candidate<G, F>>;
}

impl<G, F: Fitness, T> Selector<G, F> for T
where
    T: for<'a> Fn(
        &'a [Candidate<G, F>],
        &mut dyn RngCore,
        ProblemType,
    ) -> Vec<&'a Candidate<G, F>>,
{
    fn select<'a>(
        &self,
        ranked: &'a [Candidate<G, F>],
        rng: &mut dyn RngCore,
        problem_type: ProblemType,
    ) -> Vec<&'a Candidate<G, F>> {
        self(ranked, rng, problem_type)
    }
}

/// Recombines parent representations into offspring representations.
///
/// The output length need not equal the input length. Parents are
/// borrowed and must not be modified; offspring are freshly owned
/// values.
pub trait Crossover<G, C> {
    fn cross(&self, parents: &[&G], rng: &mut dyn RngCore, context: &C) -> Vec<G>;
}

impl<G, C, T> Crossover<G, C> for T
where
    T: Fn(&[&G], &mut dyn RngCore, &C) -> Vec<G>,
{
    fn cross(&self, parents: &[&G], rng: &mut dyn RngCore, context: &C) -> Vec<G> {
        self(parents, rng, context)
    }
}

/// Perturbs a representation.
///
/// Must not mutate its input: the result is either an unchanged copy or
/// an independently modified one. Aliasing the input and editing it in
/// place would silently corrupt candidates still held by the population.
pub trait Mutator<G, C> {
    fn mutate(&self, representation: &G, rng: &mut dyn RngCore, context: &C) -> G;
}

impl<G, C, T> Mutator<G, C> for T
where
    T: Fn(&G, &mut dyn RngCore, &C) -> G,
{
    fn mutate(&self, representation: &G, rng: &mut dyn RngCore, context: &C) -> G {
        self(representation, rng, context)
    }
}

/// Merges the current population and the offspring pool into the next
/// population.
///
/// Both `current` and `offspring` arrive ranked best-first — replacers
/// such as steady-state elitism depend on that order, so it is part of
/// the contract, not an implicit assumption. The result need *not* be
/// sorted; the engine re-sorts it before the next generation.
pub trait Replacer<G, F: Fitness> {
    fn replace(
        &self,
        current: &[Candidate<G, F>],
        offspring: &[Candidate<G, F>],
        rng: &mut dyn RngCore,
        problem_type: ProblemType,
    ) -> Vec<Candidate<G, F>>;
}

impl<G, F: Fitness, T> Replacer<G, F> for T
where
    T: Fn(
        &[Candidate<G, F>],
        &[Candidate<G, F>],
        &mut dyn RngCore,
        ProblemType,
    ) -> Vec<Candidate<G, F>>,
{
    fn replace(
        &self,
        current: &[Candidate<G, F>],
        offspring: &[Candidate<G, F>],
        rng: &mut dyn RngCore,
        problem_type: ProblemType,
    ) -> Vec<Candidate<G, F>> {
        self(current, offspring, rng, problem_type)
    }
}

/// Decides whether the run should stop.
///
/// Evaluated once right after initialization and once after every
/// completed generation, never mid-generation. Takes `&mut self` so a
/// criterion may keep internal state across calls, but it only ever
/// observes the engine through the read-only [`EngineView`].
pub trait StopCriterion<G, F: Fitness> {
    fn should_stop(&mut self, view: &EngineView<'_, G, F>) -> bool;
}

impl<G, F: Fitness, T> StopCriterion<G, F> for T
where
    T: FnMut(&EngineView<'_, G, F>) -> bool,
{
    fn should_stop(&mut self, view: &EngineView<'_, G, F>) -> bool {
        self(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_closure_generator() {
        let generator = |_rng: &mut dyn RngCore, n: &usize| (0..*n).collect::<Vec<usize>>();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generator.generate(&mut rng, &3), vec![0, 1, 2]);
    }

    #[test]
    fn test_closure_evaluator() {
        let evaluator = |repr: &Vec<i32>, _: &()| repr.iter().sum::<i32>();
        assert_eq!(evaluator.evaluate(&vec![1, 2, 3], &()), 6);
    }

    fn take_best<'a>(
        ranked: &'a [Candidate<Vec<usize>, f64>],
        _rng: &mut dyn RngCore,
        _pt: ProblemType,
    ) -> Vec<&'a Candidate<Vec<usize>, f64>> {
        vec![&ranked[0]]
    }

    #[test]
    fn test_fn_selector() {
        let pop = vec![
            Candidate::new(vec![0, 1], 9.0),
            Candidate::new(vec![1, 0], 3.0),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let selected = take_best.select(&pop, &mut rng, ProblemType::Maximizing);
        assert_eq!(selected.len(), 1);
        assert!((selected[0].fitness() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_closure_mutator_identity() {
        let identity = |repr: &Vec<usize>, _: &mut dyn RngCore, _: &()| repr.clone();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(identity.mutate(&vec![4, 5], &mut rng, &()), vec![4, 5]);
    }
}
