//! Replacement policies.

use rand::RngCore;

use crate::strategy::Replacer;
use crate::types::{Candidate, Fitness, ProblemType};

/// Steady-state (elitist) replacement.
///
/// With `m` offspring, keeps the best `population_size - m` candidates
/// of the current ranked population and appends all offspring: the
/// weakest `m` members of the old population are the ones displaced.
/// Population size is preserved exactly.
///
/// Relies on the [`Replacer`] contract that both inputs arrive ranked
/// best-first.
///
/// # Panics
///
/// Panics if there are more offspring than current candidates.
#[derive(Debug, Clone, Copy)]
pub struct SteadyStateReplacement;

impl<G: Clone, F: Fitness> Replacer<G, F> for SteadyStateReplacement {
    fn replace(
        &self,
        current: &[Candidate<G, F>],
        offspring: &[Candidate<G, F>],
        _rng: &mut dyn RngCore,
        _problem_type: ProblemType,
    ) -> Vec<Candidate<G, F>> {
        assert!(
            offspring.len() <= current.len(),
            "offspring count {} exceeds population size {}",
            offspring.len(),
            current.len()
        );
        let kept = current.len() - offspring.len();
        let mut next = current[..kept].to_vec();
        next.extend_from_slice(offspring);
        next
    }
}

/// Generational replacement: the offspring *are* the next population,
/// the old one is discarded entirely.
///
/// Population size after a generation equals the offspring count, so
/// size preservation is up to the configured reproductions-per-
/// generation and crossover arity.
#[derive(Debug, Clone, Copy)]
pub struct GenerationalReplacement;

impl<G: Clone, F: Fitness> Replacer<G, F> for GenerationalReplacement {
    fn replace(
        &self,
        _current: &[Candidate<G, F>],
        offspring: &[Candidate<G, F>],
        _rng: &mut dyn RngCore,
        _problem_type: ProblemType,
    ) -> Vec<Candidate<G, F>> {
        offspring.to_vec()
    }
}
