//! Reference strategy implementations.
//!
//! Ready-made operators covering each of the seven contracts:
//!
//! - [`PermutationGenerator`]: uniform random index permutations
//! - [`OnePointCrossover`] / [`UniformCrossover`]: permutation and
//!   generic sequence recombination
//! - [`InterchangeMutation`], [`InsertMutation`], [`InversionMutation`]:
//!   copy-on-write sequence perturbations, plus the [`GatedMutation`]
//!   probability decorator
//! - [`TournamentSelection`]: probabilistic rank-biased tournaments
//! - [`SteadyStateReplacement`] / [`GenerationalReplacement`]
//! - [`MaxGenerations`], [`MaxElapsed`], [`FitnessTarget`]: stop criteria
//!
//! All operators are independent of the engine and of each other; any
//! combination that fits the problem representation is valid.

mod crossover;
mod generator;
mod mutation;
mod replacement;
mod selection;
mod termination;

pub use crossover::{OnePointCrossover, UniformCrossover};
pub use generator::PermutationGenerator;
pub use mutation::{GatedMutation, InsertMutation, InterchangeMutation, InversionMutation};
pub use replacement::{GenerationalReplacement, SteadyStateReplacement};
pub use selection::TournamentSelection;
pub use termination::{FitnessTarget, MaxElapsed, MaxGenerations};
