//! Generic evolutionary-optimization engine.
//!
//! Given a problem-specific representation, a fitness function, and a
//! set of pluggable genetic operators, the engine iteratively evolves a
//! population of candidate solutions toward better fitness. The problem
//! domain stays entirely on the caller's side: the engine only ever
//! handles opaque representations, an opaque context value, and the
//! seven strategy contracts.
//!
//! # Core Traits
//!
//! - [`Generator`], [`Evaluator`], [`Selector`], [`Crossover`],
//!   [`Mutator`], [`Replacer`], [`StopCriterion`]: the seven capability
//!   contracts the engine depends on polymorphically. Each is also
//!   implemented for the matching closure shape.
//!
//! # Key Types
//!
//! - [`Engine`]: owns the population and drives the generation loop
//! - [`EngineBuilder`]: validating construction API
//! - [`Candidate`]: a representation paired with its fitness
//! - [`ProblemType`]: Maximizing or Minimizing — the ranking direction
//!
//! # Submodules
//!
//! - [`operators`]: reference implementations for every contract —
//!   permutation generation and crossover, interchange/insert/inversion
//!   mutation, tournament selection, steady-state and generational
//!   replacement, and generation/time/fitness stop criteria
//!
//! # Example
//!
//! ```
//! use evoloop::operators::{
//!     MaxGenerations, OnePointCrossover, PermutationGenerator,
//!     InterchangeMutation, SteadyStateReplacement, TournamentSelection,
//! };
//! use evoloop::{Engine, ProblemType};
//!
//! // Sort [0, n) by evolving permutations: fitness counts misplaced
//! // indices, lower is better.
//! let mut engine: Engine<Vec<usize>, i64, ()> = Engine::builder(())
//!     .with_problem_type(ProblemType::Minimizing)
//!     .with_population_size(20)
//!     .with_reproductions_per_generation(5)
//!     .with_seed(42)
//!     .with_generator(PermutationGenerator::new(6))
//!     .with_evaluator(|p: &Vec<usize>, _: &()| {
//!         p.iter().enumerate().filter(|(i, &v)| *i != v).count() as i64
//!     })
//!     .with_selector(TournamentSelection::new(2, 3))
//!     .with_crossover(OnePointCrossover)
//!     .with_mutator(InterchangeMutation)
//!     .with_replacer(SteadyStateReplacement)
//!     .with_stop_criterion(MaxGenerations::new(100))
//!     .build()
//!     .unwrap();
//!
//! engine.run();
//! assert_eq!(engine.generations(), 100);
//! println!("best: {:?}", engine.best().unwrap());
//! ```
//!
//! # Determinism
//!
//! The engine draws no entropy itself; every random decision flows
//! through the single injected entropy source. With a fixed seed and
//! deterministic strategies, two runs with identical configuration
//! produce identical generation-by-generation results.

mod config;
mod engine;
pub mod operators;
mod rank;
mod strategy;
mod types;

pub use config::{ConfigError, EngineBuilder};
pub use engine::{Engine, EngineView};
pub use rank::{rank, sort_best_first};
pub use strategy::{
    Crossover, Evaluator, Generator, Mutator, Replacer, Selector, StopCriterion,
};
pub use types::{Candidate, Fitness, ProblemType, RunState};
