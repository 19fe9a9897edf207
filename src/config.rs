//! Engine construction.
//!
//! [`EngineBuilder`] collects the fixed run configuration — problem
//! type, sizes, entropy, context, and the seven strategies — and
//! validates it eagerly. A missing strategy or a nonsensical size is a
//! caller programming error, so it surfaces as a descriptive
//! [`ConfigError`] at [`build`](EngineBuilder::build) time instead of an
//! obscure index or arity failure deep inside the generation loop.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use thiserror::Error;

use crate::engine::Engine;
use crate::strategy::{
    Crossover, Evaluator, Generator, Mutator, Replacer, Selector, StopCriterion,
};
use crate::types::{Fitness, ProblemType};

/// A defect in the engine configuration, reported at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required strategy: {0}")]
    MissingStrategy(&'static str),
    #[error("problem type not set")]
    MissingProblemType,
    #[error("population_size must be at least 1")]
    InvalidPopulationSize,
    #[error("reproductions_per_generation must be at least 1")]
    InvalidReproductions,
}

/// Builder for [`Engine`].
///
/// The context is supplied up front (pass `()` when the problem needs
/// none); everything else is set through `with_*` methods. Strategies
/// can be structs implementing the contract traits or plain closures.
///
/// # Example
///
/// ```
/// use evoloop::operators::{
///     MaxGenerations, OnePointCrossover, PermutationGenerator,
///     InterchangeMutation, SteadyStateReplacement, TournamentSelection,
/// };
/// use evoloop::{Engine, ProblemType};
///
/// let engine: Engine<Vec<usize>, f64, ()> = Engine::builder(())
///     .with_problem_type(ProblemType::Maximizing)
///     .with_population_size(10)
///     .with_reproductions_per_generation(2)
///     .with_seed(42)
///     .with_generator(PermutationGenerator::new(6))
///     .with_evaluator(|p: &Vec<usize>, _: &()| p[0] as f64)
///     .with_selector(TournamentSelection::new(2, 3))
///     .with_crossover(OnePointCrossover)
///     .with_mutator(InterchangeMutation)
///     .with_replacer(SteadyStateReplacement)
///     .with_stop_criterion(MaxGenerations::new(5))
///     .build()
///     .unwrap();
/// ```
pub struct EngineBuilder<G, F: Fitness, C> {
    problem_type: Option<ProblemType>,
    population_size: Option<usize>,
    reproductions_per_generation: Option<usize>,
    entropy: Option<Box<dyn RngCore>>,
    context: C,
    generator: Option<Box<dyn Generator<G, C>>>,
    evaluator: Option<Box<dyn Evaluator<G, F, C>>>,
    selector: Option<Box<dyn Selector<G, F>>>,
    crossover: Option<Box<dyn Crossover<G, C>>>,
    mutator: Option<Box<dyn Mutator<G, C>>>,
    replacer: Option<Box<dyn Replacer<G, F>>>,
    stop_criterion: Option<Box<dyn StopCriterion<G, F>>>,
}

impl<G, F: Fitness, C> EngineBuilder<G, F, C> {
    /// Starts an empty builder owning the problem context.
    pub fn new(context: C) -> Self {
        Self {
            problem_type: None,
            population_size: None,
            reproductions_per_generation: None,
            entropy: None,
            context,
            generator: None,
            evaluator: None,
            selector: None,
            crossover: None,
            mutator: None,
            replacer: None,
            stop_criterion: None,
        }
    }

    /// Sets the optimization direction.
    pub fn with_problem_type(mut self, problem_type: ProblemType) -> Self {
        self.problem_type = Some(problem_type);
        self
    }

    /// Sets the population size (must be at least 1).
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Sets how many selection/crossover/mutation rounds run per
    /// generation (must be at least 1).
    pub fn with_reproductions_per_generation(mut self, reproductions: usize) -> Self {
        self.reproductions_per_generation = Some(reproductions);
        self
    }

    /// Injects the entropy source all strategies will draw from.
    ///
    /// Defaults to an OS-seeded [`StdRng`] when neither this nor
    /// [`with_seed`](Self::with_seed) is called.
    pub fn with_entropy(mut self, entropy: impl RngCore + 'static) -> Self {
        self.entropy = Some(Box::new(entropy));
        self
    }

    /// Convenience for a reproducible run: a [`StdRng`] seeded with
    /// `seed`.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_entropy(StdRng::seed_from_u64(seed))
    }

    pub fn with_generator(mut self, generator: impl Generator<G, C> + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    pub fn with_evaluator(mut self, evaluator: impl Evaluator<G, F, C> + 'static) -> Self {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    pub fn with_selector(mut self, selector: impl Selector<G, F> + 'static) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    pub fn with_crossover(mut self, crossover: impl Crossover<G, C> + 'static) -> Self {
        self.crossover = Some(Box::new(crossover));
        self
    }

    pub fn with_mutator(mut self, mutator: impl Mutator<G, C> + 'static) -> Self {
        self.mutator = Some(Box::new(mutator));
        self
    }

    pub fn with_replacer(mut self, replacer: impl Replacer<G, F> + 'static) -> Self {
        self.replacer = Some(Box::new(replacer));
        self
    }

    pub fn with_stop_criterion(
        mut self,
        stop_criterion: impl StopCriterion<G, F> + 'static,
    ) -> Self {
        self.stop_criterion = Some(Box::new(stop_criterion));
        self
    }

    /// Validates the configuration and constructs the engine.
    ///
    /// Fails on the first defect found: unset problem type, a zero
    /// size, or any missing strategy.
    pub fn build(self) -> Result<Engine<G, F, C>, ConfigError> {
        let problem_type = self.problem_type.ok_or(ConfigError::MissingProblemType)?;
        let population_size = self
            .population_size
            .filter(|&n| n >= 1)
            .ok_or(ConfigError::InvalidPopulationSize)?;
        let reproductions = self
            .reproductions_per_generation
            .filter(|&n| n >= 1)
            .ok_or(ConfigError::InvalidReproductions)?;

        let entropy = self
            .entropy
            .unwrap_or_else(|| Box::new(StdRng::from_os_rng()));

        let generator = self
            .generator
            .ok_or(ConfigError::MissingStrategy("generator"))?;
        let evaluator = self
            .evaluator
            .ok_or(ConfigError::MissingStrategy("evaluator"))?;
        let selector = self
            .selector
            .ok_or(ConfigError::MissingStrategy("selector"))?;
        let crossover = self
            .crossover
            .ok_or(ConfigError::MissingStrategy("crossover"))?;
        let mutator = self.mutator.ok_or(ConfigError::MissingStrategy("mutator"))?;
        let replacer = self
            .replacer
            .ok_or(ConfigError::MissingStrategy("replacer"))?;
        let stop_criterion = self
            .stop_criterion
            .ok_or(ConfigError::MissingStrategy("stop criterion"))?;

        Ok(Engine::from_parts(
            problem_type,
            population_size,
            reproductions,
            entropy,
            self.context,
            generator,
            evaluator,
            selector,
            crossover,
            mutator,
            replacer,
            stop_criterion,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::{
        MaxGenerations, OnePointCrossover, PermutationGenerator, InterchangeMutation,
        SteadyStateReplacement, TournamentSelection,
    };

    // Deliberately sets no entropy; tests that need a seed add their own.
    fn complete_builder() -> EngineBuilder<Vec<usize>, f64, ()> {
        EngineBuilder::new(())
            .with_problem_type(ProblemType::Minimizing)
            .with_population_size(6)
            .with_reproductions_per_generation(2)
            .with_generator(PermutationGenerator::new(4))
            .with_evaluator(|p: &Vec<usize>, _: &()| p[0] as f64)
            .with_selector(TournamentSelection::new(2, 2))
            .with_crossover(OnePointCrossover)
            .with_mutator(InterchangeMutation)
            .with_replacer(SteadyStateReplacement)
            .with_stop_criterion(MaxGenerations::new(3))
    }

    #[test]
    fn test_complete_builder_builds() {
        assert!(complete_builder().build().is_ok());
    }

    #[test]
    fn test_missing_problem_type() {
        let builder = EngineBuilder::<Vec<usize>, f64, ()>::new(())
            .with_population_size(6)
            .with_reproductions_per_generation(2);
        assert!(matches!(
            builder.build(),
            Err(ConfigError::MissingProblemType)
        ));
    }

    #[test]
    fn test_zero_population_size() {
        let result = complete_builder().with_population_size(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPopulationSize)));
    }

    #[test]
    fn test_zero_reproductions() {
        let result = complete_builder()
            .with_reproductions_per_generation(0)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidReproductions)));
    }

    #[test]
    fn test_missing_strategy_is_named() {
        let builder = EngineBuilder::<Vec<usize>, f64, ()>::new(())
            .with_problem_type(ProblemType::Minimizing)
            .with_population_size(6)
            .with_reproductions_per_generation(2)
            .with_evaluator(|p: &Vec<usize>, _: &()| p[0] as f64);
        let err = builder.build().expect_err("generator is missing");
        assert_eq!(err.to_string(), "missing required strategy: generator");
    }

    #[test]
    fn test_default_entropy_is_provided() {
        // No seed, no entropy: build still succeeds with an OS-seeded rng.
        let mut engine = complete_builder().build().expect("valid configuration");
        engine.initialize();
        assert_eq!(engine.population().len(), 6);
    }
}
