//! The generation loop.
//!
//! [`Engine`] owns the population, the generation counter, and the seven
//! injected strategy handles, and orchestrates the evolutionary cycle:
//! select → cross → mutate → rank → replace. Strategies never see the
//! engine itself; stop criteria get a read-only [`EngineView`] snapshot.
//!
//! # Determinism
//!
//! The engine draws no entropy of its own. Every random decision flows
//! through the single injected entropy source, consumed strictly
//! sequentially by the strategies in the fixed order of the loop. Two
//! runs with the same seed, configuration, and deterministic strategies
//! produce identical generation-by-generation results.

use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::RngCore;

use crate::config::EngineBuilder;
use crate::rank::{rank, sort_best_first};
use crate::strategy::{
    Crossover, Evaluator, Generator, Mutator, Replacer, Selector, StopCriterion,
};
use crate::types::{Candidate, Fitness, ProblemType, RunState};

/// Read-only snapshot of the engine state, handed to stop criteria.
///
/// Exposes exactly what [`Engine`]'s own accessors expose; nothing here
/// permits mutation, so a criterion cannot desynchronize the engine's
/// sorted-population invariant.
pub struct EngineView<'a, G, F: Fitness> {
    population: &'a [Candidate<G, F>],
    generations: usize,
    started_at: Instant,
    problem_type: ProblemType,
}

impl<'a, G, F: Fitness> EngineView<'a, G, F> {
    pub(crate) fn new(
        population: &'a [Candidate<G, F>],
        generations: usize,
        started_at: Instant,
        problem_type: ProblemType,
    ) -> Self {
        Self {
            population,
            generations,
            started_at,
            problem_type,
        }
    }

    /// The current population, ranked best-first.
    pub fn population(&self) -> &'a [Candidate<G, F>] {
        self.population
    }

    /// The best candidate, if the population is non-empty.
    pub fn best(&self) -> Option<&'a Candidate<G, F>> {
        self.population.first()
    }

    /// Completed generations since initialization.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// The instant `initialize()` ran.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Wall-clock time elapsed since initialization.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn problem_type(&self) -> ProblemType {
        self.problem_type
    }
}

/// The evolutionary engine.
///
/// Configuration — population size, reproductions per generation,
/// entropy source, context, problem type, and the seven strategies — is
/// fixed at construction via [`EngineBuilder`] and never changes for the
/// run's duration. The population is created once by
/// [`initialize`](Engine::initialize) and wholesale replaced once per
/// generation.
///
/// # Example
///
/// ```
/// use evoloop::operators::{
///     GenerationalReplacement, MaxGenerations, PermutationGenerator,
///     OnePointCrossover, InterchangeMutation, TournamentSelection,
/// };
/// use evoloop::{Engine, ProblemType};
///
/// // Minimize the number of fixed points of a permutation.
/// let mut engine: Engine<Vec<usize>, f64, ()> = Engine::builder(())
///     .with_problem_type(ProblemType::Minimizing)
///     .with_population_size(8)
///     .with_reproductions_per_generation(4)
///     .with_seed(7)
///     .with_generator(PermutationGenerator::new(6))
///     .with_evaluator(|p: &Vec<usize>, _: &()| {
///         p.iter().enumerate().filter(|(i, &v)| *i == v).count() as f64
///     })
///     .with_selector(TournamentSelection::new(2, 3))
///     .with_crossover(OnePointCrossover)
///     .with_mutator(InterchangeMutation)
///     .with_replacer(GenerationalReplacement)
///     .with_stop_criterion(MaxGenerations::new(20))
///     .build()
///     .unwrap();
///
/// engine.run();
/// assert_eq!(engine.generations(), 20);
/// assert_eq!(engine.population().len(), 8);
/// ```
pub struct Engine<G, F: Fitness, C> {
    problem_type: ProblemType,
    population_size: usize,
    reproductions_per_generation: usize,
    entropy: Box<dyn RngCore>,
    context: C,
    generator: Box<dyn Generator<G, C>>,
    evaluator: Box<dyn Evaluator<G, F, C>>,
    selector: Box<dyn Selector<G, F>>,
    crossover: Box<dyn Crossover<G, C>>,
    mutator: Box<dyn Mutator<G, C>>,
    replacer: Box<dyn Replacer<G, F>>,
    stop_criterion: Box<dyn StopCriterion<G, F>>,

    population: Vec<Candidate<G, F>>,
    generations: usize,
    started_at: Option<Instant>,
    state: RunState,
}

impl<G, F: Fitness, C> std::fmt::Debug for Engine<G, F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("problem_type", &self.problem_type)
            .field("population_size", &self.population_size)
            .field(
                "reproductions_per_generation",
                &self.reproductions_per_generation,
            )
            .field("population_len", &self.population.len())
            .field("generations", &self.generations)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<G, F: Fitness, C> Engine<G, F, C> {
    /// Starts a builder holding the problem context.
    ///
    /// Pass `()` when the problem needs no context.
    pub fn builder(context: C) -> EngineBuilder<G, F, C> {
        EngineBuilder::new(context)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        problem_type: ProblemType,
        population_size: usize,
        reproductions_per_generation: usize,
        entropy: Box<dyn RngCore>,
        context: C,
        generator: Box<dyn Generator<G, C>>,
        evaluator: Box<dyn Evaluator<G, F, C>>,
        selector: Box<dyn Selector<G, F>>,
        crossover: Box<dyn Crossover<G, C>>,
        mutator: Box<dyn Mutator<G, C>>,
        replacer: Box<dyn Replacer<G, F>>,
        stop_criterion: Box<dyn StopCriterion<G, F>>,
    ) -> Self {
        Self {
            problem_type,
            population_size,
            reproductions_per_generation,
            entropy,
            context,
            generator,
            evaluator,
            selector,
            crossover,
            mutator,
            replacer,
            stop_criterion,
            population: Vec::new(),
            generations: 0,
            started_at: None,
            state: RunState::Unstarted,
        }
    }

    /// Creates and ranks the initial population.
    ///
    /// Records the run start time, generates `population_size`
    /// representations, ranks them, and resets the generation counter
    /// to zero. Transitions the engine to [`RunState::Running`].
    pub fn initialize(&mut self) {
        self.started_at = Some(Instant::now());

        let mut individuals = Vec::with_capacity(self.population_size);
        for _ in 0..self.population_size {
            individuals.push(self.generator.generate(self.entropy.as_mut(), &self.context));
        }
        self.population = rank(
            individuals,
            self.evaluator.as_ref(),
            &self.context,
            self.problem_type,
        );
        self.generations = 0;
        self.state = RunState::Running;

        debug!(
            "initialized population of {} ({:?}), best fitness {:?}",
            self.population.len(),
            self.problem_type,
            self.population.first().map(|c| c.fitness()),
        );
    }

    /// Runs one full generation: selection, crossover, mutation,
    /// offspring ranking, replacement.
    ///
    /// Offspring from all `reproductions_per_generation` iterations are
    /// pooled and ranked together before the replacer sees them. The
    /// engine re-sorts whatever the replacer returns, so final
    /// sortedness is guaranteed here and not a replacer obligation.
    ///
    /// # Panics
    ///
    /// Panics if called before [`initialize`](Engine::initialize).
    pub fn advance_to_next_generation(&mut self) {
        assert!(
            self.state == RunState::Running,
            "advance_to_next_generation requires a running engine (call initialize first)"
        );

        let mut offspring_pool: Vec<G> = Vec::new();
        for _ in 0..self.reproductions_per_generation {
            let selected = self.selector.select(
                &self.population,
                self.entropy.as_mut(),
                self.problem_type,
            );
            let parents: Vec<&G> = selected.iter().map(|c| c.representation()).collect();
            let offspring = self
                .crossover
                .cross(&parents, self.entropy.as_mut(), &self.context);
            for child in offspring {
                offspring_pool.push(self.mutator.mutate(
                    &child,
                    self.entropy.as_mut(),
                    &self.context,
                ));
            }
        }

        let ranked_offspring = rank(
            offspring_pool,
            self.evaluator.as_ref(),
            &self.context,
            self.problem_type,
        );
        let mut next = self.replacer.replace(
            &self.population,
            &ranked_offspring,
            self.entropy.as_mut(),
            self.problem_type,
        );
        sort_best_first(&mut next, self.problem_type);
        self.population = next;
        self.generations += 1;

        trace!(
            "generation {} complete, best fitness {:?}",
            self.generations,
            self.population.first().map(|c| c.fitness()),
        );
    }

    /// Initializes, then advances generations until the stop criterion
    /// is satisfied.
    ///
    /// The criterion is checked once immediately after initialization —
    /// covering the case where the initial population already satisfies
    /// it — and once after every generation, never mid-generation.
    /// Transitions the engine to [`RunState::Terminated`].
    pub fn run(&mut self) {
        self.initialize();
        loop {
            let halted = {
                let view = EngineView::new(
                    &self.population,
                    self.generations,
                    self.started_at
                        .expect("initialize records the start time before the loop"),
                    self.problem_type,
                );
                self.stop_criterion.should_stop(&view)
            };
            if halted {
                break;
            }
            self.advance_to_next_generation();
        }
        self.state = RunState::Terminated;

        debug!(
            "terminated after {} generations in {:?}, best fitness {:?}",
            self.generations,
            self.elapsed(),
            self.population.first().map(|c| c.fitness()),
        );
    }

    /// The current population, ranked best-first.
    ///
    /// Empty until [`initialize`](Engine::initialize) has run.
    pub fn population(&self) -> &[Candidate<G, F>] {
        &self.population
    }

    /// The best candidate of the current population.
    pub fn best(&self) -> Option<&Candidate<G, F>> {
        self.population.first()
    }

    /// Completed generations since the last initialization.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// The instant the current run was initialized, if any.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Wall-clock time since initialization; zero before it.
    pub fn elapsed(&self) -> Duration {
        self.started_at
            .map(|started| started.elapsed())
            .unwrap_or_default()
    }

    pub fn problem_type(&self) -> ProblemType {
        self.problem_type
    }

    pub fn state(&self) -> RunState {
        self.state
    }
}
