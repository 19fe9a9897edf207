//! Stop criteria.

use std::time::Duration;

use crate::engine::EngineView;
use crate::strategy::StopCriterion;
use crate::types::{Fitness, ProblemType};

/// Stops once the generation counter reaches `limit`.
///
/// With a limit of `n`, generations `0..n` keep running and the run
/// halts as soon as the counter equals `n`.
#[derive(Debug, Clone, Copy)]
pub struct MaxGenerations {
    limit: usize,
}

impl MaxGenerations {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl<G, F: Fitness> StopCriterion<G, F> for MaxGenerations {
    fn should_stop(&mut self, view: &EngineView<'_, G, F>) -> bool {
        view.generations() >= self.limit
    }
}

/// Stops once wall-clock time since initialization reaches `limit`.
///
/// Checked only at generation boundaries, so a run overshoots the limit
/// by at most one generation's worth of work.
#[derive(Debug, Clone, Copy)]
pub struct MaxElapsed {
    limit: Duration,
}

impl MaxElapsed {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }
}

impl<G, F: Fitness> StopCriterion<G, F> for MaxElapsed {
    fn should_stop(&mut self, view: &EngineView<'_, G, F>) -> bool {
        view.elapsed() >= self.limit
    }
}

/// Stops once the best candidate reaches a target fitness: at least
/// `target` under [`Maximizing`](ProblemType::Maximizing), at most
/// `target` under [`Minimizing`](ProblemType::Minimizing).
///
/// Never satisfied while the population is empty.
#[derive(Debug, Clone, Copy)]
pub struct FitnessTarget<F> {
    target: F,
}

impl<F: Fitness> FitnessTarget<F> {
    pub fn new(target: F) -> Self {
        Self { target }
    }
}

impl<G, F: Fitness> StopCriterion<G, F> for FitnessTarget<F> {
    fn should_stop(&mut self, view: &EngineView<'_, G, F>) -> bool {
        let Some(best) = view.best() else {
            return false;
        };
        match view.problem_type() {
            ProblemType::Maximizing => best.fitness() >= self.target,
            ProblemType::Minimizing => best.fitness() <= self.target,
        }
    }
}
