//! Demonstration driver: maximize the cost of a cyclic arrangement.
//!
//! A permutation of `n` value indices describes a cycle; its fitness is
//! the sum of absolute differences between adjacent values, wrapping
//! around. Maximizing spreads large jumps around the cycle. Runs the
//! engine with the reference operators for two seconds, then prints the
//! top five candidates.
//!
//! `RUST_LOG=debug cargo run --bin cycle_demo` shows the engine's own
//! progress logging.

use std::time::Duration;

use evoloop::operators::{
    InterchangeMutation, MaxElapsed, OnePointCrossover, PermutationGenerator,
    SteadyStateReplacement, TournamentSelection,
};
use evoloop::{Engine, ProblemType};

fn cycle_cost(permutation: &Vec<usize>, values: &Vec<i64>) -> i64 {
    let first = permutation[0];
    let last = permutation[permutation.len() - 1];
    let mut cost = (values[first] - values[last]).abs();
    for pair in permutation.windows(2) {
        cost += (values[pair[0]] - values[pair[1]]).abs();
    }
    cost
}

fn main() {
    env_logger::init();

    let n = 10;
    let values: Vec<i64> = (0..n as i64).map(|i| i * 10).collect();

    let mut engine: Engine<Vec<usize>, i64, Vec<i64>> = Engine::builder(values)
        .with_problem_type(ProblemType::Maximizing)
        .with_population_size(n / 2)
        .with_reproductions_per_generation(2)
        .with_seed(2300)
        .with_generator(PermutationGenerator::new(n))
        .with_evaluator(cycle_cost)
        .with_selector(TournamentSelection::new(2, 4))
        .with_crossover(OnePointCrossover)
        .with_mutator(InterchangeMutation)
        .with_replacer(SteadyStateReplacement)
        .with_stop_criterion(MaxElapsed::new(Duration::from_secs(2)))
        .build()
        .expect("demo configuration is complete");

    engine.run();

    println!(
        "{} generations in {:?}",
        engine.generations(),
        engine.elapsed()
    );
    for candidate in engine.population().iter().take(5) {
        println!("{} {:?}", candidate.fitness(), candidate.representation());
    }
}
