//! Fitness evaluation and best-first ordering.

use crate::strategy::Evaluator;
use crate::types::{Candidate, Fitness, ProblemType};

/// Evaluates raw representations and returns them as a ranked candidate
/// list, best first.
///
/// This is the only place in the crate where fitness is computed. The
/// sort is stable, so candidates with equal fitness keep the relative
/// order in which they were handed in.
pub fn rank<G, F, C>(
    individuals: Vec<G>,
    evaluator: &dyn Evaluator<G, F, C>,
    context: &C,
    problem_type: ProblemType,
) -> Vec<Candidate<G, F>>
where
    F: Fitness,
{
    let mut candidates: Vec<Candidate<G, F>> = individuals
        .into_iter()
        .map(|representation| {
            let fitness = evaluator.evaluate(&representation, context);
            Candidate::new(representation, fitness)
        })
        .collect();
    sort_best_first(&mut candidates, problem_type);
    candidates
}

/// Stable-sorts candidates so index 0 is best under `problem_type`.
pub fn sort_best_first<G, F: Fitness>(
    candidates: &mut [Candidate<G, F>],
    problem_type: ProblemType,
) {
    candidates.sort_by(|a, b| problem_type.cmp_fitness(a.fitness(), b.fitness()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_evaluator(repr: &Vec<i32>, _: &()) -> f64 {
        repr.iter().sum::<i32>() as f64
    }

    #[test]
    fn test_rank_maximizing_best_first() {
        let individuals = vec![vec![1], vec![5], vec![3]];
        let ranked = rank(individuals, &sum_evaluator, &(), ProblemType::Maximizing);
        let fitnesses: Vec<f64> = ranked.iter().map(|c| c.fitness()).collect();
        assert_eq!(fitnesses, vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_rank_minimizing_best_first() {
        let individuals = vec![vec![1], vec![5], vec![3]];
        let ranked = rank(individuals, &sum_evaluator, &(), ProblemType::Minimizing);
        let fitnesses: Vec<f64> = ranked.iter().map(|c| c.fitness()).collect();
        assert_eq!(fitnesses, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_fitness() {
        // Same sum, different contents: input order must survive the sort.
        let individuals = vec![vec![2, 2], vec![1, 3], vec![4, 0]];
        let ranked = rank(individuals, &sum_evaluator, &(), ProblemType::Maximizing);
        assert_eq!(ranked[0].representation(), &vec![2, 2]);
        assert_eq!(ranked[1].representation(), &vec![1, 3]);
        assert_eq!(ranked[2].representation(), &vec![4, 0]);
    }

    #[test]
    fn test_rank_empty_input() {
        let ranked = rank(Vec::<Vec<i32>>::new(), &sum_evaluator, &(), ProblemType::Minimizing);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_sort_best_first_adjacent_invariant() {
        let mut candidates: Vec<Candidate<usize, f64>> = [3.0, 9.0, 1.0, 9.0, 4.0]
            .iter()
            .enumerate()
            .map(|(i, &f)| Candidate::new(i, f))
            .collect();

        sort_best_first(&mut candidates, ProblemType::Maximizing);
        for pair in candidates.windows(2) {
            assert!(pair[0].fitness() >= pair[1].fitness());
        }

        sort_best_first(&mut candidates, ProblemType::Minimizing);
        for pair in candidates.windows(2) {
            assert!(pair[0].fitness() <= pair[1].fitness());
        }
    }
}
