//! Parent selection operators.

use rand::seq::index;
use rand::{Rng, RngCore};

use crate::strategy::Selector;
use crate::types::{Candidate, Fitness, ProblemType};

/// Tournament selection without re-selection.
///
/// Keeps a pool of available candidate indices, initially the whole
/// population. Each of the `amount` rounds draws `tournament_size`
/// distinct indices from the pool, orders them best-first (the input is
/// ranked, so index order is rank order), then walks the subset from
/// best to worst: each position wins with probability `win_probability`,
/// and the last position wins by default if no earlier one did. The
/// winner leaves the pool, so one candidate cannot be selected twice
/// within a single call.
///
/// With `win_probability` = 1 (the default) the best participant of
/// every tournament always wins; lower values soften the selection
/// pressure, giving position `i` of the subset a win chance of
/// `p * (1 - p)^i`.
#[derive(Debug, Clone, Copy)]
pub struct TournamentSelection {
    amount: usize,
    tournament_size: usize,
    win_probability: f64,
}

impl TournamentSelection {
    /// Deterministic tournaments: the best participant always wins.
    ///
    /// # Panics
    ///
    /// Panics if `amount` or `tournament_size` is zero.
    pub fn new(amount: usize, tournament_size: usize) -> Self {
        Self::with_win_probability(amount, tournament_size, 1.0)
    }

    /// Tournaments where the best participant wins with probability
    /// `win_probability`.
    ///
    /// # Panics
    ///
    /// Panics if `amount` or `tournament_size` is zero, or if
    /// `win_probability` is not within `[0, 1]`.
    pub fn with_win_probability(
        amount: usize,
        tournament_size: usize,
        win_probability: f64,
    ) -> Self {
        assert!(amount >= 1, "amount to select must be at least 1");
        assert!(tournament_size >= 1, "tournament_size must be at least 1");
        assert!(
            (0.0..=1.0).contains(&win_probability),
            "win_probability must be within [0, 1], got {win_probability}"
        );
        Self {
            amount,
            tournament_size,
            win_probability,
        }
    }
}

impl<G, F: Fitness> Selector<G, F> for TournamentSelection {
    /// # Panics
    ///
    /// Panics when the configuration is incompatible with the
    /// population: `amount` larger than the population, or
    /// `tournament_size` larger than the candidates still available in
    /// some round. Both are caller configuration errors.
    fn select<'a>(
        &self,
        ranked: &'a [Candidate<G, F>],
        rng: &mut dyn RngCore,
        _problem_type: ProblemType,
    ) -> Vec<&'a Candidate<G, F>> {
        assert!(
            self.amount <= ranked.len(),
            "cannot select {} candidates from a population of {}",
            self.amount,
            ranked.len()
        );

        let mut available: Vec<usize> = (0..ranked.len()).collect();
        let mut selected = Vec::with_capacity(self.amount);

        for _ in 0..self.amount {
            assert!(
                self.tournament_size <= available.len(),
                "tournament_size {} exceeds the {} candidates still available",
                self.tournament_size,
                available.len()
            );

            // Draw participants from the pool without replacement and
            // order them best-first.
            let mut participants: Vec<usize> = index::sample(rng, available.len(), self.tournament_size)
                .iter()
                .map(|slot| available[slot])
                .collect();
            participants.sort_unstable();

            let mut winner_pos = 0;
            while winner_pos < self.tournament_size - 1 {
                if rng.random::<f64>() < self.win_probability {
                    break;
                }
                winner_pos += 1;
            }
            let winner = participants[winner_pos];

            let pool_slot = available
                .iter()
                .position(|&idx| idx == winner)
                .expect("winner was drawn from the pool");
            available.remove(pool_slot);
            selected.push(&ranked[winner]);
        }

        selected
    }
}
