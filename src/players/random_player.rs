#![allow(dead_code)]
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::SplitMix64;

use crate::engine::{self, Action, GameError};
use crate::players::player::Player;

/// Baseline player that picks a uniformly random legal action. Useful for
/// measuring whether a trained agent learned anything.
pub struct RandomPlayer {
    rng: SplitMix64,
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer {
            rng: SplitMix64::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: SplitMix64::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn choose_action(&mut self, piles: &[u8]) -> Result<Action, GameError> {
        let actions = engine::legal_actions(piles);
        actions
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalActions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_action_is_legal() {
        let mut player = RandomPlayer::with_seed(3);
        let piles = vec![1, 0, 4];
        let legal = engine::legal_actions(&piles);
        for _ in 0..100 {
            let action = player.choose_action(&piles).unwrap();
            assert!(legal.contains(&action));
        }
    }

    #[test]
    fn test_no_legal_actions() {
        let mut player = RandomPlayer::with_seed(3);
        assert_eq!(
            Err(GameError::NoLegalActions),
            player.choose_action(&[0, 0])
        );
    }

    #[test]
    fn test_random_game_completes() {
        let mut player = RandomPlayer::with_seed(99);
        let mut game = engine::Game::new();
        while !game.is_terminal() {
            let action = player.choose_action(&game.piles).unwrap();
            game.apply(&action).unwrap();
        }
        assert!(game.winner.is_some());
    }
}
