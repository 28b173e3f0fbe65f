#![allow(dead_code)]
use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::SplitMix64;

use crate::engine::{self, Action, GameError};
use crate::players::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StateActionPair {
    piles: Vec<u8>,
    action: Action,
}

/// Table of expected-reward estimates keyed by (state, action). Absent keys
/// read as 0.0; entries are created lazily on first `set`.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    values: HashMap<StateActionPair, f64>,
}

impl QTable {
    pub fn new() -> Self {
        QTable {
            values: HashMap::new(),
        }
    }

    pub fn get(&self, piles: &[u8], action: Action) -> f64 {
        self.lookup(piles, action).unwrap_or(0.0)
    }

    /// Like `get`, but distinguishes a stored 0.0 from a missing entry.
    pub fn lookup(&self, piles: &[u8], action: Action) -> Option<f64> {
        self.values
            .get(&StateActionPair {
                piles: piles.to_vec(),
                action,
            })
            .copied()
    }

    pub fn set(&mut self, piles: &[u8], action: Action, value: f64) {
        self.values.insert(
            StateActionPair {
                piles: piles.to_vec(),
                action,
            },
            value,
        );
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub struct QLearningPlayer {
    q: QTable,
    learning_rate: f64,
    exploration_rate: f64,
    rng: SplitMix64,
}

impl QLearningPlayer {
    pub fn new(learning_rate: f64, exploration_rate: f64) -> Self {
        QLearningPlayer {
            q: QTable::new(),
            learning_rate,
            exploration_rate,
            rng: SplitMix64::from_entropy(),
        }
    }

    /// Same agent, but with a fixed RNG seed so runs are reproducible.
    pub fn with_seed(learning_rate: f64, exploration_rate: f64, seed: u64) -> Self {
        QLearningPlayer {
            q: QTable::new(),
            learning_rate,
            exploration_rate,
            rng: SplitMix64::seed_from_u64(seed),
        }
    }

    pub fn q_table(&self) -> &QTable {
        &self.q
    }

    pub fn estimate(&self, piles: &[u8], action: Action) -> f64 {
        self.q.get(piles, action)
    }

    /// Best stored estimate among the actions legal from `piles`, with the
    /// running max starting at 0.0: a known-bad action never beats an
    /// unexplored one, and an all-negative state still reads as 0.0. Returns
    /// 0.0 for a terminal state.
    pub fn best_future_reward(&self, piles: &[u8]) -> f64 {
        let mut best = 0.0;
        for action in engine::legal_actions(piles) {
            if let Some(value) = self.q.lookup(piles, action) {
                if value > best {
                    best = value;
                }
            }
        }
        best
    }

    /// One-step temporal-difference update with discount 1:
    /// q <- q + alpha * (reward + best_future - q)
    pub fn update(&mut self, old_piles: &[u8], action: Action, new_piles: &[u8], reward: f64) {
        let old = self.estimate(old_piles, action);
        let future = self.best_future_reward(new_piles);
        let value = old + self.learning_rate * (reward + future - old);
        self.q.set(old_piles, action, value);
    }

    /// Epsilon-greedy action selection. With `explore`, an exploration_rate
    /// chance of a uniformly random legal action; otherwise the first legal
    /// action (in `legal_actions` order, which is the tie rule) whose stored
    /// estimate equals `best_future_reward`, falling back to the first legal
    /// action when nothing is recorded yet.
    pub fn choose_action(&mut self, piles: &[u8], explore: bool) -> Result<Action, GameError> {
        let actions = engine::legal_actions(piles);
        if actions.is_empty() {
            return Err(GameError::NoLegalActions);
        }

        if explore && self.rng.gen_bool(self.exploration_rate) {
            return Ok(*actions.choose(&mut self.rng).unwrap());
        }

        let best = self.best_future_reward(piles);
        for &action in &actions {
            if let Some(value) = self.q.lookup(piles, action) {
                if value == best {
                    return Ok(action);
                }
            }
        }
        Ok(actions[0])
    }
}

impl Player for QLearningPlayer {
    fn choose_action(&mut self, piles: &[u8]) -> Result<Action, GameError> {
        QLearningPlayer::choose_action(self, piles, false)
    }
}
