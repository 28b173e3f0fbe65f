#![allow(dead_code)]
use crate::engine::{Action, GameError};

pub trait Player {
    /// Picks a move for the given pile configuration. Fails with
    /// `NoLegalActions` when every pile is empty.
    fn choose_action(&mut self, piles: &[u8]) -> Result<Action, GameError>;
}
