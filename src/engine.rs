#![allow(dead_code)]
use std::fmt;

use itertools::Itertools;

/// Default starting configuration, one entry per pile.
pub const DEFAULT_PILES: [u8; 4] = [1, 3, 5, 7];

/// Removal of `count` objects from pile `pile`. Compared and stored by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub pile: usize,
    pub count: u8,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "take {} from pile {}", self.count, self.pile)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Pile index out of range, or count < 1 or larger than the pile.
    InvalidAction,
    /// A move was attempted after a winner was recorded.
    GameAlreadyOver,
    /// An action was requested for a state with no legal actions.
    NoLegalActions,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidAction => write!(f, "invalid action"),
            GameError::GameAlreadyOver => write!(f, "game is already over"),
            GameError::NoLegalActions => write!(f, "no legal actions"),
        }
    }
}

impl std::error::Error for GameError {}

pub fn other_player(player: usize) -> usize {
    1 - player
}

/// Every (pile, count) pair playable from `piles`, in ascending
/// (pile, count) order. Empty once all piles are zero.
pub fn legal_actions(piles: &[u8]) -> Vec<Action> {
    let mut actions = vec![];
    for (pile, &size) in piles.iter().enumerate() {
        for count in 1..=size {
            actions.push(Action { pile, count });
        }
    }
    actions
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub piles: Vec<u8>,
    pub player: usize,
    pub winner: Option<usize>,
}

impl Game {
    pub fn new() -> Self {
        Game::with_piles(DEFAULT_PILES.to_vec())
    }

    pub fn with_piles(piles: Vec<u8>) -> Self {
        Game {
            piles,
            player: 0,
            winner: None,
        }
    }

    /// Applies `action` for the active player: removes the objects, records
    /// the mover as winner if the piles are now empty (last player to remove
    /// an object wins), and passes the turn.
    pub fn apply(&mut self, action: &Action) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        if action.pile >= self.piles.len() {
            return Err(GameError::InvalidAction);
        }
        if action.count < 1 || action.count > self.piles[action.pile] {
            return Err(GameError::InvalidAction);
        }

        self.piles[action.pile] -= action.count;
        if self.piles.iter().all(|&size| size == 0) {
            self.winner = Some(self.player);
        }
        self.player = other_player(self.player);
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piles [{}]", self.piles.iter().join(" "))
    }
}
