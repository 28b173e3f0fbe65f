#![allow(dead_code)]
use crate::engine::{self, Action, Game};
use crate::players::player::Player;
use crate::players::qlearning_player::QLearningPlayer;

const DEFAULT_LEARNING_RATE: f64 = 0.5;
const DEFAULT_EXPLORATION_RATE: f64 = 0.1;

/// Trains a fresh agent through `episodes` games of self-play on the
/// default pile configuration.
pub fn train(episodes: usize) -> QLearningPlayer {
    let mut agent = QLearningPlayer::new(DEFAULT_LEARNING_RATE, DEFAULT_EXPLORATION_RATE);
    train_agent(&mut agent, &engine::DEFAULT_PILES, episodes);
    agent
}

/// Self-play loop for a caller-configured agent. One agent plays both
/// seats: same table, same hyperparameters.
pub fn train_agent(agent: &mut QLearningPlayer, piles: &[u8], episodes: usize) {
    for episode in 0..episodes {
        log::debug!("playing training game {}", episode + 1);
        run_episode(agent, piles);
    }
    log::info!("done training after {} episodes", episodes);
}

/// One full game of self-play. Rewards are deferred until the game ends:
/// the winning move gets +1, the loser's previous move gets -1, and every
/// move superseded mid-game gets a neutral 0 so value flows backwards.
fn run_episode(agent: &mut QLearningPlayer, piles: &[u8]) {
    let mut game = Game::with_piles(piles.to_vec());
    let mut last: [Option<(Vec<u8>, Action)>; 2] = [None, None];

    loop {
        let state = game.piles.clone();
        let action = agent
            .choose_action(&state, true)
            .expect("a running game has legal actions");
        last[game.player] = Some((state.clone(), action));
        game.apply(&action).expect("chosen action is legal");
        let new_state = game.piles.clone();

        if game.is_terminal() {
            // The mover emptied the piles and won; after the turn switch
            // `game.player` is the loser.
            agent.update(&state, action, &new_state, 1.0);
            if let Some((loser_state, loser_action)) = last[game.player].take() {
                agent.update(&loser_state, loser_action, &new_state, -1.0);
            }
            return;
        }

        // The player now to move sees the state their previous action led
        // to; give that transition its neutral update.
        if let Some((prev_state, prev_action)) = last[game.player].clone() {
            agent.update(&prev_state, prev_action, &new_state, 0.0);
        }
    }
}

/// Runs one game between two players and returns the winning seat.
pub fn play_game(first: &mut dyn Player, second: &mut dyn Player, piles: &[u8]) -> usize {
    let mut game = Game::with_piles(piles.to_vec());
    while !game.is_terminal() {
        let mover: &mut dyn Player = if game.player == 0 {
            &mut *first
        } else {
            &mut *second
        };
        let action = mover
            .choose_action(&game.piles)
            .expect("a running game has legal actions");
        game.apply(&action).expect("chosen action is legal");
    }
    game.winner.expect("finished game has a winner")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::random_player::RandomPlayer;

    const TAKE_ONE: Action = Action { pile: 0, count: 1 };
    const TAKE_TWO: Action = Action { pile: 0, count: 2 };

    #[test]
    fn test_train_zero_episodes() {
        let agent = train(0);
        assert!(agent.q_table().is_empty());
    }

    #[test]
    fn test_train_populates_table() {
        let agent = train(5);
        assert!(!agent.q_table().is_empty());
    }

    #[test]
    fn test_one_episode_single_object() {
        // Player 0's only move wins immediately. Player 1 never acts, so
        // the winning update is the only entry: 0 + 0.5 * (1 + 0 - 0).
        let mut agent = QLearningPlayer::with_seed(0.5, 0.0, 0);
        train_agent(&mut agent, &[1], 1);
        assert_eq!(0.5, agent.estimate(&[1], TAKE_ONE));
        assert_eq!(1, agent.q_table().len());
    }

    #[test]
    fn test_one_episode_two_objects() {
        // With an empty table and no exploration both players take one
        // object, so player 1 wins: their move gets +0.5, player 0's gets
        // -0.5, and the untried (0, 2) action stays at the 0.0 default.
        let mut agent = QLearningPlayer::with_seed(0.5, 0.0, 0);
        train_agent(&mut agent, &[2], 1);
        assert_eq!(0.5, agent.estimate(&[1], TAKE_ONE));
        assert_eq!(-0.5, agent.estimate(&[2], TAKE_ONE));
        assert_eq!(0.0, agent.estimate(&[2], TAKE_TWO));
        assert_eq!(2, agent.q_table().len());
    }

    #[test]
    fn test_one_episode_neutral_update() {
        // Three single-object turns. Player 0's opening move is superseded
        // mid-game and gets the neutral update, which records a 0.0 entry.
        let mut agent = QLearningPlayer::with_seed(0.5, 0.0, 0);
        train_agent(&mut agent, &[3], 1);
        assert_eq!(0.0, agent.estimate(&[3], TAKE_ONE));
        assert_eq!(-0.5, agent.estimate(&[2], TAKE_ONE));
        assert_eq!(0.5, agent.estimate(&[1], TAKE_ONE));
        assert_eq!(3, agent.q_table().len());
    }

    #[test]
    fn test_play_game_completes() {
        let mut first = RandomPlayer::with_seed(1);
        let mut second = RandomPlayer::with_seed(2);
        let winner = play_game(&mut first, &mut second, &engine::DEFAULT_PILES);
        assert!(winner == 0 || winner == 1);
    }

    #[test]
    fn test_trained_agent_beats_random() {
        let mut agent = QLearningPlayer::with_seed(0.5, 0.1, 11);
        train_agent(&mut agent, &engine::DEFAULT_PILES, 10_000);

        let mut random = RandomPlayer::with_seed(5);
        let mut wins = 0;
        for round in 0..200 {
            // Alternate seats so the result does not hinge on move order.
            let won = if round % 2 == 0 {
                play_game(&mut agent, &mut random, &engine::DEFAULT_PILES) == 0
            } else {
                play_game(&mut random, &mut agent, &engine::DEFAULT_PILES) == 1
            };
            if won {
                wins += 1;
            }
        }
        assert!(wins > 120, "trained agent won only {} of 200 games", wins);
    }
}
