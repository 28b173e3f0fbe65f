#![allow(dead_code)]
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::engine::{self, Action, Game};
use crate::players::qlearning_player::QLearningPlayer;

/// Interactive game of Nim against a trained agent on the console. The
/// human's seat is chosen at random when `human_player` is `None`.
pub fn play(agent: &mut QLearningPlayer, human_player: Option<usize>) -> io::Result<()> {
    let human = human_player.unwrap_or_else(|| rand::thread_rng().gen_range(0..2));
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut game = Game::new();

    loop {
        println!();
        println!("Piles:");
        for (pile, size) in game.piles.iter().enumerate() {
            println!("Pile {}: {}", pile, size);
        }
        println!();

        let legal = engine::legal_actions(&game.piles);
        thread::sleep(Duration::from_secs(1));

        let action = if game.player == human {
            println!("Your Turn");
            prompt_action(&mut input, &legal)?
        } else {
            println!("AI's Turn");
            let action = agent
                .choose_action(&game.piles, false)
                .expect("a running game has legal actions");
            println!("AI chose to {}.", action);
            action
        };

        game.apply(&action).expect("move drawn from the legal set");

        if let Some(winner) = game.winner {
            println!();
            println!("GAME OVER");
            let name = if winner == human { "Human" } else { "AI" };
            println!("Winner is {}", name);
            return Ok(());
        }
    }
}

/// Prompts until the human enters a move from the legal set.
fn prompt_action<B: BufRead>(input: &mut io::Lines<B>, legal: &[Action]) -> io::Result<Action> {
    loop {
        let pile = prompt_number(input, "Choose Pile: ")?;
        let count = prompt_number(input, "Choose Count: ")?;
        let action = Action { pile, count };
        if legal.contains(&action) {
            return Ok(action);
        }
        println!("Invalid move, try again.");
    }
}

fn prompt_number<T: FromStr, B: BufRead>(
    input: &mut io::Lines<B>,
    prompt: &str,
) -> io::Result<T> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let line = match input.next() {
            Some(line) => line?,
            None => return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
        };
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Enter a number."),
        }
    }
}
