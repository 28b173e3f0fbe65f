mod engine;
mod players;
mod train;

use clap::Parser;

use players::qlearning_player::QLearningPlayer;
use players::random_player::RandomPlayer;

#[derive(Parser)]
#[command(about = "Train a Nim agent through Q-learning self-play")]
struct Args {
    /// Number of self-play training games
    #[arg(long, default_value_t = 10_000)]
    episodes: usize,

    /// Learning rate
    #[arg(long, default_value_t = 0.5)]
    alpha: f64,

    /// Exploration rate
    #[arg(long, default_value_t = 0.1)]
    epsilon: f64,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluation games against the random baseline
    #[arg(long, default_value_t = 200)]
    eval_games: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut agent = match args.seed {
        Some(seed) => QLearningPlayer::with_seed(args.alpha, args.epsilon, seed),
        None => QLearningPlayer::new(args.alpha, args.epsilon),
    };
    train::train_agent(&mut agent, &engine::DEFAULT_PILES, args.episodes);
    log::info!("q-table holds {} entries", agent.q_table().len());

    let mut random = match args.seed {
        Some(seed) => RandomPlayer::with_seed(seed),
        None => RandomPlayer::new(),
    };
    let mut wins = 0;
    for round in 0..args.eval_games {
        // Alternate seats between rounds.
        let won = if round % 2 == 0 {
            train::play_game(&mut agent, &mut random, &engine::DEFAULT_PILES) == 0
        } else {
            train::play_game(&mut random, &mut agent, &engine::DEFAULT_PILES) == 1
        };
        if won {
            wins += 1;
        }
    }
    println!(
        "won {}/{} games against the random baseline",
        wins, args.eval_games
    );
}
