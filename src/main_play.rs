mod engine;
mod play;
mod players;
mod train;

use clap::Parser;

#[derive(Parser)]
#[command(about = "Play Nim against a self-taught Q-learning agent")]
struct Args {
    /// Number of self-play training games before the match
    #[arg(long, default_value_t = 10_000)]
    episodes: usize,

    /// Seat to play from (0 moves first); random when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=1))]
    seat: Option<u8>,
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut agent = train::train(args.episodes);
    play::play(&mut agent, args.seat.map(usize::from))
}
