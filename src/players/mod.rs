pub mod player;
pub mod qlearning_player;
pub mod random_player;
