pub mod cli;
pub mod game;
