pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod game;
pub mod menu;
pub mod persistence;
pub mod scoreboard;
pub mod settings;

pub use error::{GameError, Result};
