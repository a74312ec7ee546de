//! Timing, configuration, and logging shared by the game and the terminal front end.

pub mod config;
pub mod constants;
pub mod logging;
pub mod ticker;

pub use config::{ConfigError, GameConfig};
pub use constants::*;
pub use ticker::RepeatingTask;
