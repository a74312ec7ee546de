//! Balloon Words - a terminal vocabulary game.
//!
//! Balloons carrying words drift up a canvas; click the one whose word
//! matches the definition on screen. The game logic lives in [`balloons`]
//! and is independent of the terminal; [`ui`] draws it with ratatui.

pub mod balloons;
pub mod build_info;
pub mod core;
pub mod ui;

pub use balloons::{BalloonGame, ClickEvent, GameOverNotice, RoundPhase};
pub use crate::core::{GameConfig, RepeatingTask};
