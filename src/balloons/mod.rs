//! Balloon Words.
//!
//! Balloons carrying vocabulary words drift up the canvas and wrap back to
//! the bottom. A definition is shown; clicking the balloon with the matching
//! word pops it for points, clicking any other balloon costs points. Popping
//! every balloon ends the game and a new one starts immediately.

pub mod logic;
pub mod surface;
pub mod types;

pub use logic::*;
pub use surface::{Rgb, Surface};
pub use types::*;
