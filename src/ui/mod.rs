//! Terminal front end: ratatui widgets for the game screen.

pub mod balloon_scene;
pub mod canvas_surface;
pub mod game_common;

pub use balloon_scene::{canvas_is_drawable, cell_to_canvas, render_balloon_game};
