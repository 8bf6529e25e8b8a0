//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the pet list and detail screens using ratatui,
//! maps keyboard input onto application actions, and owns the text
//! resources shown on screen.

pub mod ui;
pub mod input;
pub mod strings;
pub mod terminal;

pub use ui::*;
pub use input::*;
pub use strings::*;
pub use terminal::*;
