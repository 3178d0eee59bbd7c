//! User Interface module
//!
//! Terminal UI using ratatui.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::{Palette, Theme};
