//! ICGrind - An Idle Clans XP calculator
//!
//! Converts between skill levels and total XP on the game's 120-level curve
//! and works out how much XP is left to reach a target.

pub mod progression;
pub mod calculator;
pub mod data;
pub mod save;
pub mod ui;
pub mod cli;

// Re-export commonly used types
pub use calculator::{CalculatorState, Field, XpNeeded, XpNeededError, compute_xp_needed, sanitize};
pub use progression::{XpTable, level_from_xp, xp_from_level, MAX_LEVEL, MAX_XP};
