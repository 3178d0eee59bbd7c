//! XP calculator core
//!
//! Input sanitization, the linked level/XP fields, and the delta calculation.
//! Everything here is pure; the UI and CLI own all reading and writing of text.

pub mod delta;
pub mod sanitize;
pub mod state;

pub use delta::{compute_xp_needed, XpNeeded, XpNeededError};
pub use sanitize::sanitize;
pub use state::{CalculatorState, Field, FieldBounds, LevelState};
