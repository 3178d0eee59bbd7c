//! UI widgets

pub mod field_input;

pub use field_input::{FieldInputWidget, level_bar};
