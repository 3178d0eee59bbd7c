//! Linked calculator fields
//!
//! The calculator has two sides, current and target, each a level paired with
//! a total XP. Editing either half of a pair rewrites the other half so the
//! pair always agrees with the XP table. The two sides never affect each other.

use crate::progression::{XpTable, MAX_LEVEL, MAX_XP, MIN_START_XP, MIN_TARGET_XP};

use super::delta::{compute_xp_needed, XpNeeded, XpNeededError};
use super::sanitize::sanitize;

/// One of the four editable inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CurrentLevel,
    CurrentXp,
    TargetLevel,
    TargetXp,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [
        Field::CurrentLevel,
        Field::CurrentXp,
        Field::TargetLevel,
        Field::TargetXp,
    ];

    /// Inclusive bounds accepted by this field
    pub fn bounds(&self) -> FieldBounds {
        match self {
            Field::CurrentLevel | Field::TargetLevel => FieldBounds::new(1, MAX_LEVEL),
            Field::CurrentXp => FieldBounds::new(MIN_START_XP, MAX_XP),
            Field::TargetXp => FieldBounds::new(MIN_TARGET_XP, MAX_XP),
        }
    }

    /// The field recomputed when this one is edited
    pub fn paired(&self) -> Field {
        match self {
            Field::CurrentLevel => Field::CurrentXp,
            Field::CurrentXp => Field::CurrentLevel,
            Field::TargetLevel => Field::TargetXp,
            Field::TargetXp => Field::TargetLevel,
        }
    }

    pub fn is_level(&self) -> bool {
        matches!(self, Field::CurrentLevel | Field::TargetLevel)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::CurrentLevel => "Current Level",
            Field::CurrentXp => "Current Total XP",
            Field::TargetLevel => "Target Level",
            Field::TargetXp => "Target Total XP",
        }
    }

    /// Next field in display order, wrapping
    pub fn next(&self) -> Field {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous field in display order, wrapping
    pub fn prev(&self) -> Field {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Inclusive `min..=max` range for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    pub min: u32,
    pub max: u32,
}

impl FieldBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn sanitize(&self, raw: &str) -> u32 {
        sanitize(raw, self.min, self.max)
    }
}

/// A level and the total XP that goes with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelState {
    pub level: u32,
    pub xp: u32,
}

impl LevelState {
    /// State sitting exactly on the threshold of `level`
    pub fn from_level(table: &XpTable, level: u32) -> Self {
        Self { level, xp: table.xp_for_level(level) }
    }

    /// State for an arbitrary total XP
    pub fn from_xp(table: &XpTable, xp: u32) -> Self {
        Self { level: table.level_for_xp(xp), xp }
    }
}

/// The four calculator fields, kept consistent pairwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    table: XpTable,
    pub current: LevelState,
    pub target: LevelState,
}

impl CalculatorState {
    pub const DEFAULT_CURRENT_LEVEL: u32 = 1;
    pub const DEFAULT_TARGET_LEVEL: u32 = 10;

    /// Start at the default levels on the given table
    pub fn new(table: XpTable) -> Self {
        Self::with_levels(table, Self::DEFAULT_CURRENT_LEVEL, Self::DEFAULT_TARGET_LEVEL)
    }

    /// Start from explicit levels; both sides derive their XP from the level
    pub fn with_levels(table: XpTable, current_level: u32, target_level: u32) -> Self {
        let bounds = Field::CurrentLevel.bounds();
        let current_level = current_level.clamp(bounds.min, bounds.max);
        let target_level = target_level.clamp(bounds.min, bounds.max);

        Self {
            current: LevelState::from_level(&table, current_level),
            target: LevelState::from_level(&table, target_level),
            table,
        }
    }

    pub fn table(&self) -> &XpTable {
        &self.table
    }

    /// Current numeric value of a field
    pub fn value(&self, field: Field) -> u32 {
        match field {
            Field::CurrentLevel => self.current.level,
            Field::CurrentXp => self.current.xp,
            Field::TargetLevel => self.target.level,
            Field::TargetXp => self.target.xp,
        }
    }

    /// Apply raw text typed into `field`.
    ///
    /// The text is sanitized against the field's bounds and stored, then the
    /// paired field is recomputed from it. Returns the sanitized value so the
    /// caller can write it back into the input.
    pub fn edit(&mut self, field: Field, raw: &str) -> u32 {
        let value = field.bounds().sanitize(raw);
        let table = &self.table;

        match field {
            Field::CurrentLevel => self.current = LevelState::from_level(table, value),
            Field::CurrentXp => self.current = LevelState::from_xp(table, value),
            Field::TargetLevel => self.target = LevelState::from_level(table, value),
            Field::TargetXp => self.target = LevelState::from_xp(table, value),
        }

        log::debug!(
            "{:?} <- {} ({:?} now {})",
            field,
            value,
            field.paired(),
            self.value(field.paired())
        );
        value
    }

    /// XP still needed to go from the current side to the target side
    pub fn xp_needed(&self) -> Result<XpNeeded, XpNeededError> {
        compute_xp_needed(self.current.xp, self.target.xp, self.target.level)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(XpTable::default())
    }
}
