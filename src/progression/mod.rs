//! Progression systems

pub mod xp;

pub use xp::{
    XpTable, InvalidTable, xp_from_level, level_from_xp,
    MAX_LEVEL, MAX_XP, MIN_START_XP, MIN_TARGET_XP, XP_PER_LEVEL,
};
