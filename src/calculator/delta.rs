//! XP still required between two positions

use std::fmt;

use thiserror::Error;

/// Successful calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpNeeded {
    pub xp_needed: u32,
    pub target_level: u32,
}

impl fmt::Display for XpNeeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total XP Needed to reach level {}: {}",
            self.target_level, self.xp_needed
        )
    }
}

/// Validation failures shown to the user instead of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum XpNeededError {
    #[error("Target XP must be higher than current XP.")]
    TargetNotAboveCurrent { current_xp: u32, target_xp: u32 },
}

/// XP required to get from `current_xp` to `target_xp`.
///
/// The target has to be strictly above the current XP.
pub fn compute_xp_needed(
    current_xp: u32,
    target_xp: u32,
    target_level: u32,
) -> Result<XpNeeded, XpNeededError> {
    if target_xp <= current_xp {
        return Err(XpNeededError::TargetNotAboveCurrent { current_xp, target_xp });
    }

    Ok(XpNeeded {
        xp_needed: target_xp - current_xp,
        target_level,
    })
}
