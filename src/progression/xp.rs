//! Experience and leveling
//!
//! The XP table, level/XP conversions, and progress helpers.

use thiserror::Error;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 120;
/// Experience is capped here by the game
pub const MAX_XP: u32 = 500_000_000;
/// Lowest total XP for a starting position
pub const MIN_START_XP: u32 = 0;
/// Lowest total XP for a target position
pub const MIN_TARGET_XP: u32 = 1;

const TABLE_LEN: usize = MAX_LEVEL as usize;

/// Total XP required to reach each level. Index is `level - 1`.
///
/// Sourced from the official Idle Clans wiki XP table. The curve is shared by
/// all skills.
pub const XP_PER_LEVEL: [u32; TABLE_LEN] = [
    0, 75, 151, 227, 303, 380, 531, 683, 836, 988,
    1141, 1294, 1447, 1751, 2054, 2358, 2663, 2967, 3272, 3577,
    4182, 4788, 5393, 5999, 6606, 7212, 7819, 9026, 10233, 11441,
    12648, 13856, 15065, 16273, 18682, 21091, 23500, 25910, 28319, 30729,
    33140, 37950, 42761, 47572, 52383, 57195, 62006, 66818, 76431, 86043,
    95656, 105269, 114882, 124496, 134109, 153323, 172538, 191752, 210967, 230182,
    249397, 268613, 307028, 345444, 383861, 422277, 460694, 499111, 537528, 614346,
    691163, 767981, 844800, 921618, 998437, 1075256, 1228875, 1382495, 1536114, 1689734,
    1843355, 1996975, 2150596, 2457817, 2765038, 3072260, 3379481, 3686703, 3993926, 4301148,
    4915571, 5529994, 6144417, 6758841, 7373264, 7987688, 8602113, 9830937, 11059762, 12288587,
    13517412, 14746238, 15975063, 17203889, 19661516, 22119142, 24576769, 27034396, 29492023, 31949651,
    34407278, 39322506, 44237735, 49152963, 54068192, 58983421, 63898650, 68813880, 78644309, 88474739,
];

static BUILTIN: XpTable = XpTable { thresholds: XP_PER_LEVEL };

/// Reasons a threshold list cannot be used as an XP table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTable {
    #[error("expected {expected} levels, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("level 1 must require 0 XP, found {0}")]
    NonZeroStart(u32),
    #[error("level {level} requires {xp} XP, which is not more than the level before it")]
    NotIncreasing { level: u32, xp: u32 },
    #[error("the final level requires {0} XP, above the XP cap")]
    AboveCap(u32),
}

/// Cumulative XP thresholds for levels 1 through [`MAX_LEVEL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpTable {
    thresholds: [u32; TABLE_LEN],
}

impl XpTable {
    /// Build a table from a list of thresholds, checking the curve is usable
    pub fn new(values: &[u32]) -> Result<Self, InvalidTable> {
        let thresholds: [u32; TABLE_LEN] = values.try_into().map_err(|_| {
            InvalidTable::WrongLength { expected: TABLE_LEN, found: values.len() }
        })?;

        if thresholds[0] != 0 {
            return Err(InvalidTable::NonZeroStart(thresholds[0]));
        }
        if let Some(i) = thresholds.windows(2).position(|w| w[1] <= w[0]) {
            return Err(InvalidTable::NotIncreasing {
                level: i as u32 + 2,
                xp: thresholds[i + 1],
            });
        }
        if thresholds[TABLE_LEN - 1] > MAX_XP {
            return Err(InvalidTable::AboveCap(thresholds[TABLE_LEN - 1]));
        }

        Ok(Self { thresholds })
    }

    /// The curve published by the game
    pub fn builtin() -> &'static XpTable {
        &BUILTIN
    }

    /// Raw thresholds, index `level - 1`
    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    /// `(level, total xp)` pairs in level order
    pub fn levels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.thresholds.iter().enumerate().map(|(i, &xp)| (i as u32 + 1, xp))
    }

    /// Total XP needed to reach `level`, clamped into 1..=MAX_LEVEL
    pub fn xp_for_level(&self, level: impl Into<i64>) -> u32 {
        let level: i64 = level.into();
        let level = level.clamp(1, MAX_LEVEL as i64);
        self.thresholds[(level - 1) as usize]
    }

    /// Highest level whose threshold is at or below `xp`.
    ///
    /// Negative XP is level 1; anything past the last threshold is MAX_LEVEL.
    pub fn level_for_xp(&self, xp: impl Into<i64>) -> u32 {
        let xp: i64 = xp.into();
        let reached = self.thresholds.partition_point(|&t| i64::from(t) <= xp);
        (reached as u32).max(1)
    }

    /// XP remaining until the next level, `None` once at MAX_LEVEL
    pub fn xp_to_next_level(&self, xp: impl Into<i64>) -> Option<u32> {
        let xp: i64 = xp.into();
        let xp = xp.max(0);
        let level = self.level_for_xp(xp);
        if level >= MAX_LEVEL {
            return None;
        }
        let next = i64::from(self.thresholds[level as usize]);
        Some((next - xp) as u32)
    }

    /// Fraction of the current level completed, in 0.0..=1.0
    pub fn level_progress(&self, xp: impl Into<i64>) -> f64 {
        let xp: i64 = xp.into();
        let xp = xp.max(0);
        let level = self.level_for_xp(xp);
        if level >= MAX_LEVEL {
            return 1.0;
        }
        let floor = i64::from(self.thresholds[level as usize - 1]);
        let next = i64::from(self.thresholds[level as usize]);
        (xp - floor) as f64 / (next - floor) as f64
    }
}

impl Default for XpTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

/// Total XP required for `level` on the built-in curve
pub fn xp_from_level(level: impl Into<i64>) -> u32 {
    BUILTIN.xp_for_level(level)
}

/// Level reached with `xp` total experience on the built-in curve
pub fn level_from_xp(xp: impl Into<i64>) -> u32 {
    BUILTIN.level_for_xp(xp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_builtin_table_is_valid() {
        assert!(XpTable::new(&XP_PER_LEVEL).is_ok());
    }

    #[test]
    fn test_table_strictly_increasing() {
        for level in 1..MAX_LEVEL {
            assert!(xp_from_level(level) < xp_from_level(level + 1), "level {}", level);
        }
    }

    #[test]
    fn test_round_trip_every_level() {
        for level in 1..=MAX_LEVEL {
            assert_eq!(level_from_xp(xp_from_level(level)), level);
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(xp_from_level(1), 0);
        assert_eq!(level_from_xp(0), 1);
        assert_eq!(xp_from_level(MAX_LEVEL), 88_474_739);
        assert_eq!(level_from_xp(88_474_739), MAX_LEVEL);
        assert_eq!(level_from_xp(MAX_XP), MAX_LEVEL);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(xp_from_level(10), 988);
        assert_eq!(xp_from_level(11), 1141);
        assert_eq!(level_from_xp(74), 1);
        assert_eq!(level_from_xp(75), 2);
        assert_eq!(level_from_xp(150), 2);
        assert_eq!(level_from_xp(151), 3);
        assert_eq!(level_from_xp(226), 3);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(xp_from_level(0), 0);
        assert_eq!(xp_from_level(-5), 0);
        assert_eq!(xp_from_level(500), 88_474_739);
        assert_eq!(level_from_xp(-1), 1);
        assert_eq!(level_from_xp(i64::MIN), 1);
        assert_eq!(level_from_xp(i64::MAX), MAX_LEVEL);
    }

    #[test]
    fn test_xp_to_next_level() {
        let table = XpTable::builtin();
        assert_eq!(table.xp_to_next_level(0), Some(75));
        assert_eq!(table.xp_to_next_level(100), Some(51));
        assert_eq!(table.xp_to_next_level(151), Some(76));
        assert_eq!(table.xp_to_next_level(88_474_739), None);
    }

    #[test]
    fn test_level_progress() {
        let table = XpTable::builtin();
        assert_eq!(table.level_progress(0), 0.0);
        assert!((table.level_progress(113) - 38.0 / 76.0).abs() < 1e-9);
        assert_eq!(table.level_progress(MAX_XP), 1.0);
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert_eq!(
            XpTable::new(&[0, 10, 20]),
            Err(InvalidTable::WrongLength { expected: 120, found: 3 })
        );

        let mut shifted = XP_PER_LEVEL;
        shifted[0] = 5;
        assert_eq!(XpTable::new(&shifted), Err(InvalidTable::NonZeroStart(5)));

        let mut flat = XP_PER_LEVEL;
        flat[3] = flat[2];
        assert_eq!(
            XpTable::new(&flat),
            Err(InvalidTable::NotIncreasing { level: 4, xp: 151 })
        );

        let mut huge = XP_PER_LEVEL;
        huge[119] = MAX_XP + 1;
        assert_eq!(XpTable::new(&huge), Err(InvalidTable::AboveCap(MAX_XP + 1)));
    }

    #[test]
    fn test_levels_iterator() {
        let levels: Vec<_> = XpTable::builtin().levels().take(3).collect();
        assert_eq!(levels, vec![(1, 0), (2, 75), (3, 151)]);
        assert_eq!(XpTable::builtin().levels().count(), 120);
    }

    proptest! {
        #[test]
        fn level_floor_never_exceeds_xp(xp in 0u32..=MAX_XP) {
            let level = level_from_xp(xp);
            prop_assert!(xp_from_level(level) <= xp);
            if level < MAX_LEVEL {
                prop_assert!(xp < xp_from_level(level + 1));
            }
        }

        #[test]
        fn level_always_in_range(xp in any::<i64>()) {
            let level = level_from_xp(xp);
            prop_assert!((1..=MAX_LEVEL).contains(&level));
        }
    }
}
