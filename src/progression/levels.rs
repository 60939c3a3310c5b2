//! XP accumulation and leveling

use crate::{
    constants::{LEVEL_STEP, rewards},
    models::Difficulty,
};

/// A user's XP and level after an award
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub xp: i32,
    pub level: i32,
}

/// The XP-per-level step function.
///
/// Constructed once at startup and injected; levels are derived from total
/// XP, never stored arithmetic of their own.
#[derive(Debug, Clone, Copy)]
pub struct LevelCurve {
    step: i32,
}

impl LevelCurve {
    pub const fn new(step: i32) -> Self {
        Self { step }
    }

    /// Total XP at which `level` begins
    pub fn xp_for_level(&self, level: i32) -> i32 {
        (level - 1) * self.step
    }

    /// Total XP at which `level` is left behind
    pub fn next_level_at(&self, level: i32) -> i32 {
        level * self.step
    }

    /// Add `gained` XP and advance the level as far as the new total
    /// carries it. Level never decreases; XP strictly increases for any
    /// positive gain.
    pub fn add_xp(&self, current_xp: i32, current_level: i32, gained: i32) -> Progression {
        let xp = current_xp + gained;
        let mut level = current_level;
        while xp >= self.next_level_at(level) {
            level += 1;
        }
        Progression { xp, level }
    }
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::new(LEVEL_STEP)
    }
}

/// XP rewards per problem difficulty.
///
/// An unrecognized difficulty string pays the hard reward; that is a
/// deliberate fallback, not an error.
#[derive(Debug, Clone, Copy)]
pub struct RewardTable {
    easy: i32,
    medium: i32,
    hard: i32,
}

impl RewardTable {
    pub const fn new(easy: i32, medium: i32, hard: i32) -> Self {
        Self { easy, medium, hard }
    }

    /// Reward for solving a problem of the given stored difficulty
    pub fn reward_for(&self, difficulty: &str) -> i32 {
        match Difficulty::parse(difficulty) {
            Some(Difficulty::Easy) => self.easy,
            Some(Difficulty::Medium) => self.medium,
            Some(Difficulty::Hard) | None => self.hard,
        }
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::new(rewards::EASY, rewards::MEDIUM, rewards::HARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_gain_changes_nothing() {
        let curve = LevelCurve::default();
        let result = curve.add_xp(250, 3, 0);
        assert_eq!(result, Progression { xp: 250, level: 3 });
    }

    #[test]
    fn test_multi_level_jump() {
        let curve = LevelCurve::default();
        // 250 total XP clears the level-1 (100) and level-2 (200) thresholds
        // but not level-3 (300).
        let result = curve.add_xp(0, 1, 250);
        assert_eq!(result, Progression { xp: 250, level: 3 });
    }

    #[test]
    fn test_single_step() {
        let curve = LevelCurve::default();
        let result = curve.add_xp(95, 1, 10);
        assert_eq!(result, Progression { xp: 105, level: 2 });
    }

    #[test]
    fn test_gain_below_threshold_keeps_level() {
        let curve = LevelCurve::default();
        let result = curve.add_xp(10, 1, 20);
        assert_eq!(result, Progression { xp: 30, level: 1 });
    }

    #[test]
    fn test_level_never_decreases() {
        let curve = LevelCurve::default();
        let result = curve.add_xp(0, 5, 10);
        assert_eq!(result.level, 5);
    }

    #[test]
    fn test_curve_thresholds() {
        let curve = LevelCurve::default();
        assert_eq!(curve.xp_for_level(1), 0);
        assert_eq!(curve.xp_for_level(3), 200);
        assert_eq!(curve.next_level_at(1), 100);
    }

    #[test]
    fn test_reward_table() {
        let table = RewardTable::default();
        assert_eq!(table.reward_for("EASY"), 10);
        assert_eq!(table.reward_for("MEDIUM"), 20);
        assert_eq!(table.reward_for("HARD"), 40);
        // Unknown difficulties fall back to the hard reward.
        assert_eq!(table.reward_for("LEGENDARY"), 40);
        assert_eq!(table.reward_for(""), 40);
    }
}
