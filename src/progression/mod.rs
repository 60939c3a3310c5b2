//! XP, levels, and streaks
//!
//! Pure bookkeeping over a user's practice history: the XP/level curve, the
//! per-difficulty reward table, and the daily streak calculator.

pub mod levels;
pub mod streak;

pub use levels::{LevelCurve, Progression, RewardTable};
pub use streak::{StreakSummary, compute_streak};
