//! User response DTOs

use serde::Serialize;

use crate::services::user_service::LeaderboardEntry;

/// Leaderboard response with 1-based ranks
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<RankedEntry>,
}

/// One ranked leaderboard row
#[derive(Debug, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}
