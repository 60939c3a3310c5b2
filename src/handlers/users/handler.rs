//! User handler implementations

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{UserService, user_service::UserStats},
    state::AppState,
};

use super::{
    request::LeaderboardQuery,
    response::{LeaderboardResponse, RankedEntry},
};

/// Top users ranked by XP
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> AppResult<Json<LeaderboardResponse>> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let entries = UserService::leaderboard(state.db(), i64::from(limit)).await?;
    let entries = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
        .collect();

    Ok(Json(LeaderboardResponse { entries }))
}

/// Dashboard statistics for the current user
pub async fn my_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserStats>> {
    let stats = UserService::stats(state.db(), state.level_curve(), &auth_user.id).await?;
    Ok(Json(stats))
}
