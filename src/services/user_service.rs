//! User progression and leaderboard service

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::statuses,
    db::repositories::{
        ProblemRepository, SubmissionRepository, UserRepository,
        submission_repo::RecentSubmission,
    },
    error::{AppError, AppResult},
    models::User,
    progression::{LevelCurve, StreakSummary, compute_streak},
};

/// How many recent submissions the dashboard shows
const RECENT_SUBMISSIONS_LIMIT: i64 = 10;

/// One row of the XP leaderboard
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub username: String,
    pub xp: i32,
    pub level: i32,
    pub solved: i64,
}

/// Aggregated progress for one user
#[derive(Debug, Serialize)]
pub struct UserStats {
    pub xp: i32,
    pub level: i32,
    pub next_level_at: i32,
    pub solved: i64,
    pub total_problems: i64,
    pub streak: StreakSummary,
    pub recent_submissions: Vec<RecentSubmission>,
}

/// User progression service
pub struct UserService;

impl UserService {
    /// Fetch a user by ID, erroring when missing
    pub async fn get_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Dashboard statistics for one user
    pub async fn stats(pool: &PgPool, curve: &LevelCurve, user_id: &Uuid) -> AppResult<UserStats> {
        let user = Self::get_by_id(pool, user_id).await?;

        let solved = SubmissionRepository::count_solved(pool, user_id).await?;
        let total_problems = ProblemRepository::count(pool).await?;
        let dates = SubmissionRepository::submission_dates(pool, user_id).await?;
        let streak = compute_streak(&dates);
        let recent_submissions =
            SubmissionRepository::recent_for_user(pool, user_id, RECENT_SUBMISSIONS_LIMIT).await?;

        Ok(UserStats {
            xp: user.xp,
            level: user.level,
            next_level_at: curve.next_level_at(user.level),
            solved,
            total_problems,
            streak,
            recent_submissions,
        })
    }

    /// Top users ranked by XP, solved count breaking ties
    pub async fn leaderboard(pool: &PgPool, limit: i64) -> AppResult<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT
                u.username,
                u.xp,
                u.level,
                COUNT(DISTINCT s.problem_id) FILTER (WHERE s.status = $1) AS solved
            FROM users u
            LEFT JOIN submissions s ON s.user_id = u.id
            GROUP BY u.id
            ORDER BY u.xp DESC, solved DESC, u.username
            LIMIT $2
            "#,
        )
        .bind(statuses::PASSED)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}
