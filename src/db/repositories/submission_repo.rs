//! Submission repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use serde::Serialize;

use crate::{constants::statuses, error::AppResult, models::Submission};

/// One row of a user's recent activity, joined with its problem
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct RecentSubmission {
    pub id: Uuid,
    pub problem_slug: String,
    pub problem_title: String,
    pub language: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Record a submission. `user_id` is nullable: anonymous runs are kept too.
    pub async fn create(
        pool: &PgPool,
        user_id: Option<&Uuid>,
        problem_id: &Uuid,
        language: &str,
        code: &str,
        status: &str,
        stdout: Option<&str>,
        stderr: Option<&str>,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (user_id, problem_id, language, code, status, stdout, stderr)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(language)
        .bind(code)
        .bind(status)
        .bind(stdout)
        .bind(stderr)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Check whether a user already has a passed submission for a problem.
    /// Generic over the executor so it runs inside the award transaction.
    pub async fn has_passed<'e, E>(
        executor: E,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<bool>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM submissions
                WHERE user_id = $1 AND problem_id = $2 AND status = $3
            )
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(statuses::PASSED)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    /// List a user's submissions for one problem, newest first
    pub async fn list_for_user_and_problem(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE user_id = $1 AND problem_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// All submission timestamps for a user, for streak computation
    pub async fn submission_dates(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<DateTime<Utc>>> {
        let dates: Vec<DateTime<Utc>> = sqlx::query_scalar(
            r#"SELECT created_at FROM submissions WHERE user_id = $1 ORDER BY created_at"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(dates)
    }

    /// A user's most recent submissions across all problems
    pub async fn recent_for_user(
        pool: &PgPool,
        user_id: &Uuid,
        limit: i64,
    ) -> AppResult<Vec<RecentSubmission>> {
        let recent = sqlx::query_as::<_, RecentSubmission>(
            r#"
            SELECT s.id, p.slug AS problem_slug, p.title AS problem_title,
                   s.language, s.status, s.created_at
            FROM submissions s
            JOIN problems p ON p.id = s.problem_id
            WHERE s.user_id = $1
            ORDER BY s.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(recent)
    }

    /// Count distinct problems a user has passed
    pub async fn count_solved(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT problem_id) FROM submissions
            WHERE user_id = $1 AND status = $2
            "#,
        )
        .bind(user_id)
        .bind(statuses::PASSED)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
