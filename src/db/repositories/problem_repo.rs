//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Problem, TestCase},
};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        title: &str,
        description: &str,
        difficulty: &str,
        tags: &[String],
        samples: Option<serde_json::Value>,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (slug, title, description, difficulty, tags, samples)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(slug)
        .bind(title)
        .bind(description)
        .bind(difficulty)
        .bind(tags)
        .bind(samples)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by slug
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE slug = $1"#)
            .bind(slug)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Update problem
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        title: Option<&str>,
        description: Option<&str>,
        difficulty: Option<&str>,
        tags: Option<&[String]>,
        samples: Option<serde_json::Value>,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                difficulty = COALESCE($4, difficulty),
                tags = COALESCE($5, tags),
                samples = COALESCE($6, samples),
                updated_at = NOW()
            WHERE slug = $1
            RETURNING *
            "#,
        )
        .bind(slug)
        .bind(title)
        .bind(description)
        .bind(difficulty)
        .bind(tags)
        .bind(samples)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Delete problem
    pub async fn delete(pool: &PgPool, slug: &str) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM problems WHERE slug = $1"#)
            .bind(slug)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List problems with pagination and filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        difficulty: Option<&str>,
        tag: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE
                ($1::text IS NULL OR title ILIKE $1)
                AND ($2::text IS NULL OR difficulty = $2)
                AND ($3::text IS NULL OR $3 = ANY(tags))
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(&search_pattern)
        .bind(difficulty)
        .bind(tag)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM problems
            WHERE
                ($1::text IS NULL OR title ILIKE $1)
                AND ($2::text IS NULL OR difficulty = $2)
                AND ($3::text IS NULL OR $3 = ANY(tags))
            "#,
        )
        .bind(&search_pattern)
        .bind(difficulty)
        .bind(tag)
        .fetch_one(pool)
        .await?;

        Ok((problems, count))
    }

    /// Count total problems
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM problems"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Create test case
    pub async fn create_test_case(
        pool: &PgPool,
        problem_id: &Uuid,
        input: &str,
        expected: &str,
        is_hidden: bool,
    ) -> AppResult<TestCase> {
        let test_case = sqlx::query_as::<_, TestCase>(
            r#"
            INSERT INTO test_cases (problem_id, input, expected, is_hidden)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(input)
        .bind(expected)
        .bind(is_hidden)
        .fetch_one(pool)
        .await?;

        Ok(test_case)
    }

    /// Get all test cases for a problem, in authoring order
    pub async fn get_test_cases(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT * FROM test_cases WHERE problem_id = $1 ORDER BY created_at"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }

    /// Get only the sample (non-hidden) test cases for a problem
    pub async fn get_sample_test_cases(
        pool: &PgPool,
        problem_id: &Uuid,
    ) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"
            SELECT * FROM test_cases
            WHERE problem_id = $1 AND is_hidden = false
            ORDER BY created_at
            "#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }

    /// Delete test case
    pub async fn delete_test_case(pool: &PgPool, problem_id: &Uuid, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM test_cases WHERE id = $1 AND problem_id = $2"#)
            .bind(id)
            .bind(problem_id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
