//! Problem catalog service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::ProblemRepository,
    error::{AppError, AppResult},
    models::{Difficulty, Problem, TestCase},
    utils::validation::validate_slug,
};

/// Problem catalog service
pub struct ProblemService;

impl ProblemService {
    /// List problems with pagination and optional filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        difficulty: Option<&str>,
        tag: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        if let Some(d) = difficulty {
            Difficulty::parse(d)
                .ok_or_else(|| AppError::Validation(format!("Unknown difficulty: {}", d)))?;
        }

        ProblemRepository::list(pool, offset, limit, search, difficulty, tag).await
    }

    /// Get a problem by slug
    pub async fn get_by_slug(pool: &PgPool, slug: &str) -> AppResult<Problem> {
        ProblemRepository::find_by_slug(pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem not found: {}", slug)))
    }

    /// Get a problem together with its sample (visible) test cases
    pub async fn get_with_samples(pool: &PgPool, slug: &str) -> AppResult<(Problem, Vec<TestCase>)> {
        let problem = Self::get_by_slug(pool, slug).await?;
        let samples = ProblemRepository::get_sample_test_cases(pool, &problem.id).await?;

        Ok((problem, samples))
    }

    /// Create a new problem (admin)
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        title: &str,
        description: &str,
        difficulty: &str,
        tags: &[String],
        samples: Option<serde_json::Value>,
    ) -> AppResult<Problem> {
        validate_slug(slug)?;

        let difficulty = Difficulty::parse(difficulty)
            .ok_or_else(|| AppError::Validation(format!("Unknown difficulty: {}", difficulty)))?;

        ProblemRepository::create(pool, slug, title, description, difficulty.as_str(), tags, samples)
            .await
    }

    /// Update an existing problem (admin)
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        title: Option<&str>,
        description: Option<&str>,
        difficulty: Option<&str>,
        tags: Option<&[String]>,
        samples: Option<serde_json::Value>,
    ) -> AppResult<Problem> {
        // Confirm the problem exists so a bad slug is a 404, not a silent no-op
        Self::get_by_slug(pool, slug).await?;

        let difficulty = match difficulty {
            Some(d) => Some(
                Difficulty::parse(d)
                    .ok_or_else(|| AppError::Validation(format!("Unknown difficulty: {}", d)))?,
            ),
            None => None,
        };

        ProblemRepository::update(
            pool,
            slug,
            title,
            description,
            difficulty.map(|d| d.as_str()),
            tags,
            samples,
        )
        .await
    }

    /// Delete a problem and its test cases (admin)
    pub async fn delete(pool: &PgPool, slug: &str) -> AppResult<()> {
        Self::get_by_slug(pool, slug).await?;
        ProblemRepository::delete(pool, slug).await
    }

    /// List test cases for a problem. Hidden cases are included only for admins.
    pub async fn list_test_cases(
        pool: &PgPool,
        slug: &str,
        include_hidden: bool,
    ) -> AppResult<Vec<TestCase>> {
        let problem = Self::get_by_slug(pool, slug).await?;

        if include_hidden {
            ProblemRepository::get_test_cases(pool, &problem.id).await
        } else {
            ProblemRepository::get_sample_test_cases(pool, &problem.id).await
        }
    }

    /// Add a test case to a problem (admin)
    pub async fn add_test_case(
        pool: &PgPool,
        slug: &str,
        input: &str,
        expected: &str,
        is_hidden: bool,
    ) -> AppResult<TestCase> {
        let problem = Self::get_by_slug(pool, slug).await?;
        ProblemRepository::create_test_case(pool, &problem.id, input, expected, is_hidden).await
    }

    /// Remove a test case from a problem (admin)
    pub async fn delete_test_case(pool: &PgPool, slug: &str, test_case_id: &Uuid) -> AppResult<()> {
        let problem = Self::get_by_slug(pool, slug).await?;
        ProblemRepository::delete_test_case(pool, &problem.id, test_case_id).await
    }
}
