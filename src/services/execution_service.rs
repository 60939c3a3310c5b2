//! Ad-hoc code execution service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, SubmissionRepository},
    error::{AppError, AppResult},
    judge::{CodeExecutor, Language, LanguageRegistry},
};

/// Runs code once against user-supplied stdin, without grading
pub struct ExecutionService;

impl ExecutionService {
    /// Execute code and return its raw output.
    ///
    /// When `slug` names an existing problem the run is recorded as a
    /// submission under it; otherwise nothing is persisted.
    pub async fn run(
        pool: &PgPool,
        executor: &dyn CodeExecutor,
        languages: &LanguageRegistry,
        user_id: Option<&Uuid>,
        language: &str,
        code: &str,
        stdin: Option<&str>,
        slug: Option<&str>,
    ) -> AppResult<String> {
        let language = Language::parse(language)
            .ok_or_else(|| AppError::Validation(format!("Unsupported language: {}", language)))?;

        let spec = languages
            .spec(language)
            .ok_or_else(|| AppError::Validation(format!("Unsupported language: {}", language)))?;

        let stdin = match stdin {
            Some(s) if !s.trim().is_empty() => s,
            _ => spec.empty_stdin_fallback,
        };

        let result = executor
            .execute(spec.judge_language_id, code, stdin)
            .await?;

        if let Some(slug) = slug {
            if let Some(problem) = ProblemRepository::find_by_slug(pool, slug).await? {
                let stdout = result
                    .stdout
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .or_else(|| result.compile_output.as_deref().filter(|s| !s.is_empty()));
                let stderr = result.stderr.as_deref().filter(|s| !s.is_empty());

                SubmissionRepository::create(
                    pool,
                    user_id,
                    &problem.id,
                    language.as_str(),
                    code,
                    result.submission_status().as_str(),
                    stdout,
                    stderr,
                )
                .await?;
            }
        }

        Ok(result.output().to_string())
    }
}
