//! Submission grading service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, SubmissionRepository},
    error::{AppError, AppResult},
    judge::{CodeExecutor, GradeOutcome, Grader, Language, LanguageRegistry},
    models::{Submission, SubmissionStatus},
    progression::{LevelCurve, Progression, RewardTable},
};

/// Result of grading one submission
#[derive(Debug)]
pub struct SubmitOutcome {
    pub passed_count: usize,
    pub total_count: usize,
    pub passed: bool,
    pub awarded_xp: i32,
}

/// What a graded run writes: the stored status, and the XP award when this
/// is the user's first full pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RecordPlan {
    status: SubmissionStatus,
    award: Option<XpAward>,
}

/// An XP grant and the progression it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct XpAward {
    gained: i32,
    xp: i32,
    level: i32,
}

/// Decide the stored status and the XP award for one graded run.
///
/// `progression` is the locked user row, absent for anonymous runs or
/// unknown users. An award happens only on a full pass that is the user's
/// first for the problem; everything else records plain status.
fn plan_record(
    outcome: &GradeOutcome,
    progression: Option<Progression>,
    already_passed: bool,
    difficulty: &str,
    curve: &LevelCurve,
    rewards: &RewardTable,
) -> RecordPlan {
    let status = if outcome.all_passed() {
        SubmissionStatus::Passed
    } else {
        SubmissionStatus::Failed
    };

    let award = match progression {
        Some(p) if outcome.all_passed() && !already_passed => {
            let gained = rewards.reward_for(difficulty);
            let next = curve.add_xp(p.xp, p.level, gained);
            Some(XpAward {
                gained,
                xp: next.xp,
                level: next.level,
            })
        }
        _ => None,
    };

    RecordPlan { status, award }
}

/// Submission grading service
pub struct SubmissionService;

impl SubmissionService {
    /// Grade a submission against all of a problem's test cases and record it.
    ///
    /// On a user's first fully passed submission for a problem, XP is awarded
    /// and the level recomputed. The award and the submission row are written
    /// in one transaction with the user row locked, so two concurrent passes
    /// cannot both award.
    pub async fn submit(
        pool: &PgPool,
        executor: &dyn CodeExecutor,
        languages: &LanguageRegistry,
        curve: &LevelCurve,
        rewards: &RewardTable,
        user_id: Option<&Uuid>,
        slug: &str,
        language: &str,
        code: &str,
    ) -> AppResult<SubmitOutcome> {
        let language = Language::parse(language)
            .ok_or_else(|| AppError::Validation(format!("Unsupported language: {}", language)))?;

        let problem = ProblemRepository::find_by_slug(pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem not found: {}", slug)))?;

        let test_cases = ProblemRepository::get_test_cases(pool, &problem.id).await?;
        if test_cases.is_empty() {
            return Err(AppError::NoTestCases(format!(
                "No test cases found for problem: {}",
                slug
            )));
        }

        let grader = Grader::new(executor, languages);
        let outcome = grader.grade(&test_cases, language, code).await?;

        let awarded_xp = Self::record(
            pool,
            curve,
            rewards,
            user_id,
            &problem.id,
            &problem.difficulty,
            language,
            code,
            &outcome,
        )
        .await?;

        tracing::info!(
            slug = %slug,
            language = %language,
            passed = outcome.all_passed(),
            passed_count = outcome.passed_count,
            total_count = outcome.total_count,
            "submission graded"
        );

        Ok(SubmitOutcome {
            passed_count: outcome.passed_count,
            total_count: outcome.total_count,
            passed: outcome.all_passed(),
            awarded_xp,
        })
    }

    /// List a user's submissions for one problem, newest first
    pub async fn history(
        pool: &PgPool,
        user_id: &Uuid,
        slug: &str,
    ) -> AppResult<Vec<Submission>> {
        let problem = ProblemRepository::find_by_slug(pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem not found: {}", slug)))?;

        SubmissionRepository::list_for_user_and_problem(pool, user_id, &problem.id).await
    }

    /// Persist the submission and, when it is the first full pass, award XP.
    /// Returns the XP granted (0 when nothing was awarded).
    async fn record(
        pool: &PgPool,
        curve: &LevelCurve,
        rewards: &RewardTable,
        user_id: Option<&Uuid>,
        problem_id: &Uuid,
        difficulty: &str,
        language: Language,
        code: &str,
        outcome: &GradeOutcome,
    ) -> AppResult<i32> {
        let stdout = format!("{}/{} passed", outcome.passed_count, outcome.total_count);

        let mut tx = pool.begin().await?;

        let mut progression = None;
        let mut already_passed = false;
        if outcome.all_passed() {
            if let Some(user_id) = user_id {
                // Lock the user row so concurrent passes for the same user serialize
                progression = sqlx::query_as::<_, (i32, i32)>(
                    r#"SELECT xp, level FROM users WHERE id = $1 FOR UPDATE"#,
                )
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?
                .map(|(xp, level)| Progression { xp, level });

                already_passed =
                    SubmissionRepository::has_passed(&mut *tx, user_id, problem_id).await?;
            }
        }

        let plan = plan_record(outcome, progression, already_passed, difficulty, curve, rewards);

        if let Some(award) = plan.award {
            sqlx::query(
                r#"UPDATE users SET xp = $2, level = $3, updated_at = NOW() WHERE id = $1"#,
            )
            .bind(user_id)
            .bind(award.xp)
            .bind(award.level)
            .execute(&mut *tx)
            .await?;

            tracing::info!(
                problem_id = %problem_id,
                xp = award.xp,
                level = award.level,
                "first acceptance, XP awarded"
            );
        }

        sqlx::query(
            r#"
            INSERT INTO submissions (user_id, problem_id, language, code, status, stdout)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(language.as_str())
        .bind(code)
        .bind(plan.status.as_str())
        .bind(&stdout)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(plan.award.map(|a| a.gained).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(passed_count: usize, total_count: usize) -> GradeOutcome {
        GradeOutcome { passed_count, total_count }
    }

    fn fresh_user() -> Option<Progression> {
        Some(Progression { xp: 0, level: 1 })
    }

    #[test]
    fn test_first_full_pass_awards_difficulty_reward() {
        let plan = plan_record(
            &outcome(3, 3),
            fresh_user(),
            false,
            "EASY",
            &LevelCurve::default(),
            &RewardTable::default(),
        );

        assert_eq!(plan.status, SubmissionStatus::Passed);
        assert_eq!(plan.award, Some(XpAward { gained: 10, xp: 10, level: 1 }));
    }

    #[test]
    fn test_second_full_pass_grants_nothing() {
        let plan = plan_record(
            &outcome(3, 3),
            fresh_user(),
            true,
            "EASY",
            &LevelCurve::default(),
            &RewardTable::default(),
        );

        assert_eq!(plan.status, SubmissionStatus::Passed);
        assert_eq!(plan.award, None);
    }

    #[test]
    fn test_partial_pass_records_failed_without_award() {
        let plan = plan_record(
            &outcome(3, 4),
            fresh_user(),
            false,
            "HARD",
            &LevelCurve::default(),
            &RewardTable::default(),
        );

        assert_eq!(plan.status, SubmissionStatus::Failed);
        assert_eq!(plan.award, None);
    }

    #[test]
    fn test_anonymous_pass_records_status_only() {
        let plan = plan_record(
            &outcome(2, 2),
            None,
            false,
            "MEDIUM",
            &LevelCurve::default(),
            &RewardTable::default(),
        );

        assert_eq!(plan.status, SubmissionStatus::Passed);
        assert_eq!(plan.award, None);
    }

    #[test]
    fn test_award_crosses_level_threshold() {
        let plan = plan_record(
            &outcome(1, 1),
            Some(Progression { xp: 95, level: 1 }),
            false,
            "EASY",
            &LevelCurve::default(),
            &RewardTable::default(),
        );

        assert_eq!(plan.award, Some(XpAward { gained: 10, xp: 105, level: 2 }));
    }

    #[test]
    fn test_hard_problem_pays_hard_reward() {
        let plan = plan_record(
            &outcome(5, 5),
            fresh_user(),
            false,
            "HARD",
            &LevelCurve::default(),
            &RewardTable::default(),
        );

        assert_eq!(plan.award, Some(XpAward { gained: 40, xp: 40, level: 1 }));
    }
}
