//! Grading engine
//!
//! Runs a candidate solution against a problem's test cases, one case at a
//! time, and aggregates the pass count. Execution is strictly sequential:
//! each case waits for the external judge to answer before the next one is
//! sent. That keeps load on the execution service predictable and costs
//! nothing in correctness.

use crate::{
    error::{AppError, AppResult},
    models::TestCase,
};

use super::{client::CodeExecutor, language::Language, language::LanguageRegistry};

/// Aggregate result of grading one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeOutcome {
    pub passed_count: usize,
    pub total_count: usize,
}

impl GradeOutcome {
    /// True when every test case matched
    pub fn all_passed(&self) -> bool {
        self.passed_count == self.total_count
    }
}

/// Normalize program output for comparison: trim and collapse internal
/// whitespace runs to single spaces, so `"1   2\n"` equals `"1 2"` but
/// not `"1 2 3"`.
pub fn normalize_output(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Grading engine over an injected executor and language table
pub struct Grader<'a> {
    executor: &'a dyn CodeExecutor,
    languages: &'a LanguageRegistry,
}

impl<'a> Grader<'a> {
    pub fn new(executor: &'a dyn CodeExecutor, languages: &'a LanguageRegistry) -> Self {
        Self { executor, languages }
    }

    /// Grade `code` against `test_cases` in their given order.
    ///
    /// A case whose run produces non-matching output (including runtime and
    /// compile failures reported by the judge) simply does not count as
    /// passed. An executor call that fails outright aborts the whole run
    /// with `ExecutionUnavailable` — no per-case retries.
    pub async fn grade(
        &self,
        test_cases: &[TestCase],
        language: Language,
        code: &str,
    ) -> AppResult<GradeOutcome> {
        if test_cases.is_empty() {
            return Err(AppError::NoTestCases(
                "no test cases to grade".to_string(),
            ));
        }

        let spec = self.languages.spec(language).ok_or_else(|| {
            AppError::Validation(format!("Unsupported language: {}", language))
        })?;

        let mut passed_count = 0;

        for (index, case) in test_cases.iter().enumerate() {
            // An empty stdin makes interactive readers hang on some runtimes;
            // substitute the language's fallback value.
            let input = if case.input.trim().is_empty() {
                spec.empty_stdin_fallback
            } else {
                case.input.as_str()
            };

            let result = self
                .executor
                .execute(spec.judge_language_id, code, input)
                .await?;

            if normalize_output(result.output()) == normalize_output(&case.expected) {
                passed_count += 1;
            } else {
                tracing::debug!(
                    test_case = index,
                    status_id = result.status_id,
                    "test case did not match"
                );
            }
        }

        Ok(GradeOutcome {
            passed_count,
            total_count: test_cases.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::judge::client::{ExecutionResult, MockCodeExecutor};

    use super::*;

    fn case(input: &str, expected: &str) -> TestCase {
        TestCase {
            id: Uuid::new_v4(),
            problem_id: Uuid::new_v4(),
            input: input.to_string(),
            expected: expected.to_string(),
            is_hidden: false,
            created_at: Utc::now(),
        }
    }

    fn accepted(stdout: &str) -> ExecutionResult {
        ExecutionResult {
            stdout: Some(stdout.to_string()),
            status_id: 3,
            ..Default::default()
        }
    }

    /// Executor that echoes stdin back as stdout
    fn echo_executor() -> MockCodeExecutor {
        let mut executor = MockCodeExecutor::new();
        executor
            .expect_execute()
            .returning(|_, _, stdin| Ok(accepted(stdin)));
        executor
    }

    #[test]
    fn test_normalize_output() {
        assert_eq!(normalize_output("1   2\n"), "1 2");
        assert_eq!(normalize_output("  hello \t world  "), "hello world");
        assert_eq!(normalize_output(""), "");
        assert_ne!(normalize_output("1  2 3"), "1 2");
    }

    #[tokio::test]
    async fn test_empty_test_cases_is_an_error() {
        let executor = MockCodeExecutor::new();
        let languages = LanguageRegistry::standard();
        let grader = Grader::new(&executor, &languages);

        let err = grader.grade(&[], Language::Python, "print(1)").await.unwrap_err();
        assert!(matches!(err, AppError::NoTestCases(_)));
    }

    #[tokio::test]
    async fn test_counts_partial_passes() {
        let executor = echo_executor();
        let languages = LanguageRegistry::standard();
        let grader = Grader::new(&executor, &languages);

        // Three cases echo cleanly, the fourth expects something else.
        let cases = vec![
            case("1", "1"),
            case("2", "2"),
            case("3", "3"),
            case("4", "999"),
        ];

        let outcome = grader.grade(&cases, Language::Python, "code").await.unwrap();
        assert_eq!(outcome.passed_count, 3);
        assert_eq!(outcome.total_count, 4);
        assert!(!outcome.all_passed());
    }

    #[tokio::test]
    async fn test_all_passed() {
        let executor = echo_executor();
        let languages = LanguageRegistry::standard();
        let grader = Grader::new(&executor, &languages);

        let cases = vec![case("a b", "a b"), case("x", "x")];

        let outcome = grader.grade(&cases, Language::Cpp, "code").await.unwrap();
        assert_eq!(outcome.passed_count, 2);
        assert!(outcome.all_passed());
    }

    #[tokio::test]
    async fn test_comparison_collapses_whitespace() {
        let mut executor = MockCodeExecutor::new();
        executor
            .expect_execute()
            .returning(|_, _, _| Ok(accepted("1   2\n")));
        let languages = LanguageRegistry::standard();
        let grader = Grader::new(&executor, &languages);

        let matching = grader
            .grade(&[case("in", "1 2")], Language::Java, "code")
            .await
            .unwrap();
        assert!(matching.all_passed());

        let mismatched = grader
            .grade(&[case("in", "1  2 3")], Language::Java, "code")
            .await
            .unwrap();
        assert_eq!(mismatched.passed_count, 0);
    }

    #[tokio::test]
    async fn test_blank_input_gets_substituted() {
        let mut executor = MockCodeExecutor::new();
        executor
            .expect_execute()
            .withf(|_, _, stdin| stdin == "0")
            .returning(|_, _, _| Ok(accepted("ok")));
        let languages = LanguageRegistry::standard();
        let grader = Grader::new(&executor, &languages);

        let outcome = grader
            .grade(&[case("  \n ", "ok")], Language::Java, "code")
            .await
            .unwrap();
        assert!(outcome.all_passed());
    }

    #[tokio::test]
    async fn test_executor_failure_aborts_grading() {
        let mut executor = MockCodeExecutor::new();
        executor.expect_execute().returning(|_, _, _| {
            Err(AppError::ExecutionUnavailable("connection refused".to_string()))
        });
        let languages = LanguageRegistry::standard();
        let grader = Grader::new(&executor, &languages);

        let err = grader
            .grade(&[case("1", "1"), case("2", "2")], Language::C, "code")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExecutionUnavailable(_)));
    }

    #[tokio::test]
    async fn test_judge_reported_failure_counts_as_mismatch() {
        // Runtime error: stderr carries the only output, which won't match.
        let mut executor = MockCodeExecutor::new();
        executor.expect_execute().returning(|_, _, _| {
            Ok(ExecutionResult {
                stderr: Some("Traceback (most recent call last)".to_string()),
                status_id: 11,
                ..Default::default()
            })
        });
        let languages = LanguageRegistry::standard();
        let grader = Grader::new(&executor, &languages);

        let outcome = grader
            .grade(&[case("1", "1")], Language::Python, "code")
            .await
            .unwrap();
        assert_eq!(outcome.passed_count, 0);
        assert!(!outcome.all_passed());
    }
}
