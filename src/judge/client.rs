//! Judge0 CE execution client

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::JudgeConfig,
    constants::{JUDGE0_STATUS_ACCEPTED, JUDGE0_STATUS_COMPILE_ERROR},
    error::AppResult,
    models::SubmissionStatus,
};

/// Result of executing code against one stdin
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub status_id: i32,
}

impl ExecutionResult {
    /// The output a participant sees: stdout, else the compiler's complaint,
    /// else stderr
    pub fn output(&self) -> &str {
        [&self.stdout, &self.compile_output, &self.stderr]
            .into_iter()
            .flatten()
            .map(|s| s.as_str())
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }

    /// Status id 3 is Judge0's "Accepted"
    pub fn is_accepted(&self) -> bool {
        self.status_id == JUDGE0_STATUS_ACCEPTED
    }

    /// Map the Judge0 status id onto a submission status.
    /// 3 = accepted, 6 = compile error, anything else = failed.
    pub fn submission_status(&self) -> SubmissionStatus {
        match self.status_id {
            JUDGE0_STATUS_ACCEPTED => SubmissionStatus::Passed,
            JUDGE0_STATUS_COMPILE_ERROR => SubmissionStatus::CompileError,
            _ => SubmissionStatus::Failed,
        }
    }
}

/// Seam between the grader and the external execution service.
///
/// A transport-level failure is an `Err` and aborts the caller's whole
/// grading run; a run that merely produced the wrong output or crashed
/// inside the sandbox is an `Ok` carrying the Judge0 status.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    async fn execute(
        &self,
        language_id: i32,
        source_code: &str,
        stdin: &str,
    ) -> AppResult<ExecutionResult>;
}

/// Judge0 submission request body
#[derive(Debug, Serialize)]
struct Judge0Request<'a> {
    language_id: i32,
    source_code: &'a str,
    stdin: &'a str,
}

/// Judge0 submission response body
#[derive(Debug, Deserialize)]
struct Judge0Response {
    stdout: Option<String>,
    stderr: Option<String>,
    compile_output: Option<String>,
    status: Option<Judge0Status>,
}

#[derive(Debug, Deserialize)]
struct Judge0Status {
    id: i32,
}

/// HTTP client for the Judge0 CE API
#[derive(Debug, Clone)]
pub struct Judge0Client {
    http: reqwest::Client,
    api_url: String,
}

impl Judge0Client {
    /// Create a client from configuration. A configured timeout bounds each
    /// call; without one the call blocks until Judge0 answers.
    pub fn new(config: &JudgeConfig) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            http: builder.build()?,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CodeExecutor for Judge0Client {
    async fn execute(
        &self,
        language_id: i32,
        source_code: &str,
        stdin: &str,
    ) -> AppResult<ExecutionResult> {
        let url = format!("{}/submissions?base64_encoded=false&wait=true", self.api_url);

        let response = self
            .http
            .post(&url)
            .json(&Judge0Request {
                language_id,
                source_code,
                stdin,
            })
            .send()
            .await?
            .error_for_status()?;

        let body: Judge0Response = response.json().await?;

        Ok(ExecutionResult {
            stdout: body.stdout,
            stderr: body.stderr,
            compile_output: body.compile_output,
            status_id: body.status.map(|s| s.id).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_prefers_stdout() {
        let result = ExecutionResult {
            stdout: Some("42\n".to_string()),
            stderr: Some("warning".to_string()),
            compile_output: None,
            status_id: 3,
        };
        assert_eq!(result.output(), "42\n");
    }

    #[test]
    fn test_output_falls_back_past_empty_strings() {
        let result = ExecutionResult {
            stdout: Some(String::new()),
            stderr: Some("segfault".to_string()),
            compile_output: None,
            status_id: 11,
        };
        assert_eq!(result.output(), "segfault");
    }

    #[test]
    fn test_status_mapping() {
        let accepted = ExecutionResult { status_id: 3, ..Default::default() };
        let compile_error = ExecutionResult { status_id: 6, ..Default::default() };
        let wrong_answer = ExecutionResult { status_id: 4, ..Default::default() };

        assert_eq!(accepted.submission_status(), SubmissionStatus::Passed);
        assert_eq!(compile_error.submission_status(), SubmissionStatus::CompileError);
        assert_eq!(wrong_answer.submission_status(), SubmissionStatus::Failed);
        assert!(accepted.is_accepted());
        assert!(!wrong_answer.is_accepted());
    }
}
