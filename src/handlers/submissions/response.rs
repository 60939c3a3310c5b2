//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Submission;

/// Grading result for one submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Human-readable summary, e.g. "3/4 testcases passed"
    pub result: String,
    pub passed: bool,
    pub passed_count: usize,
    pub total_count: usize,
    /// XP granted by this submission (non-zero only on first acceptance)
    pub awarded_xp: i32,
}

/// One recorded submission
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub language: String,
    pub status: String,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            language: s.language,
            status: s.status,
            stdout: s.stdout,
            stderr: s.stderr,
            created_at: s.created_at,
        }
    }
}

/// Submission history response
#[derive(Debug, Serialize)]
pub struct SubmissionsListResponse {
    pub submissions: Vec<SubmissionResponse>,
    pub total: usize,
}
