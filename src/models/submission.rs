//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::statuses;

/// Submission database model
///
/// `user_id` is nullable: anonymous visitors can run and grade code, the
/// record is kept either way. Only the XP award requires a logged-in user.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub problem_id: Uuid,
    pub language: String,
    #[serde(skip_serializing)]
    pub code: String,
    pub status: String,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Submission status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Passed,
    Failed,
    CompileError,
}

impl SubmissionStatus {
    /// Get status as its stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => statuses::PASSED,
            Self::Failed => statuses::FAILED,
            Self::CompileError => statuses::COMPILE_ERROR,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
