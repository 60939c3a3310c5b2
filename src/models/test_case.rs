//! Test case model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Test case database model
///
/// Test cases are authored once per problem and never change shape afterwards;
/// hidden cases are graded but never shown to participants.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub input: String,
    pub expected: String,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
}
