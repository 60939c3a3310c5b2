//! Problem response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Problem, TestCase};

/// Problem response
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub samples: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Problem> for ProblemResponse {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id,
            slug: problem.slug,
            title: problem.title,
            description: problem.description,
            difficulty: problem.difficulty,
            tags: problem.tags,
            samples: problem.samples,
            created_at: problem.created_at,
            updated_at: problem.updated_at,
        }
    }
}

/// Problem with its visible sample test cases
#[derive(Debug, Serialize)]
pub struct ProblemDetailResponse {
    #[serde(flatten)]
    pub problem: ProblemResponse,
    pub sample_test_cases: Vec<TestCaseResponse>,
}

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Test case response
#[derive(Debug, Serialize)]
pub struct TestCaseResponse {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub input: String,
    pub expected: String,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TestCase> for TestCaseResponse {
    fn from(tc: TestCase) -> Self {
        Self {
            id: tc.id,
            problem_id: tc.problem_id,
            input: tc.input,
            expected: tc.expected,
            is_hidden: tc.is_hidden,
            created_at: tc.created_at,
        }
    }
}

/// Test cases list response
#[derive(Debug, Serialize)]
pub struct TestCasesListResponse {
    pub test_cases: Vec<TestCaseResponse>,
    pub total: usize,
}
