//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PROBLEM_DESCRIPTION_LENGTH, MAX_PROBLEM_TITLE_LENGTH, MAX_SLUG_LENGTH};

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_SLUG_LENGTH))]
    pub slug: String,

    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_PROBLEM_DESCRIPTION_LENGTH))]
    pub description: String,

    /// EASY, MEDIUM, or HARD
    pub difficulty: String,

    /// Tags for categorization
    pub tags: Option<Vec<String>>,

    /// Sample input/output pairs for display
    pub samples: Option<serde_json::Value>,
}

/// Update problem request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_PROBLEM_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub difficulty: Option<String>,
    pub tags: Option<Vec<String>>,
    pub samples: Option<serde_json::Value>,
}

/// List problems query parameters
#[derive(Debug, Deserialize)]
pub struct ListProblemsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub tag: Option<String>,
}

/// Create test case request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTestCaseRequest {
    pub input: String,

    #[validate(length(min = 1))]
    pub expected: String,

    /// Hidden test cases are used for grading but never shown to users
    pub is_hidden: Option<bool>,
}
