//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_SLUG_LENGTH, MAX_SOURCE_CODE_SIZE};

/// Submit code for grading
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(length(min = 1, max = MAX_SLUG_LENGTH))]
    pub slug: String,

    pub language: String,

    #[validate(length(min = 1, max = MAX_SOURCE_CODE_SIZE))]
    pub code: String,
}
