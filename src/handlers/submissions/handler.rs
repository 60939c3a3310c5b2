//! Submission handler implementations

use axum::extract::{Path, State};
use validator::Validate;

use crate::{
    error::AppResult,
    extract::Json,
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::SubmitRequest,
    response::{SubmissionResponse, SubmissionsListResponse, SubmitResponse},
};

/// Submit code for grading against a problem's test cases
pub async fn submit(
    State(state): State<AppState>,
    OptionalAuth(auth_user): OptionalAuth,
    Json(payload): Json<SubmitRequest>,
) -> AppResult<Json<SubmitResponse>> {
    payload.validate()?;

    let outcome = SubmissionService::submit(
        state.db(),
        state.executor(),
        state.languages(),
        state.level_curve(),
        state.rewards(),
        auth_user.as_ref().map(|u| &u.id),
        &payload.slug,
        &payload.language,
        &payload.code,
    )
    .await?;

    Ok(Json(SubmitResponse {
        result: format!(
            "{}/{} testcases passed",
            outcome.passed_count, outcome.total_count
        ),
        passed: outcome.passed,
        passed_count: outcome.passed_count,
        total_count: outcome.total_count,
        awarded_xp: outcome.awarded_xp,
    }))
}

/// List the caller's submissions for one problem, newest first
pub async fn list_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(slug): Path<String>,
) -> AppResult<Json<SubmissionsListResponse>> {
    let submissions = SubmissionService::history(state.db(), &auth_user.id, &slug).await?;
    let submissions: Vec<SubmissionResponse> = submissions.into_iter().map(Into::into).collect();
    let total = submissions.len();

    Ok(Json(SubmissionsListResponse { submissions, total }))
}
