//! Ad-hoc code execution handler

use axum::{Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::MAX_SOURCE_CODE_SIZE,
    error::AppResult,
    extract::Json,
    middleware::auth::OptionalAuth,
    services::ExecutionService,
    state::AppState,
};

/// Execute code request
#[derive(Debug, Deserialize, Validate)]
pub struct ExecuteRequest {
    pub language: String,

    #[validate(length(min = 1, max = MAX_SOURCE_CODE_SIZE))]
    pub code: String,

    /// Standard input for the run; a per-language default is used when blank
    pub stdin: Option<String>,

    /// When set to an existing problem, the run is recorded under it
    pub slug: Option<String>,
}

/// Execute code response
#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    pub output: String,
}

/// Execute routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/execute", post(execute_code))
}

/// Run code once against user-supplied stdin, without grading
pub async fn execute_code(
    State(state): State<AppState>,
    OptionalAuth(auth_user): OptionalAuth,
    Json(payload): Json<ExecuteRequest>,
) -> AppResult<Json<ExecuteResponse>> {
    payload.validate()?;

    let output = ExecutionService::run(
        state.db(),
        state.executor(),
        state.languages(),
        auth_user.as_ref().map(|u| &u.id),
        &payload.language,
        &payload.code,
        payload.stdin.as_deref(),
        payload.slug.as_deref(),
    )
    .await?;

    Ok(Json(ExecuteResponse { output }))
}
