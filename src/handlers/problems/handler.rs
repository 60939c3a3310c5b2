//! Problem handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, roles},
    error::{AppError, AppResult},
    extract::Json,
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::ProblemService,
    state::AppState,
};

use super::{
    request::{CreateProblemRequest, CreateTestCaseRequest, ListProblemsQuery, UpdateProblemRequest},
    response::{
        ProblemDetailResponse, ProblemResponse, ProblemsListResponse, TestCaseResponse,
        TestCasesListResponse,
    },
};

fn require_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.role != roles::ADMIN {
        return Err(AppError::Forbidden(
            "Only admins can manage problems".to_string(),
        ));
    }
    Ok(())
}

/// List all problems (paginated)
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
    let offset = i64::from(page - 1) * i64::from(per_page);

    let (problems, total) = ProblemService::list(
        state.db(),
        offset,
        i64::from(per_page),
        query.search.as_deref(),
        query.difficulty.as_deref(),
        query.tag.as_deref(),
    )
    .await?;

    Ok(Json(ProblemsListResponse {
        problems: problems.into_iter().map(Into::into).collect(),
        total,
        page,
        per_page,
    }))
}

/// Get a specific problem with its sample test cases
pub async fn get_problem(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ProblemDetailResponse>> {
    let (problem, samples) = ProblemService::get_with_samples(state.db(), &slug).await?;

    Ok(Json(ProblemDetailResponse {
        problem: problem.into(),
        sample_test_cases: samples.into_iter().map(Into::into).collect(),
    }))
}

/// Create a new problem (admin)
pub async fn create_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemResponse>)> {
    payload.validate()?;
    require_admin(&auth_user)?;

    let problem = ProblemService::create(
        state.db(),
        &payload.slug,
        &payload.title,
        &payload.description,
        &payload.difficulty,
        payload.tags.as_deref().unwrap_or(&[]),
        payload.samples,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(problem.into())))
}

/// Update a problem (admin)
pub async fn update_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateProblemRequest>,
) -> AppResult<Json<ProblemResponse>> {
    payload.validate()?;
    require_admin(&auth_user)?;

    let problem = ProblemService::update(
        state.db(),
        &slug,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.difficulty.as_deref(),
        payload.tags.as_deref(),
        payload.samples,
    )
    .await?;

    Ok(Json(problem.into()))
}

/// Delete a problem (admin)
pub async fn delete_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    ProblemService::delete(state.db(), &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List test cases for a problem. Hidden cases are visible only to admins.
pub async fn list_test_cases(
    State(state): State<AppState>,
    OptionalAuth(auth_user): OptionalAuth,
    Path(slug): Path<String>,
) -> AppResult<Json<TestCasesListResponse>> {
    let include_hidden = auth_user
        .as_ref()
        .map(|u| u.role == roles::ADMIN)
        .unwrap_or(false);

    let test_cases = ProblemService::list_test_cases(state.db(), &slug, include_hidden).await?;
    let test_cases: Vec<TestCaseResponse> = test_cases.into_iter().map(Into::into).collect();
    let total = test_cases.len();

    Ok(Json(TestCasesListResponse { test_cases, total }))
}

/// Add a test case to a problem (admin)
pub async fn add_test_case(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(slug): Path<String>,
    Json(payload): Json<CreateTestCaseRequest>,
) -> AppResult<(StatusCode, Json<TestCaseResponse>)> {
    payload.validate()?;
    require_admin(&auth_user)?;

    let test_case = ProblemService::add_test_case(
        state.db(),
        &slug,
        &payload.input,
        &payload.expected,
        payload.is_hidden.unwrap_or(true),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(test_case.into())))
}

/// Delete a test case (admin)
pub async fn delete_test_case(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((slug, tc_id)): Path<(String, Uuid)>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    ProblemService::delete_test_case(state.db(), &slug, &tc_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
