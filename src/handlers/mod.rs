//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod execute;
pub mod health;
pub mod problems;
pub mod submissions;
pub mod users;

use axum::{Router, middleware};

use crate::{middleware::auth::optional_auth_middleware, state::AppState};

/// Create all API routes.
///
/// The optional-auth layer runs on every route so handlers taking
/// [`OptionalAuth`](crate::middleware::OptionalAuth) see the caller when a
/// valid token is present; routers requiring auth add their own layer.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(execute::routes())
        .nest("/auth", auth::routes(state.clone()))
        .nest("/users", users::routes(state.clone()))
        .nest("/problems", problems::routes(state.clone()))
        .nest("/submissions", submissions::routes(state.clone()))
        .layer(middleware::from_fn_with_state(state, optional_auth_middleware))
}
