//! Submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Submission routes. Submitting works anonymously; history requires auth.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(handler::list_submissions))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
        .route("/", post(handler::submit))
}
