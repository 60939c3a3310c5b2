//! Problem catalog handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Problem routes. Mutating routes require authentication; the handlers
/// additionally check for the admin role.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_problem))
        .route("/{slug}", put(handler::update_problem))
        .route("/{slug}", delete(handler::delete_problem))
        .route("/{slug}/test-cases", post(handler::add_test_case))
        .route("/{slug}/test-cases/{tc_id}", delete(handler::delete_test_case))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
        .route("/", get(handler::list_problems))
        .route("/{slug}", get(handler::get_problem))
        .route("/{slug}/test-cases", get(handler::list_test_cases))
}
