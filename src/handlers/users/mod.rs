//! User handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, middleware, routing::get};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// User routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me/stats", get(handler::my_stats))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
        .route("/leaderboard", get(handler::leaderboard))
}
