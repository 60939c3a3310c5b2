//! HTTP middleware

pub mod auth;

pub use auth::{AuthenticatedUser, OptionalAuth, auth_middleware, optional_auth_middleware};
