//! CodeDrill - Coding Practice Platform Backend
//!
//! This library provides the core functionality for the CodeDrill platform:
//! a problem catalog, an execution-service-backed grading engine, and the
//! XP/level/streak progression built on top of it.
//!
//! # Features
//!
//! - Multi-language grading via Judge0 CE (Python, C++, Java, C)
//! - XP rewards on first acceptance, with derived levels
//! - Daily submission streaks
//! - Leaderboard and per-user dashboard statistics
//! - Role-based problem and test case administration
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod progression;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
