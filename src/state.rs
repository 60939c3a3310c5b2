//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config,
    judge::{CodeExecutor, Judge0Client, LanguageRegistry},
    progression::{LevelCurve, RewardTable},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Judge0 CE execution client
    pub executor: Judge0Client,

    /// Supported languages and their judge ids
    pub languages: LanguageRegistry,

    /// XP-per-level step function
    pub level_curve: LevelCurve,

    /// XP rewards by problem difficulty
    pub rewards: RewardTable,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, executor: Judge0Client, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                executor,
                languages: LanguageRegistry::standard(),
                level_curve: LevelCurve::default(),
                rewards: RewardTable::default(),
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get the execution client as the seam the grader works against
    pub fn executor(&self) -> &dyn CodeExecutor {
        &self.inner.executor
    }

    /// Get a reference to the language registry
    pub fn languages(&self) -> &LanguageRegistry {
        &self.inner.languages
    }

    /// Get a reference to the level curve
    pub fn level_curve(&self) -> &LevelCurve {
        &self.inner.level_curve
    }

    /// Get a reference to the reward table
    pub fn rewards(&self) -> &RewardTable {
        &self.inner.rewards
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
