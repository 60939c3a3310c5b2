//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::difficulties;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub tags: Vec<String>,
    /// Sample input/output pairs shown on the problem page
    pub samples: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Problem difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Get difficulty as its stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => difficulties::EASY,
            Self::Medium => difficulties::MEDIUM,
            Self::Hard => difficulties::HARD,
        }
    }

    /// Parse difficulty from its stored string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            difficulties::EASY => Some(Self::Easy),
            difficulties::MEDIUM => Some(Self::Medium),
            difficulties::HARD => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
