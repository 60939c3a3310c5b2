//! Code judging
//!
//! Everything between an incoming submission and a pass/fail verdict: the
//! supported-language registry, the Judge0 CE client, and the grading loop
//! that runs a solution against a problem's test cases.

pub mod client;
pub mod grader;
pub mod language;

pub use client::{CodeExecutor, ExecutionResult, Judge0Client};
pub use grader::{GradeOutcome, Grader, normalize_output};
pub use language::{Language, LanguageRegistry, LanguageSpec};
