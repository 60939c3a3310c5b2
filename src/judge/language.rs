//! Supported languages and their execution parameters

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::judge0_languages;

/// Languages accepted for submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Cpp,
    Java,
    C,
}

impl Language {
    /// Get language as its wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::C => "c",
        }
    }

    /// Parse a language from its wire identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "python" => Some(Self::Python),
            "cpp" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "c" => Some(Self::C),
            _ => None,
        }
    }

    /// All supported languages
    pub const ALL: &[Language] = &[Self::Python, Self::Cpp, Self::Java, Self::C];
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Execution parameters for one language
#[derive(Debug, Clone)]
pub struct LanguageSpec {
    /// Judge0 CE language id
    pub judge_language_id: i32,
    /// Substitute for an empty stdin. Some runtimes (notably Java's Scanner)
    /// block or crash on an interactive read from an empty stream, so every
    /// run gets at least this much input.
    pub empty_stdin_fallback: &'static str,
}

/// Immutable lookup table of language execution parameters.
///
/// Built once at startup and injected wherever code is executed, so the
/// Judge0 id mapping and stdin substitution policy never live in ambient
/// globals.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    entries: HashMap<Language, LanguageSpec>,
}

impl LanguageRegistry {
    /// The standard table: Judge0 CE ids, "0" as the empty-stdin substitute
    pub fn standard() -> Self {
        let entries = HashMap::from([
            (
                Language::Python,
                LanguageSpec {
                    judge_language_id: judge0_languages::PYTHON,
                    empty_stdin_fallback: "0",
                },
            ),
            (
                Language::Cpp,
                LanguageSpec {
                    judge_language_id: judge0_languages::CPP,
                    empty_stdin_fallback: "0",
                },
            ),
            (
                Language::Java,
                LanguageSpec {
                    judge_language_id: judge0_languages::JAVA,
                    empty_stdin_fallback: "0",
                },
            ),
            (
                Language::C,
                LanguageSpec {
                    judge_language_id: judge0_languages::C,
                    empty_stdin_fallback: "0",
                },
            ),
        ]);

        Self { entries }
    }

    /// Look up the execution parameters for a language
    pub fn spec(&self, language: Language) -> Option<&LanguageSpec> {
        self.entries.get(&language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!(Language::parse("python"), Some(Language::Python));
        assert_eq!(Language::parse("cpp"), Some(Language::Cpp));
        assert_eq!(Language::parse("rust"), None);
        assert_eq!(Language::parse("Python"), None);
    }

    #[test]
    fn test_standard_registry_covers_all_languages() {
        let registry = LanguageRegistry::standard();
        for lang in Language::ALL {
            let spec = registry.spec(*lang).expect("missing language spec");
            assert!(!spec.empty_stdin_fallback.is_empty());
        }
    }

    #[test]
    fn test_judge0_language_ids() {
        let registry = LanguageRegistry::standard();
        assert_eq!(registry.spec(Language::Python).unwrap().judge_language_id, 71);
        assert_eq!(registry.spec(Language::Cpp).unwrap().judge_language_id, 54);
        assert_eq!(registry.spec(Language::Java).unwrap().judge_language_id, 62);
        assert_eq!(registry.spec(Language::C).unwrap().judge_language_id, 50);
    }
}
