//! Input validation utilities

use crate::{
    constants::{MAX_SLUG_LENGTH, MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH},
    error::{AppError, AppResult},
};

/// Validate a problem slug: lowercase alphanumerics and hyphens, no
/// leading/trailing hyphen.
pub fn validate_slug(slug: &str) -> AppResult<()> {
    if slug.is_empty() {
        return Err(AppError::Validation("Slug cannot be empty".to_string()));
    }
    if slug.len() as u64 > MAX_SLUG_LENGTH {
        return Err(AppError::Validation(format!(
            "Slug must be at most {} characters",
            MAX_SLUG_LENGTH
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::Validation(
            "Slug can only contain lowercase letters, numbers, and hyphens".to_string(),
        ));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(AppError::Validation(
            "Slug cannot start or end with a hyphen".to_string(),
        ));
    }
    Ok(())
}

/// Validate username format
pub fn validate_username(username: &str) -> AppResult<()> {
    if (username.len() as u64) < MIN_USERNAME_LENGTH {
        return Err(AppError::Validation(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LENGTH
        )));
    }
    if username.len() as u64 > MAX_USERNAME_LENGTH {
        return Err(AppError::Validation(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LENGTH
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::Validation(
            "Username can only contain letters, numbers, underscores, and hyphens".to_string(),
        ));
    }
    if !username
        .chars()
        .next()
        .map(|c| c.is_alphabetic())
        .unwrap_or(false)
    {
        return Err(AppError::Validation(
            "Username must start with a letter".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("two-sum").is_ok());
        assert!(validate_slug("fizzbuzz2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Two-Sum").is_err()); // Uppercase
        assert!(validate_slug("two_sum").is_err()); // Underscore
        assert!(validate_slug("-two-sum").is_err()); // Leading hyphen
        assert!(validate_slug("two-sum-").is_err()); // Trailing hyphen
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("123abc").is_err()); // Starts with number
        assert!(validate_username("user@name").is_err()); // Invalid character
    }
}
