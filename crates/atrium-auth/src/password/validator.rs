//! Password complexity and expiry policy.

use chrono::{DateTime, Duration, Utc};

use atrium_core::error::AppError;
use atrium_core::result::AppResult;

/// Symbols accepted as the "special character" class.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

/// Substrings that disqualify a password regardless of complexity.
/// Matched case-insensitively anywhere in the candidate.
const BANNED_SUBSTRINGS: &[&str] = &[
    "password",
    "12345678",
    "qwerty",
    "abc123",
    "letmein",
    "admin123",
    "welcome1",
    "iloveyou",
];

/// Enforces the password complexity and expiry rules.
///
/// Validation runs before hashing; a password that fails any rule is
/// rejected with a validation error naming the first failed rule.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
    max_age_days: i64,
}

impl PasswordValidator {
    /// Create a validator with the configured minimum length and maximum age.
    pub fn new(min_length: usize, max_age_days: i64) -> Self {
        Self {
            min_length,
            max_age_days,
        }
    }

    /// Validate a candidate password against the complexity rules.
    pub fn validate(&self, password: &str) -> AppResult<()> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(AppError::validation(
                "Password must contain at least one lowercase letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(AppError::validation(
                "Password must contain at least one uppercase letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }
        if !password.chars().any(|c| SYMBOLS.contains(c)) {
            return Err(AppError::validation(
                "Password must contain at least one special character",
            ));
        }

        let lowered = password.to_lowercase();
        for banned in BANNED_SUBSTRINGS {
            if lowered.contains(banned) {
                return Err(AppError::validation(
                    "Password contains a common pattern that is too easy to guess",
                ));
            }
        }

        Ok(())
    }

    /// Whether a password set at `changed_at` has exceeded the maximum age.
    ///
    /// A password with no recorded change timestamp is never expired.
    pub fn is_expired(&self, changed_at: Option<DateTime<Utc>>) -> bool {
        match changed_at {
            Some(ts) => Utc::now() - ts > Duration::days(self.max_age_days),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(8, 90)
    }

    #[test]
    fn test_accepts_compliant_password() {
        assert!(validator().validate("Passw0rd!").is_ok());
    }

    #[test]
    fn test_rejects_banned_substring_despite_classes() {
        // Satisfies every character-class rule but embeds "password".
        let err = validator().validate("MyPassword123!").unwrap_err();
        assert!(err.message.contains("common pattern"));
        assert!(validator().validate("password123").is_err());
    }

    #[test]
    fn test_rejects_missing_character_classes() {
        let v = validator();
        assert!(v.validate("Short1!").is_err());
        assert!(v.validate("alllowercase1!").is_err());
        assert!(v.validate("ALLUPPERCASE1!").is_err());
        assert!(v.validate("NoDigitsHere!").is_err());
        assert!(v.validate("NoSymbols123").is_err());
    }

    #[test]
    fn test_expiry_window() {
        let v = validator();
        assert!(!v.is_expired(None));
        assert!(!v.is_expired(Some(Utc::now() - Duration::days(89))));
        assert!(v.is_expired(Some(Utc::now() - Duration::days(91))));
    }
}
