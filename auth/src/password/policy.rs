//! Password strength policy.
//!
//! A candidate password must be at least 8 characters long and contain an
//! uppercase letter, a lowercase letter, a digit, and a symbol. Character
//! classes are ASCII; anything outside `[A-Za-z0-9]` counts as a symbol.

use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// A single failed policy rule, with its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("Password must be at least 8 characters long")]
    TooShort,

    #[error("Password must include an uppercase letter")]
    MissingUppercase,

    #[error("Password must include a lowercase letter")]
    MissingLowercase,

    #[error("Password must include a number")]
    MissingDigit,

    #[error("Password must include a special character")]
    MissingSymbol,
}

/// Check a candidate password against every policy rule.
///
/// Pure function. Returns the violated rules in a fixed order (length,
/// uppercase, lowercase, digit, symbol); an empty vec means the password
/// is compliant.
pub fn violations(password: &str) -> Vec<PolicyViolation> {
    let mut violations = Vec::new();

    if password.chars().count() < MIN_LENGTH {
        violations.push(PolicyViolation::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(PolicyViolation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(PolicyViolation::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PolicyViolation::MissingDigit);
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        violations.push(PolicyViolation::MissingSymbol);
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compliant_password() {
        assert!(violations("Abcdef1!").is_empty());
        assert!(violations("Sup3r-Secret").is_empty());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(violations("Ab1!xyz"), vec![PolicyViolation::TooShort]);
    }

    #[test]
    fn test_missing_uppercase() {
        assert_eq!(
            violations("abcdef1!"),
            vec![PolicyViolation::MissingUppercase]
        );
    }

    #[test]
    fn test_missing_lowercase() {
        assert_eq!(
            violations("ABCDEF1!"),
            vec![PolicyViolation::MissingLowercase]
        );
    }

    #[test]
    fn test_missing_digit() {
        assert_eq!(violations("Abcdefg!"), vec![PolicyViolation::MissingDigit]);
    }

    #[test]
    fn test_missing_symbol() {
        assert_eq!(violations("Abcdefg1"), vec![PolicyViolation::MissingSymbol]);
    }

    #[test]
    fn test_multiple_violations_in_order() {
        assert_eq!(
            violations("abc"),
            vec![
                PolicyViolation::TooShort,
                PolicyViolation::MissingUppercase,
                PolicyViolation::MissingDigit,
                PolicyViolation::MissingSymbol,
            ]
        );
    }

    #[test]
    fn test_empty_password_violates_everything() {
        assert_eq!(violations("").len(), 5);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        // Anything outside [A-Za-z0-9] satisfies the symbol rule.
        assert!(violations("Abcdefg1ü").is_empty());
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            PolicyViolation::TooShort.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            PolicyViolation::MissingSymbol.to_string(),
            "Password must include a special character"
        );
    }
}
