//! Local validation of the signup form
//!
//! Runs before any network call. Rules are checked in a fixed order and the
//! first failure wins: username, password strength, confirmation, email.

use crate::types::RegisterRequest;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]{2,19}$").expect("valid username regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.(com|net|io)$").expect("valid email regex"));

/// Symbols that satisfy the password "special character" rule
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/`~";

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid username.")]
    Username,

    #[error("Password must be strong.")]
    WeakPassword,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Invalid email address.")]
    Email,
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err(ValidationError::Username)
    }
}

/// Line terminators are never part of a password
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let strong = password.chars().count() >= MIN_PASSWORD_LEN
        && !password.chars().any(is_line_terminator)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if strong {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

pub fn validate_confirmation(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password == confirm {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

/// Validate a signup request, reporting only the first rule it breaks
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationError> {
    validate_username(&request.username)?;
    validate_password(&request.password)?;
    validate_confirmation(&request.password, &request.confirm_password)?;
    validate_email(&request.email)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str, confirm: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            password: password.into(),
            confirm_password: confirm.into(),
            email: email.into(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert_eq!(
            validate_registration(&request("abc12", "Abcdef1!", "Abcdef1!", "a@b.com")),
            Ok(())
        );
    }

    #[test]
    fn test_username_error_wins_over_everything_else() {
        assert_eq!(
            validate_registration(&request("1abc", "weak", "other", "nope")),
            Err(ValidationError::Username)
        );
        assert_eq!(
            validate_registration(&request("1abc", "Abcdef1!", "Abcdef1!", "a@b.com")),
            Err(ValidationError::Username)
        );
    }

    #[test]
    fn test_rule_order_is_fixed() {
        assert_eq!(
            validate_registration(&request("abc12", "weak", "other", "nope")),
            Err(ValidationError::WeakPassword)
        );
        assert_eq!(
            validate_registration(&request("abc12", "Abcdef1!", "Abcdef1?", "nope")),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_registration(&request("abc12", "Abcdef1!", "Abcdef1!", "a@b.org")),
            Err(ValidationError::Email)
        );
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("abc").is_ok());
        assert!(validate_username(&format!("a{}", "b".repeat(19))).is_ok());
        assert!(validate_username(&format!("a{}", "b".repeat(20))).is_err());
        assert!(validate_username("a_b-c").is_ok());
        assert!(validate_username("ab c").is_err());
    }

    #[test]
    fn test_password_needs_every_character_class() {
        assert!(validate_password("abcdef1!").is_err());
        assert!(validate_password("ABCDEF1!").is_err());
        assert!(validate_password("Abcdefg!").is_err());
        assert!(validate_password("Abcdefg1").is_err());
        assert!(validate_password("Abc1!").is_err());
        assert!(validate_password("Abcdef1~").is_ok());
    }

    #[test]
    fn test_password_rejects_line_breaks() {
        assert!(validate_password("Abcdef1!\n").is_err());
        assert!(validate_password("Abc\r\ndef1!").is_err());
        assert!(validate_password("Abcdef1!\u{2028}").is_err());
        assert!(validate_password("Abcdef 1!").is_ok());
    }

    #[test]
    fn test_email_tld_allow_list() {
        assert!(validate_email("student@uni.com").is_ok());
        assert!(validate_email("student@uni.net").is_ok());
        assert!(validate_email("student@uni.io").is_ok());
        assert!(validate_email("student@uni.edu").is_err());
        assert!(validate_email("stu dent@uni.com").is_err());
        assert!(validate_email("@uni.com").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::Username.to_string(), "Invalid username.");
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }
}
