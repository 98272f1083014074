//! Password policy enforcement for new passwords.

use lecturehub_core::error::AppError;

const MIN_LENGTH: usize = 6;
const MAX_LENGTH: usize = 10;

/// Validates password strength against the platform policy.
///
/// Passwords must be 6 to 10 characters and combine at least two of
/// the three character classes: lowercase letters, uppercase letters,
/// and digits.
#[derive(Debug, Clone, Default)]
pub struct PasswordValidator;

impl PasswordValidator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a password against the policy.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let length = password.chars().count();
        if length < MIN_LENGTH || length > MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be between {MIN_LENGTH} and {MAX_LENGTH} characters long"
            )));
        }

        let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
        let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());

        let class_count = [has_lowercase, has_uppercase, has_digit]
            .iter()
            .filter(|&&present| present)
            .count();

        if class_count < 2 {
            return Err(AppError::validation(
                "Password must combine at least two of: lowercase letters, uppercase letters, digits",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_two_character_classes() {
        let validator = PasswordValidator::new();

        assert!(validator.validate("abc123").is_ok());
        assert!(validator.validate("ABCdef").is_ok());
        assert!(validator.validate("ABC123").is_ok());
        assert!(validator.validate("Abc123xyz0").is_ok());
    }

    #[test]
    fn test_rejects_single_character_class() {
        let validator = PasswordValidator::new();

        assert!(validator.validate("abcdef").is_err());
        assert!(validator.validate("ABCDEF").is_err());
        assert!(validator.validate("123456").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_length() {
        let validator = PasswordValidator::new();

        assert!(validator.validate("abc12").is_err());
        assert!(validator.validate("abc12345678").is_err());
    }
}
