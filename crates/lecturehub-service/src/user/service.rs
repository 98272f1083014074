//! User registration — validation, normalization, and account creation.

use std::sync::Arc;

use tracing::info;

use lecturehub_auth::password::{PasswordHasher, PasswordValidator};
use lecturehub_core::error::AppError;
use lecturehub_core::result::AppResult;
use lecturehub_database::repositories::user::UserRepository;
use lecturehub_entity::user::{CreateUser, User, UserRole};

/// Handles new-account registration.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
}

/// Data for registering a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Desired display name.
    pub username: String,
    /// Email address (used for login).
    pub email: String,
    /// Phone number; formatting characters are stripped before storage.
    pub phone: String,
    /// Plaintext password, validated against the policy.
    pub password: String,
    /// Requested role.
    pub role: UserRole,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Registers a new account.
    ///
    /// Email and normalized phone number must both be unused. The password
    /// must satisfy the platform policy before it is hashed.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<User> {
        if req.username.trim().is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }

        if !req.email.contains('@') || !req.email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }

        let phone = normalize_phone(&req.phone);
        if phone.len() < 9 {
            return Err(AppError::validation("Invalid phone number"));
        }

        self.validator.validate(&req.password)?;

        if self.user_repo.exists_by_email(&req.email).await? {
            return Err(AppError::conflict("An account already exists for this email"));
        }
        if self.user_repo.exists_by_phone(&phone).await? {
            return Err(AppError::conflict(
                "An account already exists for this phone number",
            ));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: req.username,
                email: req.email,
                phone,
                password_hash,
                role: req.role,
            })
            .await?;

        info!(user_id = %user.id, role = ?user.role, "User registered");

        Ok(user)
    }
}

/// Strips everything but digits, so "010-1234-5678" and "01012345678"
/// identify the same number.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_strips_formatting() {
        assert_eq!(normalize_phone("010-1234-5678"), "01012345678");
        assert_eq!(normalize_phone("(010) 1234 5678"), "01012345678");
        assert_eq!(normalize_phone("01012345678"), "01012345678");
    }

    #[test]
    fn test_normalize_phone_empty_input() {
        assert_eq!(normalize_phone("---"), "");
    }
}
