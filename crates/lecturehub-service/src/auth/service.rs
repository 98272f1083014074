//! Credential verification and JWT lifecycle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use lecturehub_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use lecturehub_auth::password::PasswordHasher;
use lecturehub_core::error::AppError;
use lecturehub_core::result::AppResult;
use lecturehub_database::repositories::user::UserRepository;
use lecturehub_entity::user::User;

/// Handles login and access-token reissue.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Token decoder.
    decoder: Arc<JwtDecoder>,
}

/// A successful login: the user plus a fresh token pair.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// Freshly issued access and refresh tokens.
    pub tokens: TokenPair,
}

/// A successful reissue: a new access token and its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReissueResult {
    /// The new access token.
    pub access_token: String,
    /// When the new access token expires.
    pub access_expires_at: DateTime<Utc>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// Unknown email and wrong password produce the same error, so the
    /// response never reveals whether an account exists.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(invalid_credentials());
        }

        let tokens = self.encoder.generate_token_pair(user.id, user.role)?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult { user, tokens })
    }

    /// Issues a new access token from an expired one plus a valid refresh
    /// token.
    ///
    /// Both tokens must belong to the same user. The refresh token's own
    /// expiry is enforced; the access token's is not.
    pub async fn reissue(&self, access_token: &str, refresh_token: &str) -> AppResult<ReissueResult> {
        let access_claims = self.decoder.decode_expired_access_token(access_token)?;
        let refresh_claims = self.decoder.decode_refresh_token(refresh_token)?;

        if access_claims.sub != refresh_claims.sub {
            return Err(AppError::authentication("Token pair mismatch"));
        }

        // The role is re-read from storage so a role change invalidates
        // stale claims at the next reissue.
        let user = self
            .user_repo
            .find_by_id(refresh_claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        let (access_token, access_expires_at) =
            self.encoder.generate_access_token(user.id, user.role)?;

        info!(user_id = %user.id, "Access token reissued");

        Ok(ReissueResult {
            access_token,
            access_expires_at,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::authentication("Invalid email or password")
}
