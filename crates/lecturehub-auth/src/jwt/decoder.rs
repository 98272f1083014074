//! JWT validation and decoding.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use lecturehub_core::config::AuthConfig;
use lecturehub_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates and decodes JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Decodes and validates an access token (signature + expiry).
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token, true)?;
        if claims.token_type != TokenType::Access {
            return Err(AppError::authentication("Expected an access token"));
        }
        Ok(claims)
    }

    /// Decodes and validates a refresh token (signature + expiry).
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token, true)?;
        if claims.token_type != TokenType::Refresh {
            return Err(AppError::authentication("Expected a refresh token"));
        }
        Ok(claims)
    }

    /// Decodes an access token whose expiry may have passed.
    ///
    /// The signature is still verified; only the `exp` check is skipped.
    /// Used by the reissue flow to recover the subject of an expired
    /// access token.
    pub fn decode_expired_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token, false)?;
        if claims.token_type != TokenType::Access {
            return Err(AppError::authentication("Expected an access token"));
        }
        Ok(claims)
    }

    fn decode(&self, token: &str, validate_exp: bool) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = validate_exp;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(format!("Invalid token: {e}")))
    }
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use lecturehub_core::types::UserId;
    use lecturehub_entity::user::UserRole;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-at-least-32-bytes-long".to_string(),
            jwt_access_ttl_minutes: 30,
            jwt_refresh_ttl_hours: 24,
        }
    }

    #[test]
    fn test_roundtrip_access_token() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);
        let user_id = UserId::new();

        let pair = encoder
            .generate_token_pair(user_id, UserRole::Student)
            .unwrap();
        let claims = decoder.decode_access_token(&pair.access_token).unwrap();

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.role, UserRole::Student);
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let pair = encoder
            .generate_token_pair(UserId::new(), UserRole::Instructor)
            .unwrap();

        assert!(decoder.decode_access_token(&pair.refresh_token).is_err());
        assert!(decoder.decode_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let pair = encoder
            .generate_token_pair(UserId::new(), UserRole::Student)
            .unwrap();
        let mut tampered = pair.access_token.clone();
        tampered.push('x');

        assert!(decoder.decode_access_token(&tampered).is_err());
    }
}
