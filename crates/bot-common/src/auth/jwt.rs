//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and refresh using the `jsonwebtoken` crate.
//! Tokens are HS256-signed and carry the caller's identity and role, so the
//! request guard never needs a database round trip.

use bot_core::Role;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID from the subject
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` if the subject is not a numeric id
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub.parse::<i64>().map_err(|_| AppError::InvalidToken)
    }

    /// A token is valid strictly before its expiry instant
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// JWT service for issuing, parsing and refreshing tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
    refresh_grace: i64,
}

impl JwtService {
    /// Create a new JWT service
    ///
    /// `token_expiry` is the TTL in seconds; `refresh_grace` is how long after
    /// expiry a token may still be exchanged for a fresh one.
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64, refresh_grace: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
            refresh_grace,
        }
    }

    /// Issue a signed token for a user
    ///
    /// # Errors
    /// Returns an error if the expiry instant is out of range or encoding fails
    pub fn issue(&self, user_id: i64, email: &str, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = TimeDelta::try_seconds(self.token_expiry)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("JWT expiry out of range")))?;
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Verify the signature and decode the claims without judging expiry
    fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` if the token is malformed, the
    /// signature does not verify, or it has expired
    pub fn parse(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_claims(token)?;
        if claims.is_expired() {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }

    /// Re-issue a token carrying the same identity and role
    ///
    /// Expired tokens are accepted for `refresh_grace` seconds past expiry.
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` on a bad signature or a token past
    /// its grace window
    pub fn refresh(&self, token: &str) -> Result<String, AppError> {
        let claims = self.decode_claims(token)?;
        if Utc::now().timestamp() >= claims.exp.saturating_add(self.refresh_grace) {
            return Err(AppError::InvalidToken);
        }
        let user_id = claims.user_id()?;

        self.issue(user_id, &claims.email, claims.role)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .field("refresh_grace", &self.refresh_grace)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-that-is-long-enough";

    fn create_test_service() -> JwtService {
        JwtService::new(SECRET, 86_400, 86_400)
    }

    #[test]
    fn test_issue_and_parse() {
        let service = create_test_service();

        let token = service.issue(12345, "a@example.com", Role::Admin).unwrap();
        let claims = service.parse(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), 12345);
        assert_eq!(claims.email, "a@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 86_400);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtService::new(SECRET, -60, 0);

        let token = service.issue(1, "a@example.com", Role::Viewer).unwrap();
        assert!(matches!(service.parse(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = create_test_service()
            .issue(1, "a@example.com", Role::Viewer)
            .unwrap();
        let other = JwtService::new("a-completely-different-secret", 86_400, 86_400);

        assert!(matches!(other.parse(&token), Err(AppError::InvalidToken)));
        assert!(matches!(other.refresh(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        assert!(matches!(
            service.parse("invalid.token.here"),
            Err(AppError::InvalidToken)
        ));
        assert!(matches!(service.parse(""), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_refresh_keeps_identity() {
        let service = create_test_service();

        let token = service.issue(7, "v@example.com", Role::Viewer).unwrap();
        let refreshed = service.refresh(&token).unwrap();
        let claims = service.parse(&refreshed).unwrap();

        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.email, "v@example.com");
        assert_eq!(claims.role, Role::Viewer);
    }

    #[test]
    fn test_refresh_accepts_expired_token_within_grace() {
        let expired = JwtService::new(SECRET, -60, 3600)
            .issue(7, "v@example.com", Role::Admin)
            .unwrap();
        let service = JwtService::new(SECRET, 3600, 3600);

        let refreshed = service.refresh(&expired).unwrap();
        let claims = service.parse(&refreshed).unwrap();
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_refresh_rejects_token_past_grace() {
        let service = JwtService::new(SECRET, -120, 60);
        let token = service.issue(7, "v@example.com", Role::Viewer).unwrap();

        assert!(matches!(service.refresh(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_issue_with_out_of_range_expiry_fails() {
        let service = JwtService::new(SECRET, 36_000_000_000_000, 0);

        assert!(matches!(
            service.issue(1, "a@example.com", Role::Admin),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_claims_user_id() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: String::new(),
            role: Role::Viewer,
            iat: 0,
            exp: i64::MAX,
        };

        assert!(claims.user_id().is_err());
    }
}
