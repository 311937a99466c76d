use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::types::internal::Claims;

/// Validates bearer JWTs issued by the marketplace's auth service
///
/// This backend never issues tokens; it only checks the HS256 signature
/// and expiry, and reads the `{sub, role}` claims that gate the operator
/// console.
pub struct TokenService {
    jwt_secret: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("JWT has expired")]
    ExpiredToken,

    #[error("JWT is invalid or malformed")]
    InvalidToken,
}

impl TokenService {
    /// Create a new TokenService with the shared signing secret
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }

    /// Validate a bearer token and return its claims
    pub fn validate_bearer(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
            _ => TokenError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").field("jwt_secret", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn make_token(secret: &str, sub: &str, role: &str, exp_offset: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            role: role.to_string(),
            exp: now + exp_offset,
            iat: now,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn accepts_valid_token_and_reads_claims() {
        let service = TokenService::new("test-secret".to_string());
        let token = make_token("test-secret", "42", "admin", 600);

        let claims = service.validate_bearer(&token).unwrap();
        assert_eq!(claims.user_id(), Some(42));
        assert!(claims.is_admin());
    }

    #[test]
    fn rejects_expired_token() {
        let service = TokenService::new("test-secret".to_string());
        let token = make_token("test-secret", "42", "user", -600);

        assert!(matches!(service.validate_bearer(&token), Err(TokenError::ExpiredToken)));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let service = TokenService::new("test-secret".to_string());
        let token = make_token("other-secret", "42", "admin", 600);

        assert!(matches!(service.validate_bearer(&token), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn non_numeric_subject_yields_no_user_id() {
        let service = TokenService::new("test-secret".to_string());
        let token = make_token("test-secret", "operator-7", "user", 600);

        let claims = service.validate_bearer(&token).unwrap();
        assert_eq!(claims.user_id(), None);
        assert!(!claims.is_admin());
    }
}
