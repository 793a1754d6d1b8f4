use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::AccessClaims;
use super::claims::RefreshClaims;
use super::errors::TokenError;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Issues and verifies access/refresh token pairs.
///
/// Access and refresh tokens are signed with separate secrets, so one kind
/// can never be replayed as the other. Secrets should be at least 32 bytes
/// and come from configuration, never from code.
pub struct TokenIssuer {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer from the two signing secrets and token lifetimes.
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_secret),
            access_decoding: DecodingKey::from_secret(access_secret),
            refresh_encoding: EncodingKey::from_secret(refresh_secret),
            refresh_decoding: DecodingKey::from_secret(refresh_secret),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issue a short-lived access token bound to a user id and role.
    ///
    /// # Errors
    /// * `Encoding` - Token signing failed
    pub fn generate_access_token(&self, user_id: &str, role: &str) -> Result<String, TokenError> {
        let claims = AccessClaims::new(user_id, role, self.access_ttl);
        Self::sign(&claims, &self.access_encoding)
    }

    /// Issue a longer-lived refresh token bound to a user id.
    ///
    /// # Errors
    /// * `Encoding` - Token signing failed
    pub fn generate_refresh_token(&self, user_id: &str) -> Result<String, TokenError> {
        let claims = RefreshClaims::new(user_id, self.refresh_ttl);
        Self::sign(&claims, &self.refresh_encoding)
    }

    /// Verify an access token and return its claims.
    ///
    /// # Errors
    /// * `Invalid` - Expired, malformed, or signed with the wrong secret
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        Self::check(token, &self.access_decoding)
    }

    /// Verify a refresh token and return its claims.
    ///
    /// # Errors
    /// * `Invalid` - Expired, malformed, or signed with the wrong secret
    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        Self::check(token, &self.refresh_decoding)
    }

    fn sign<T: Serialize>(claims: &T, key: &EncodingKey) -> Result<String, TokenError> {
        encode(&Header::new(ALGORITHM), claims, key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    fn check<T: DeserializeOwned>(token: &str, key: &DecodingKey) -> Result<T, TokenError> {
        // Every decode failure collapses to Invalid for the caller.
        decode::<T>(token, key, &Validation::new(ALGORITHM))
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const ACCESS_SECRET: &[u8] = b"access_secret_key_at_least_32_bytes!";
    const REFRESH_SECRET: &[u8] = b"refresh_secret_key_at_least_32_byte!";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(
            ACCESS_SECRET,
            REFRESH_SECRET,
            Duration::minutes(15),
            Duration::days(7),
        )
    }

    #[test]
    fn test_access_token_round_trip() {
        let issuer = issuer();

        let token = issuer
            .generate_access_token("user-1", "admin")
            .expect("Failed to generate access token");
        let claims = issuer
            .verify_access_token(&token)
            .expect("Failed to verify access token");

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let issuer = issuer();

        let token = issuer
            .generate_refresh_token("user-1")
            .expect("Failed to generate refresh token");
        let claims = issuer
            .verify_refresh_token(&token)
            .expect("Failed to verify refresh token");

        assert_eq!(claims.sub, "user-1");
    }

    #[test]
    fn test_token_kinds_are_not_interchangeable() {
        let issuer = issuer();

        let access = issuer.generate_access_token("user-1", "user").unwrap();
        let refresh = issuer.generate_refresh_token("user-1").unwrap();

        assert!(matches!(
            issuer.verify_refresh_token(&access),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(
            issuer.verify_access_token(&refresh),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = issuer();
        let other = TokenIssuer::new(
            b"a_completely_different_access_key!!!",
            b"a_completely_different_refresh_key!!",
            Duration::minutes(15),
            Duration::days(7),
        );

        let token = issuer.generate_refresh_token("user-1").unwrap();
        assert!(matches!(
            other.verify_refresh_token(&token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_expired_refresh_token_is_rejected() {
        let issuer = issuer();

        // Hand-roll claims expired well past the validation leeway.
        let now = Utc::now().timestamp();
        let claims = RefreshClaims {
            sub: "user-1".to_string(),
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(
            &Header::new(ALGORITHM),
            &claims,
            &EncodingKey::from_secret(REFRESH_SECRET),
        )
        .expect("Failed to encode expired token");

        assert!(matches!(
            issuer.verify_refresh_token(&token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let issuer = issuer();
        let token = issuer.generate_refresh_token("user-1").unwrap();

        // Flip a character in the payload segment.
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);
        let payload = &parts[1];
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        parts[1] = format!("{}{}", flipped, &payload[1..]);
        let tampered = parts.join(".");

        assert!(matches!(
            issuer.verify_refresh_token(&tampered),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_garbage_input_is_rejected() {
        let issuer = issuer();
        assert!(matches!(
            issuer.verify_refresh_token("not.a.jwt"),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(
            issuer.verify_access_token(""),
            Err(TokenError::Invalid)
        ));
    }
}
