use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Argon2 parameters for 50-150ms target latency
const ARGON2_M_COST: u32 = 19456; // 19 MB
const ARGON2_T_COST: u32 = 2; // 2 iterations
const ARGON2_P_COST: u32 = 1; // 1 parallelism

const TOKEN_LEEWAY_SECS: u64 = 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // username
    exp: i64,
    iat: i64,
    jti: String,
}

fn hasher() -> Result<Argon2<'static>, argon2::password_hash::Error> {
    let params = argon2::Params::new(ARGON2_M_COST, ARGON2_T_COST, ARGON2_P_COST, None)
        .map_err(argon2::password_hash::Error::from)?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = hasher()?.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// `Ok(false)` on mismatch; `Err` only when `hash` is not a PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;

    match hasher()?.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(_) => Ok(false),
    }
}

/// Issues and verifies HS256 identity tokens bound to a username.
#[derive(Clone)]
pub struct JwtIssuer {
    secret: String,
    ttl_secs: i64,
}

impl JwtIssuer {
    pub fn new(secret: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    pub fn generate_token(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: username.to_string(),
            exp: now.saturating_add(self.ttl_secs),
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Returns the username the token was issued for.
    pub fn validate_token(&self, token: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = TOKEN_LEEWAY_SECS;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;

        Ok(token_data.claims.sub)
    }
}

impl std::fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIssuer")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_generates_valid_hash() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();

        assert!(!hash.is_empty());
        assert_ne!(hash, password);
        // Argon2id PHC format
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_password_same_password_produces_different_hashes() {
        let password = "same_password";

        let hash1 = hash_password(password).unwrap();
        let hash2 = hash_password(password).unwrap();

        // Random salt
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_correct_password_returns_true() {
        let hash = hash_password("correct_password").unwrap();

        assert!(verify_password("correct_password", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_incorrect_password_returns_false() {
        let hash = hash_password("correct_password").unwrap();

        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_invalid_hash_format() {
        let result = verify_password("test_password", "not_a_valid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_password_with_unicode() {
        let password = "пароль123";
        let hash = hash_password(password).unwrap();

        assert!(verify_password(password, &hash).unwrap());
    }

    #[test]
    fn test_generate_token_creates_jwt() {
        let issuer = JwtIssuer::new("test_secret_key", 3600);

        let token = issuer.generate_token("alice").unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn test_validate_token_returns_username() {
        let issuer = JwtIssuer::new("secret_key", 3600);

        let token = issuer.generate_token("alice").unwrap();

        assert_eq!(issuer.validate_token(&token).unwrap(), "alice");
    }

    #[test]
    fn test_tokens_for_same_user_differ_but_share_identity() {
        let issuer = JwtIssuer::new("secret_key", 3600);

        let token1 = issuer.generate_token("bob").unwrap();
        let token2 = issuer.generate_token("bob").unwrap();

        assert_ne!(token1, token2);
        assert_eq!(issuer.validate_token(&token1).unwrap(), "bob");
        assert_eq!(issuer.validate_token(&token2).unwrap(), "bob");
    }

    #[test]
    fn test_validate_token_rejects_invalid_token() {
        let issuer = JwtIssuer::new("secret_key", 3600);

        assert!(issuer.validate_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_validate_token_rejects_token_with_wrong_secret() {
        let issuer = JwtIssuer::new("correct_secret", 3600);
        let other = JwtIssuer::new("wrong_secret", 3600);

        let token = issuer.generate_token("alice").unwrap();

        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_validate_token_rejects_expired_token() {
        let issuer = JwtIssuer::new("secret_key", 3600);
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "alice".to_string(),
            exp: now - 600,
            iat: now - 4200,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret_key"),
        )
        .unwrap();

        assert!(issuer.validate_token(&token).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let issuer = JwtIssuer::new("super-secret", 60);

        assert!(!format!("{:?}", issuer).contains("super-secret"));
    }
}
