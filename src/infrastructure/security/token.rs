use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

/// Signed bearer tokens: a base64url JSON claims payload followed by a
/// base64url HMAC-SHA256 signature, joined by a dot. Stateless, so tokens
/// remain valid until they expire.
pub struct HmacTokenManager {
    secret: Vec<u8>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    username: String,
    iat: i64,
    exp: i64,
}

impl HmacTokenManager {
    pub fn new(secret: impl Into<Vec<u8>>, ttl_seconds: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::seconds(ttl_seconds),
            clock,
        }
    }

    fn sign(&self, payload: &[u8]) -> ApplicationResult<String> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload);
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    fn verify_signature(&self, payload: &[u8], signature: &str) -> ApplicationResult<()> {
        let raw_signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload);
        mac.verify_slice(&raw_signature)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))
    }
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;

        let claims = Claims {
            sub: i64::from(subject.user_id),
            username: subject.username,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let encoded = URL_SAFE_NO_PAD.encode(&payload);
        let signature = self.sign(encoded.as_bytes())?;

        Ok(AuthTokenDto {
            token: format!("{encoded}.{signature}"),
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (encoded, signature) = token
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;
        self.verify_signature(encoded.as_bytes(), signature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;

        let issued_at = DateTime::<Utc>::from_timestamp(claims.iat, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        if self.clock.now() >= expires_at {
            return Err(ApplicationError::unauthorized("token expired"));
        }

        Ok(AuthenticatedUser {
            id: UserId::new(claims.sub)
                .map_err(|_| ApplicationError::unauthorized("malformed token"))?,
            username: claims.username,
            issued_at,
            expires_at,
        })
    }
}
