use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Issued tokens are valid for 12 hours.
pub const TOKEN_TTL_HOURS: i64 = 12;

/// Claims carried in a bearer token: the user object posted to `/jwt`,
/// flattened, plus the standard timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub user: Map<String, Value>,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("token rejected: {0}")]
    Verification(#[source] jsonwebtoken::errors::Error),
}

/// Signs and verifies bearer tokens with the shared HS256 secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign an arbitrary user object into a token expiring in
    /// [`TOKEN_TTL_HOURS`]. The claims shape is not validated.
    pub fn issue(&self, user: Map<String, Value>) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            user,
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Decode and verify a token. Fails on malformed input, a bad
    /// signature, or an expired `exp`.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(TokenError::Verification)?;
        Ok(data.claims)
    }
}
