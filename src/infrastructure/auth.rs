//! Access tokens
//!
//! HS256 JWTs whose subject is the user id. Tokens are minted elsewhere
//! (or by [`create_jwt`] for tests and tooling); the API only verifies them.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub username: String,
    pub exp: usize,
}

/// Debug builds fall back to a fixed development secret.
fn jwt_secret() -> Option<String> {
    env::var("JWT_SECRET").ok().or_else(|| {
        if cfg!(debug_assertions) {
            Some("secret".to_string())
        } else {
            None
        }
    })
}

/// Whether a signing secret is available. Checked once at startup.
pub fn has_jwt_secret() -> bool {
    jwt_secret().is_some()
}

pub fn create_jwt(user_id: &str, username: &str) -> Result<String, Error> {
    let secret = jwt_secret().ok_or(ErrorKind::InvalidKeyFormat)?;
    let expiration = Utc::now() + Duration::hours(24);

    let claims = Claims {
        sub: user_id.to_owned(),
        username: username.to_owned(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn decode_jwt(token: &str) -> Result<Claims, Error> {
    let secret = jwt_secret().ok_or(ErrorKind::InvalidKeyFormat)?;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_subject() {
        let token = create_jwt("6f9619ff-8b86-d011-b42d-00c04fc964ff", "alice").unwrap();
        let claims = decode_jwt(&token).unwrap();
        assert_eq!(claims.sub, "6f9619ff-8b86-d011-b42d-00c04fc964ff");
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn rejects_tampered_token() {
        let mut token = create_jwt("id", "alice").unwrap();
        token.push('x');
        assert!(decode_jwt(&token).is_err());
    }
}
