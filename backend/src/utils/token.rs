//! Local, unverified decoding of the session token.
//!
//! The console only reads the role claim to pick which pages to show. The
//! signature is never checked here; the PointControl API re-validates the
//! token on every call it receives.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;

use crate::models::role::{Role, UnknownRole};

#[derive(Debug, Clone, Deserialize)]
pub struct SessionClaims {
    pub role: String,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed session token: {0}")]
    Malformed(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    UnknownRole(#[from] UnknownRole),
}

fn claims_only_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
}

pub fn decode_session_claims(token: &str) -> Result<SessionClaims, TokenError> {
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(&[]),
        &claims_only_validation(),
    )?;
    Ok(data.claims)
}

pub fn decode_role(token: &str) -> Result<Role, TokenError> {
    let claims = decode_session_claims(token)?;
    Ok(claims.role.parse::<Role>()?)
}
