use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Deserialize;
use std::fmt;

use crate::user::Role;

/// Why a credential could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Not `header.payload.signature`, or the payload is not base64url.
    Malformed,
    /// Payload decoded but is not the JSON object we expect.
    InvalidPayload,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Malformed => write!(f, "credential is not JWT-shaped"),
            TokenError::InvalidPayload => write!(f, "credential payload is not valid JSON"),
        }
    }
}

/// Claims we read out of the payload. Everything is optional; the token is
/// never verified here, only displayed and used for routing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl TokenClaims {
    /// Missing role means a plain client account.
    pub fn role(&self) -> Role {
        self.role.as_deref().map(Role::parse).unwrap_or(Role::Client)
    }
}

/// A bearer credential the API issued, with its payload decoded for display
/// and routing. Signature verification stays on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    raw: String,
    claims: TokenClaims,
}

impl AuthToken {
    pub fn decode(raw: &str) -> Result<Self, TokenError> {
        let payload = raw.split('.').nth(1).ok_or(TokenError::Malformed)?;
        let bytes = Base64UrlUnpadded::decode_vec(payload.trim_end_matches('='))
            .map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&bytes).map_err(|_| TokenError::InvalidPayload)?;
        Ok(Self {
            raw: raw.to_string(),
            claims,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn claims(&self) -> &TokenClaims {
        &self.claims
    }

    pub fn role(&self) -> Role {
        self.claims.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dummy_token(payload: serde_json::Value) -> String {
        let header = Base64UrlUnpadded::encode_string(b"{\"alg\":\"HS256\"}");
        let body = Base64UrlUnpadded::encode_string(payload.to_string().as_bytes());
        format!("{header}.{body}.firma")
    }

    #[test]
    fn test_decode_reads_claims() {
        let raw = dummy_token(json!({
            "name": "Laura",
            "email": "laura@ejemplo.com",
            "role": "Administrador",
        }));
        let token = AuthToken::decode(&raw).unwrap();
        assert_eq!(token.claims().name.as_deref(), Some("Laura"));
        assert_eq!(token.claims().email.as_deref(), Some("laura@ejemplo.com"));
        assert_eq!(token.role(), Role::Admin);
        assert_eq!(token.raw(), raw);
    }

    #[test]
    fn missing_role_means_client() {
        let raw = dummy_token(json!({ "name": "Pepe" }));
        let token = AuthToken::decode(&raw).unwrap();
        assert_eq!(token.role(), Role::Client);
        assert!(!token.role().is_staff());
    }

    #[test]
    fn unknown_claims_are_ignored() {
        let raw = dummy_token(json!({ "role": "Usuario", "iat": 123, "exp": 456 }));
        assert_eq!(AuthToken::decode(&raw).unwrap().role(), Role::Client);
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        assert_eq!(AuthToken::decode("sin-puntos"), Err(TokenError::Malformed));
        assert_eq!(AuthToken::decode("a.%%%.c"), Err(TokenError::Malformed));
        let not_json = format!("h.{}.s", Base64UrlUnpadded::encode_string(b"hola"));
        assert_eq!(
            AuthToken::decode(&not_json),
            Err(TokenError::InvalidPayload)
        );
    }

    #[test]
    fn padded_payload_is_tolerated() {
        let body = Base64UrlUnpadded::encode_string(b"{\"role\":\"Usuario\"}");
        let raw = format!("h.{body}==.s");
        assert_eq!(AuthToken::decode(&raw).unwrap().role(), Role::Client);
    }
}
