//! Bearer credential checks.
//!
//! Token issuance lives elsewhere; this module only turns an `Authorization`
//! header into a verified [`Identity`] through an injected verifier.

use std::collections::HashMap;

use sweeper_protocol::{Claims, UserId};
use thiserror::Error;

use crate::config::TokenEntry;

/// Scope required by every game endpoint.
pub const GAME_SCOPE: &str = "game";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub scope: String,
}

impl Identity {
    pub fn claims(&self) -> Claims {
        Claims {
            sub: self.user_id.to_string(),
            scope: self.scope.clone(),
        }
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Invalid or expired bearer token")]
    InvalidToken,
    #[error("Token scope does not grant access")]
    WrongScope,
}

impl AuthError {
    /// Reason code reported by `/me`.
    pub const fn reason(self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::InvalidToken => "invalid_token",
            Self::WrongScope => "invalid_scope",
        }
    }
}

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.map(str::trim).filter(|h| !h.is_empty());
    let header = header.ok_or(AuthError::MissingToken)?;

    match header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(AuthError::InvalidToken),
    }
}

/// Verifies the header and checks that the identity holds `scope`.
pub fn authorize(
    verifier: &dyn CredentialVerifier,
    header: Option<&str>,
    scope: &str,
) -> Result<Identity, AuthError> {
    let identity = verifier.verify(bearer_token(header)?)?;
    if identity.scope == scope {
        Ok(identity)
    } else {
        log::debug!("User {} presented scope {:?}", identity.user_id, identity.scope);
        Err(AuthError::WrongScope)
    }
}

/// Fixed token table, loaded from configuration.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, Identity>,
}

impl StaticTokenVerifier {
    pub fn new(entries: &[TokenEntry]) -> Self {
        let tokens = entries
            .iter()
            .map(|entry| {
                let identity = Identity {
                    user_id: entry.user_id,
                    scope: entry.scope.clone(),
                };
                (entry.token.clone(), identity)
            })
            .collect();
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl CredentialVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}
