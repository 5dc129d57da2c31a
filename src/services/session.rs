// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Credential and session handling.
//!
//! The access token is issued by an external OAuth provider. The client only
//! reads its claims (subject, expiry, profile) to know who is signed in and
//! until when; verifying the signature is the backend's job.

use crate::error::ClientError;
use crate::models::UserProfile;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Access token claims the client cares about.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Bearer credential for the activity backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_token: String,
    user: UserProfile,
    expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    /// Credential that never expires on the client side.
    pub fn new(access_token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            access_token: access_token.into(),
            user,
            expires_at: None,
        }
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Build a credential from a JWT access token, reading `sub`, `exp`,
    /// `name` and `email` without verifying the signature.
    pub fn from_access_token(token: &str) -> Result<Self, ClientError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| ClientError::Auth(format!("Unreadable access token: {}", e)))?
            .claims;

        if claims.sub.trim().is_empty() {
            return Err(ClientError::Auth("Access token has no subject".to_string()));
        }

        let expires_at = match claims.exp {
            Some(exp) => Some(DateTime::from_timestamp(exp, 0).ok_or_else(|| {
                ClientError::Auth(format!("Access token expiry out of range: {}", exp))
            })?),
            None => None,
        };

        Ok(Self {
            access_token: token.to_string(),
            user: UserProfile {
                user_id: claims.sub,
                name: claims.name,
                email: claims.email,
            },
            expires_at,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("user", &self.user)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Handle to the signed-in credential.
///
/// Created explicitly by the host and handed to the client; clones share
/// the same credential so logging out through any clone signs every
/// holder out.
#[derive(Clone, Default)]
pub struct Session {
    credential: Arc<RwLock<Option<Credential>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: Credential) -> Self {
        let session = Self::new();
        session.log_in(credential);
        session
    }

    pub fn log_in(&self, credential: Credential) {
        tracing::info!(user_id = %credential.user.user_id, "Session established");
        *self
            .credential
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(credential);
    }

    pub fn log_out(&self) {
        let previous = self
            .credential
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(credential) = previous {
            tracing::info!(user_id = %credential.user.user_id, "Session invalidated");
        }
    }

    /// The current credential, if present and unexpired.
    pub fn credential(&self) -> Result<Credential, ClientError> {
        let guard = self
            .credential
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        match guard.as_ref() {
            None => Err(ClientError::Auth("Not signed in".to_string())),
            Some(c) if c.is_expired_at(Utc::now()) => {
                Err(ClientError::Auth("Access token expired".to_string()))
            }
            Some(c) => Ok(c.clone()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_ok()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.credential().ok().map(|c| c.user)
    }
}
