// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token lifecycle for the booking service.
//!
//! Tokens live in a JSON file next to the config so a restart keeps the
//! session. Expiry comes from the access token's JWT `exp` claim; the
//! token is refreshed ahead of time so an in-flight booking never races
//! its own credential.

use crate::config::ApiConfig;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Refresh this many seconds before the token actually expires
const REFRESH_LEAD_SECS: i64 = 60;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no stored credential at {0}; run `spotwatch login` first")]
    MissingCredential(PathBuf),

    #[error("stored credential has no refresh token; run `spotwatch login` again")]
    NoRefreshToken,

    #[error("token exchange rejected: {0}")]
    Expired(String),

    #[error("token endpoint unreachable: {0}")]
    Transport(String),

    #[error("token file error at {path}: {source}")]
    TokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("token decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Persisted credential, mirroring the token file layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix epoch seconds, decoded from the JWT at exchange time
    #[serde(default)]
    pub token_expiry: Option<i64>,
}

impl Credential {
    pub fn from_tokens(access_token: String, refresh_token: Option<String>) -> Self {
        let token_expiry = decode_expiry(&access_token);
        Self {
            access_token,
            refresh_token,
            token_expiry,
        }
    }

    /// Whether the token is expired or within the refresh lead.
    /// An unknown expiry counts as expiring.
    pub fn is_expiring(&self, now_epoch: i64) -> bool {
        match self.token_expiry {
            Some(expiry) => now_epoch >= expiry - REFRESH_LEAD_SECS,
            None => true,
        }
    }
}

/// Pull the `exp` claim out of a JWT without verifying the signature;
/// the server is the authority, this is only for refresh scheduling.
fn decode_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identity_request: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Owns the credential file and the exchange endpoint.
pub struct TokenStore {
    config: ApiConfig,
    credential: Option<Credential>,
    agent: ureq::Agent,
}

impl TokenStore {
    /// Load whatever credential is on disk; a missing file is not an error
    /// until a token is actually needed.
    pub fn open(config: ApiConfig, agent: ureq::Agent) -> Result<Self, AuthError> {
        let credential = if config.token_file.exists() {
            let raw = fs::read_to_string(&config.token_file).map_err(|source| {
                AuthError::TokenFile {
                    path: config.token_file.clone(),
                    source,
                }
            })?;
            Some(serde_json::from_str(&raw)?)
        } else {
            None
        };
        Ok(Self {
            config,
            credential,
            agent,
        })
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Current access token, refreshed first if it is about to expire.
    pub fn access_token(&mut self) -> Result<String, AuthError> {
        let credential = self
            .credential
            .as_ref()
            .ok_or_else(|| AuthError::MissingCredential(self.config.token_file.clone()))?;

        if credential.is_expiring(chrono::Utc::now().timestamp()) {
            tracing::debug!("access token expiring, refreshing");
            self.refresh()?;
        }

        self.credential
            .as_ref()
            .map(|c| c.access_token.clone())
            .ok_or_else(|| AuthError::MissingCredential(self.config.token_file.clone()))
    }

    /// Exchange the refresh token for a fresh credential.
    pub fn refresh(&mut self) -> Result<(), AuthError> {
        let refresh_token = self
            .credential
            .as_ref()
            .and_then(|c| c.refresh_token.clone())
            .ok_or(AuthError::NoRefreshToken)?;

        let credential = self.exchange(TokenRequest {
            grant_type: "refresh_token",
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            username: None,
            identity_request: None,
            refresh_token: Some(&refresh_token),
        })?;
        self.store(credential)
    }

    /// First-time login with an identity request token.
    pub fn login(&mut self, username: &str, identity_request: &str) -> Result<(), AuthError> {
        let credential = self.exchange(TokenRequest {
            grant_type: "identity_request",
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            username: Some(username),
            identity_request: Some(identity_request),
            refresh_token: None,
        })?;
        self.store(credential)
    }

    fn exchange(&self, request: TokenRequest<'_>) -> Result<Credential, AuthError> {
        let url = self.config.token_url();
        let mut builder = self.agent.post(&url);
        for (name, value) in self.config.headers() {
            builder = builder.header(name, &value);
        }
        let mut response = builder
            .send_json(&request)
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response
                .body_mut()
                .read_to_string()
                .unwrap_or_default();
            return Err(AuthError::Expired(format!("HTTP {status}: {body}")));
        }

        let token: TokenResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(Credential::from_tokens(
            token.access_token,
            token.refresh_token,
        ))
    }

    fn store(&mut self, credential: Credential) -> Result<(), AuthError> {
        fs::write(
            &self.config.token_file,
            serde_json::to_string_pretty(&credential)?,
        )
        .map_err(|source| AuthError::TokenFile {
            path: self.config.token_file.clone(),
            source,
        })?;
        tracing::info!(path = %self.config.token_file.display(), "stored refreshed credential");
        self.credential = Some(credential);
        Ok(())
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
