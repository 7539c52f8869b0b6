//! Client-credentials token management for the identity provider.

use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use super::types::TokenResponse;
use crate::config::IdentityConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;

/// A bearer token with its computed expiry instant.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Caches the client-credentials bearer token and refreshes it shortly
/// before expiry.
///
/// This is the one piece of remembered external state in the portal; every
/// identity lookup otherwise goes straight to the provider.
pub struct TokenManager {
    config: IdentityConfig,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenManager {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            cached: RwLock::new(None),
        }
    }

    /// Returns a valid bearer token, requesting a fresh one when the cache
    /// is empty or within the refresh margin of expiry.
    pub async fn bearer_token(&self) -> AppResult<String> {
        if let Some(token) = self.cached.read().await.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.access_token.clone());
            }
        }

        let mut guard = self.cached.write().await;
        // Another task may have refreshed while we waited on the lock
        if let Some(token) = guard.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.access_token.clone());
            }
        }

        let response = self.request_token().await?;
        let lifetime = response
            .expires_in
            .saturating_sub(self.config.token_refresh_margin);
        let token = CachedToken {
            access_token: response.access_token,
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        };
        let access_token = token.access_token.clone();
        *guard = Some(token);

        Ok(access_token)
    }

    async fn request_token(&self) -> AppResult<TokenResponse> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = HTTP_CLIENT
            .post(&self.config.token_url)
            .timeout(Duration::from_secs(self.config.request_timeout))
            .form(&params)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                AppError::external("identity token endpoint", format!("request failed: {}", e), Some(e.into()))
            })?
            .error_for_status()
            .map_err(|e: reqwest::Error| {
                AppError::external("identity token endpoint", format!("HTTP error: {}", e), Some(e.into()))
            })?;

        response.json().await.map_err(|e: reqwest::Error| {
            AppError::external("identity token endpoint", format!("invalid JSON: {}", e), Some(e.into()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> IdentityConfig {
        IdentityConfig {
            base_url: "https://id.example.com/api".to_string(),
            token_url: "https://id.example.com/oauth/token".to_string(),
            client_id: "portal".to_string(),
            client_secret: "secret".to_string(),
            request_timeout: 5,
            token_refresh_margin: 60,
        }
    }

    #[tokio::test]
    async fn test_cached_token_is_reused_until_margin() {
        let manager = TokenManager::new(test_config());
        {
            let mut guard = manager.cached.write().await;
            *guard = Some(CachedToken {
                access_token: "cached".to_string(),
                expires_at: Instant::now() + Duration::from_secs(300),
            });
        }

        let token = manager.bearer_token().await.unwrap();
        assert_eq!(token, "cached");
    }

    #[test]
    fn test_lifetime_subtracts_refresh_margin() {
        let config = test_config();
        let expires_in: u64 = 3600;
        assert_eq!(expires_in.saturating_sub(config.token_refresh_margin), 3540);

        // A token shorter than the margin is treated as already expired
        let short: u64 = 30;
        assert_eq!(short.saturating_sub(config.token_refresh_margin), 0);
    }
}
