//! REST client for the identity provider.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use super::provider::IdentityProvider;
use super::token::TokenManager;
use super::types::{DataEnvelope, IdentityUser};
use crate::config::IdentityConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;

const SERVICE: &str = "identity";

/// Identity provider client speaking the provider's REST API with bearer
/// tokens from the client-credentials flow.
pub struct RestIdentityClient {
    config: IdentityConfig,
    tokens: TokenManager,
}

impl RestIdentityClient {
    pub fn new(config: IdentityConfig) -> Self {
        let tokens = TokenManager::new(config.clone());
        Self { config, tokens }
    }

    fn make_error(message: impl Into<String>, source: Option<anyhow::Error>) -> AppError {
        AppError::external(SERVICE, message, source)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.request_timeout)
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityClient {
    async fn get_user(&self, user_id: i32) -> AppResult<IdentityUser> {
        let token = self.tokens.bearer_token().await?;
        let url = format!("{}/users/{}", self.config.base_url, user_id);

        let response = HTTP_CLIENT
            .get(&url)
            .timeout(self.request_timeout())
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("get_user({}) request failed: {}", user_id, e), Some(e.into()))
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound {
                entity: "identity user".to_string(),
                field: "id".to_string(),
                value: user_id.to_string(),
            });
        }

        let response = response.error_for_status().map_err(|e: reqwest::Error| {
            Self::make_error(format!("get_user({}) HTTP error: {}", user_id, e), Some(e.into()))
        })?;

        let envelope: DataEnvelope<IdentityUser> =
            response.json().await.map_err(|e: reqwest::Error| {
                Self::make_error(format!("get_user({}) invalid JSON: {}", user_id, e), Some(e.into()))
            })?;

        Ok(envelope.data)
    }

    async fn get_users_by_ids(&self, user_ids: &[i32]) -> AppResult<HashMap<i32, IdentityUser>> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let token = self.tokens.bearer_token().await?;
        let ids = user_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}/users?ids={}", self.config.base_url, ids);

        let response = HTTP_CLIENT
            .get(&url)
            .timeout(self.request_timeout())
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("get_users_by_ids({}) request failed: {}", ids, e), Some(e.into()))
            })?
            .error_for_status()
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("get_users_by_ids({}) HTTP error: {}", ids, e), Some(e.into()))
            })?;

        let envelope: DataEnvelope<Vec<IdentityUser>> =
            response.json().await.map_err(|e: reqwest::Error| {
                Self::make_error(format!("get_users_by_ids({}) invalid JSON: {}", ids, e), Some(e.into()))
            })?;

        Ok(envelope
            .data
            .into_iter()
            .map(|user| (user.id, user))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_error_carries_service_name() {
        let error = RestIdentityClient::make_error("boom", None);
        match error {
            AppError::ExternalApi { service, message, .. } => {
                assert_eq!(service, "identity");
                assert_eq!(message, "boom");
            }
            _ => panic!("Expected ExternalApi error"),
        }
    }

    #[tokio::test]
    async fn test_get_users_by_ids_empty_input_skips_request() {
        let client = RestIdentityClient::new(IdentityConfig::default());
        let result = client.get_users_by_ids(&[]).await.unwrap();
        assert!(result.is_empty());
    }
}
