//! HTTP client for the external action-item API.
//!
//! The dispatcher only sees the [`ActionItemApi`] trait; tests substitute a
//! recording fake, production uses [`HttpActionItemClient`].

use std::time::Duration;

use serde_json::json;

use crate::config::ApiConfig;
use crate::error::{LyearnError, Result};

/// The delegated side-effecting operation behind the `create_action_item` tool.
///
/// Only the title crosses this boundary.
pub trait ActionItemApi: Send + Sync {
    fn create_action_item(&self, title: &str) -> Result<()>;
}

/// Production implementation speaking JSON over HTTP.
pub struct HttpActionItemClient {
    config: ApiConfig,
    http: reqwest::blocking::Client,
}

impl HttpActionItemClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { config, http })
    }
}

impl ActionItemApi for HttpActionItemClient {
    fn create_action_item(&self, title: &str) -> Result<()> {
        let mut request = self
            .http
            .post(self.config.endpoint())
            .json(&json!({ "title": title }));
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(title, "creating action item");
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LyearnError::Api {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        tracing::debug!(title, "action item created");
        Ok(())
    }
}
