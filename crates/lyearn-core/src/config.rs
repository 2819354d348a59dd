//! Environment configuration for the action-item API.

use crate::error::{LyearnError, Result};

pub const API_URL_ENV: &str = "LYEARN_API_URL";
pub const API_TOKEN_ENV: &str = "LYEARN_API_TOKEN";

/// Connection settings for the external action-item API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, token }
    }

    /// Read configuration from `LYEARN_API_URL` / `LYEARN_API_TOKEN`.
    ///
    /// A missing URL is a startup error; an empty token is treated as unset.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_ENV).map_err(|_| LyearnError::MissingApiUrl)?;
        let token = std::env::var(API_TOKEN_ENV).ok().filter(|t| !t.is_empty());
        Ok(Self::new(base_url, token))
    }

    /// Full URL of the action-items collection endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/action-items", self.base_url)
    }
}
