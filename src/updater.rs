//! Status updater
//!
//! Sends one custom status chunk to the remote user settings endpoint and
//! verifies the server echoed back exactly what was submitted.

use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::{header, Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;

use crate::credential::Credential;
use crate::helpers::cookie::spoofed_cfduid;
use crate::helpers::time::format_expiry;
use crate::utils::constants::{DEFAULT_USER_AGENT, UPDATE_STATUS_URL};

#[derive(Debug, Error)]
pub enum UpdateError {
    /// Request never completed (connect, timeout, body decode).
    #[error("status update request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Server answered with a non-2xx status.
    #[error("server rejected status update: HTTP {0}")]
    Rejected(StatusCode),
    /// Server accepted the request but echoed back a different text.
    #[error("server echoed status text '{echoed}' but '{sent}' was submitted")]
    Verification { sent: String, echoed: String },
}

#[derive(Debug, Clone)]
pub struct StatusUpdater {
    client: Client,
    endpoint: String,
    user_agent: String,
}

impl StatusUpdater {
    pub fn new(endpoint: Option<String>, user_agent: Option<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.unwrap_or_else(|| UPDATE_STATUS_URL.to_string()),
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }

    /// PATCH one chunk with the given expiry. No retry here; the driver
    /// decides what to do with a failure.
    pub async fn update(
        &self,
        credential: &Credential,
        text: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UpdateError> {
        let expiry = format_expiry(expires_at);
        let payload = json!({
            "custom_status": {
                "text": text,
                "expires_at": expiry,
            }
        });

        info!("setting custom status text: '{}' expiring at: {}", text, expiry);

        let response = self
            .client
            .patch(&self.endpoint)
            .header(header::USER_AGENT, self.user_agent.as_str())
            .header(header::AUTHORIZATION, credential.as_str())
            .header(header::COOKIE, format!("__cfduid={}", spoofed_cfduid()))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::Rejected(status));
        }

        let body: Value = response.json().await?;
        let echoed = body["custom_status"]["text"].as_str().unwrap_or_default();
        if echoed != text {
            return Err(UpdateError::Verification {
                sent: text.to_string(),
                echoed: echoed.to_string(),
            });
        }

        Ok(())
    }
}
