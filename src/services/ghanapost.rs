use std::error::Error;

use reqwest::StatusCode;

use crate::config::Config;

/// Failure modes for one outbound lookup. The handler collapses all of
/// these into the same 500 response; the variants exist so transport
/// failures, bad statuses, and unparseable bodies keep distinct messages.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Ghana Post GPS request failed: {0}")]
    Transport(String),

    #[error("Ghana Post GPS returned error: {0}")]
    Status(StatusCode),

    #[error("Failed to parse Ghana Post GPS response: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

/// Client for the Ghana Post GPS lookup endpoint.
///
/// Holds a single shared `reqwest::Client`; each lookup is one POST with a
/// form-encoded `address` field and no retries. The response body is parsed
/// as JSON only so it can be relayed verbatim, never interpreted.
#[derive(Debug, Clone)]
pub struct LookupService {
    client: reqwest::Client,
    upstream_url: String,
}

impl LookupService {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            upstream_url: config.upstream_url.clone(),
        })
    }

    /// Forward one address to the upstream service and return its JSON
    /// document untouched.
    pub async fn lookup(&self, address: &str) -> Result<serde_json::Value, LookupError> {
        tracing::info!("🌍 Querying Ghana Post GPS for address");

        let response = self
            .client
            .post(&self.upstream_url)
            .form(&[("address", address)])
            .send()
            .await
            .map_err(|e| {
                // Log full error chain for debugging
                let mut error_msg = format!("{}", e);
                let mut source = e.source();
                while let Some(err) = source {
                    error_msg.push_str(&format!(": {}", err));
                    source = err.source();
                }
                tracing::warn!("Ghana Post GPS request failed: {}", error_msg);
                LookupError::Transport(error_msg)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Ghana Post GPS returned HTTP {}", status);
            return Err(LookupError::Status(status));
        }

        tracing::debug!("✅ Ghana Post GPS responded successfully");

        response.json().await.map_err(LookupError::InvalidBody)
    }
}
