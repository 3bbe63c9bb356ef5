use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{AppMode, SiteConfig};
use crate::types::{FormFields, RelayReply};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("request did not complete: {0}")]
    Transport(String),
    #[error("response body could not be read: {0}")]
    Decode(String),
}

/// How a submission ended, from the form's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Sent(RelayReply),
    Rejected(RelayReply),
    Broken(RelayError),
}

impl From<Result<RelayReply, RelayError>> for Delivery {
    fn from(result: Result<RelayReply, RelayError>) -> Self {
        match result {
            Ok(reply) if reply.is_accepted() => Delivery::Sent(reply),
            Ok(reply) => Delivery::Rejected(reply),
            Err(err) => Delivery::Broken(err),
        }
    }
}

/// Field names with value lengths; values never reach the logs.
fn fields_label(fields: &FormFields) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{name}(len={})", value.len()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Forwards a contact form to the third-party relay.
///
/// Futures are not `Send`: the browser build runs on a single thread and
/// fetch-backed responses cannot cross threads.
#[async_trait(?Send)]
pub trait FormRelay {
    async fn submit(&self, fields: &FormFields) -> Result<RelayReply, RelayError>;
}

/// HTTP relay (production)
pub struct HttpFormRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl FormRelay for HttpFormRelay {
    async fn submit(&self, fields: &FormFields) -> Result<RelayReply, RelayError> {
        debug!(
            "relay.http.submit: endpoint={} fields=[{}]",
            self.endpoint,
            fields_label(fields)
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(fields)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RelayError::Decode(e.to_string()))?;

        debug!("relay.http.submit: status={status}");
        Ok(RelayReply { status, body })
    }
}

/// Console relay (local development): logs the payload and reports success.
pub struct ConsoleFormRelay;

#[async_trait(?Send)]
impl FormRelay for ConsoleFormRelay {
    async fn submit(&self, fields: &FormFields) -> Result<RelayReply, RelayError> {
        info!(
            "relay.console.submit (local mode, not sent): {}",
            fields.to_json()
        );
        Ok(RelayReply {
            status: 200,
            body: json!({ "success": true, "message": "Email sent successfully!" }),
        })
    }
}

/// Pick the relay implementation for the configured mode.
pub fn relay_from_config(config: &SiteConfig) -> Arc<dyn FormRelay> {
    match config.mode {
        AppMode::Local => {
            info!("relay: console (local mode)");
            Arc::new(ConsoleFormRelay)
        }
        AppMode::Production => {
            info!("relay: http ({})", config.relay_endpoint);
            Arc::new(HttpFormRelay::new(config.relay_endpoint.clone()))
        }
    }
}
