//! reqwest-backed implementation of [`BlockGateway`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use crate::api::error::ReviewError;
use crate::api::models::{Block, BlockId, ExportFormat, ExportRequest, ReviewUpdate};

use super::BlockGateway;

const MAX_ERROR_BODY_CHARS: usize = 160;

/// Gateway that calls the review backend's REST API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBlockGateway {
    client: Client,
    base_url: Url,
}

impl HttpBlockGateway {
    /// Creates a gateway rooted at `base_url`.
    ///
    /// Endpoint paths are appended to any path the base URL already carries,
    /// so `http://host/review/` targets `http://host/review/api/blocks`.
    /// When `timeout` is `None` requests wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the base URL cannot carry
    /// path segments or the HTTP client cannot be built.
    pub fn new(base_url: &Url, timeout: Option<Duration>) -> Result<Self, ReviewError> {
        if base_url.cannot_be_a_base() {
            return Err(ReviewError::Configuration {
                message: format!("API URL '{base_url}' cannot be used as a base URL"),
            });
        }

        let builder = Client::builder();
        let builder = match timeout {
            Some(duration) => builder.timeout(duration),
            None => builder,
        };
        let client = builder.build().map_err(|error| ReviewError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })?;

        Ok(Self {
            client,
            base_url: base_url.clone(),
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ReviewError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ReviewError::Configuration {
                message: format!("API URL '{}' cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl BlockGateway for HttpBlockGateway {
    async fn list_blocks(&self) -> Result<Vec<Block>, ReviewError> {
        let url = self.endpoint(&["api", "blocks"])?;
        tracing::debug!("loading blocks from {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error("loading blocks", &error))?;
        let response = ensure_success(response, "loading blocks").await?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|error| map_transport_error("reading block list", &error))?;
        serde_json::from_str(&body).map_err(|error| ReviewError::Backend {
            status,
            message: format!("block list JSON decoding failed: {error}"),
        })
    }

    async fn update_review(
        &self,
        id: &BlockId,
        update: &ReviewUpdate,
    ) -> Result<(), ReviewError> {
        let url = self.endpoint(&["api", "blocks", id.as_str()])?;
        tracing::debug!("saving review for block {id} to {url}");

        let response = self
            .client
            .put(url)
            .json(update)
            .send()
            .await
            .map_err(|error| map_transport_error("saving review", &error))?;
        ensure_success(response, "saving review").await?;
        Ok(())
    }

    async fn export_approved(&self, format: ExportFormat) -> Result<String, ReviewError> {
        let url = self.endpoint(&["api", "export"])?;
        tracing::debug!("requesting {format} export from {url}");

        let response = self
            .client
            .post(url)
            .json(&ExportRequest { format })
            .send()
            .await
            .map_err(|error| map_transport_error("exporting content", &error))?;
        let response = ensure_success(response, "exporting content").await?;

        response
            .text()
            .await
            .map_err(|error| map_transport_error("reading export body", &error))
    }
}

fn map_transport_error(operation: &str, error: &reqwest::Error) -> ReviewError {
    let detail = if error.is_timeout() {
        "request timed out".to_owned()
    } else {
        error.to_string()
    };
    ReviewError::Network {
        message: format!("{operation} failed: {detail}"),
    }
}

async fn ensure_success(response: Response, operation: &str) -> Result<Response, ReviewError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.map_or_else(
        |_| "(failed to read error response body)".to_owned(),
        |content| truncate_for_message(content.trim(), MAX_ERROR_BODY_CHARS),
    );
    Err(ReviewError::Backend {
        status: status.as_u16(),
        message: format!("{operation} failed: {body}"),
    })
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
