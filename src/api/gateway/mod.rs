//! Gateways for talking to the review backend.
//!
//! The trait-based design lets the dashboard core and its tests run against a
//! mock while [`HttpBlockGateway`] performs real HTTP requests.

mod http;

pub use http::HttpBlockGateway;

use async_trait::async_trait;

use super::error::ReviewError;
use super::models::{Block, BlockId, ExportFormat, ReviewUpdate};

/// Backend operations the review dashboard depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockGateway: Send + Sync {
    /// Fetch the full block collection (`GET /api/blocks`).
    async fn list_blocks(&self) -> Result<Vec<Block>, ReviewError>;

    /// Persist a review update for one block (`PUT /api/blocks/{id}`).
    async fn update_review(&self, id: &BlockId, update: &ReviewUpdate)
    -> Result<(), ReviewError>;

    /// Compile approved content in `format` (`POST /api/export`).
    ///
    /// The response body is returned untouched.
    async fn export_approved(&self, format: ExportFormat) -> Result<String, ReviewError>;
}
