//! Review client for extracted document blocks.
//!
//! The library talks to a review backend over REST: it loads the block
//! collection, projects it into summary cards, edits and saves one block's
//! review status, reviewer and notes, and downloads exports of approved
//! content as `approved_content.<format>`.
//!
//! The [`dashboard`] module holds the framework-independent core; [`tui`]
//! is the interactive terminal front end over it.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod download;
pub mod logging;
pub mod telemetry;
pub mod tui;

pub use api::{
    Block, BlockGateway, BlockId, ExportFormat, HttpBlockGateway, ReviewError, ReviewStatus,
    ReviewUpdate,
};
pub use config::{OperationMode, ReviewConfig};
pub use dashboard::{Action, BlockCard, DashboardState, Effect, EffectRunner, ReviewDashboard};
pub use download::{DirectoryDownloads, DownloadSink};
