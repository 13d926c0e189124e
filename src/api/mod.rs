//! Review backend API: data model, error taxonomy and HTTP gateway.

pub mod error;
pub mod gateway;
pub mod models;

pub use error::ReviewError;
pub use gateway::{BlockGateway, HttpBlockGateway};
pub use models::{
    Block, BlockId, EXPORT_FILE_STEM, ExportFormat, ExportRequest, ReviewStatus, ReviewUpdate,
};
