//! Data models exchanged with the review backend.
//!
//! A [`Block`] is one extracted unit of document content plus its review
//! metadata. The backend owns every block; the client only caches copies and
//! requests updates through [`ReviewUpdate`] payloads.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::error::ReviewError;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Opaque, stable block identifier.
///
/// The backend may send identifiers as JSON strings or integers; both are
/// normalised to their string form so equality is by identity regardless of
/// the wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawBlockId", into = "String")]
pub struct BlockId(String);

impl BlockId {
    /// Creates an identifier from its string form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<BlockId> for String {
    fn from(value: BlockId) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBlockId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawBlockId> for BlockId {
    fn from(raw: RawBlockId) -> Self {
        match raw {
            RawBlockId::Text(text) => Self(text),
            RawBlockId::Number(number) => Self(number.to_string()),
        }
    }
}

/// Workflow state of a block's review.
///
/// The editor offers the three known states. Any other value sent by the
/// backend is kept verbatim in [`ReviewStatus::Other`] so it survives a
/// load without being rewritten. An empty string counts as pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReviewStatus {
    /// Not yet reviewed.
    #[default]
    Pending,
    /// Accepted for export.
    Approved,
    /// Rejected by the reviewer.
    Rejected,
    /// A status this client does not recognise.
    Other(String),
}

impl ReviewStatus {
    /// Statuses a reviewer can choose in the editor, in cycling order.
    pub const CHOICES: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Returns the next selectable status, wrapping around.
    ///
    /// Unrecognised statuses move to [`ReviewStatus::Pending`].
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Pending => Self::Approved,
            Self::Approved => Self::Rejected,
            Self::Rejected | Self::Other(_) => Self::Pending,
        }
    }

    /// Returns the previous selectable status, wrapping around.
    #[must_use]
    pub const fn previous(&self) -> Self {
        match self {
            Self::Pending => Self::Rejected,
            Self::Approved | Self::Other(_) => Self::Pending,
            Self::Rejected => Self::Approved,
        }
    }
}

impl From<String> for ReviewStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" | "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Other(value),
        }
    }
}

impl From<ReviewStatus> for String {
    fn from(value: ReviewStatus) -> Self {
        match value {
            ReviewStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted document block with its review metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Stable identifier assigned by the backend.
    pub id: BlockId,
    /// Classification tag such as `paragraph`, `table` or `title`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Full text payload.
    #[serde(default)]
    pub content: String,
    /// Page the block was extracted from, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Review status as last confirmed by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_status: Option<ReviewStatus>,
    /// Identifier of the reviewer who last reviewed the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    /// Reviewer commentary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Block {
    /// Returns the effective review status, treating a missing status as
    /// pending.
    #[must_use]
    pub fn status(&self) -> ReviewStatus {
        self.review_status.clone().unwrap_or_default()
    }

    /// Returns the page label shown in detail views.
    #[must_use]
    pub fn page_label(&self) -> String {
        self.page
            .map_or_else(|| "Unknown".to_owned(), |page| page.to_string())
    }

    /// Applies a backend-confirmed review update to this cached block.
    pub fn apply_review(&mut self, update: &ReviewUpdate) {
        self.review_status = Some(update.review_status.clone());
        self.reviewer = Some(update.reviewer.clone());
        self.notes = Some(update.notes.clone());
    }
}

/// Payload sent when saving a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewUpdate {
    /// Chosen review status.
    pub review_status: ReviewStatus,
    /// Reviewer identifier (may be empty).
    pub reviewer: String,
    /// Reviewer notes (may be empty).
    pub notes: String,
    /// Moment of the update as an RFC 3339 UTC timestamp.
    pub updated_at: String,
}

impl ReviewUpdate {
    /// Builds an update stamped with `updated_at`.
    ///
    /// The timestamp uses millisecond precision and a `Z` suffix so values
    /// sort lexically in chronological order.
    #[must_use]
    pub fn stamped(
        review_status: ReviewStatus,
        reviewer: impl Into<String>,
        notes: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            review_status,
            reviewer: reviewer.into(),
            notes: notes.into(),
            updated_at: updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Base name of every exported download.
pub const EXPORT_FILE_STEM: &str = "approved_content";

/// Export formats the backend can compile approved content into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON array of approved blocks.
    #[default]
    Json,
    /// Plain text, one block per paragraph.
    Text,
    /// Markdown with titles promoted to headings.
    Markdown,
    /// Comma-separated values.
    Csv,
}

impl ExportFormat {
    /// All supported formats in selection order.
    pub const ALL: [Self; 4] = [Self::Json, Self::Text, Self::Markdown, Self::Csv];

    /// Returns the wire token, which doubles as the file extension.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Csv => "csv",
        }
    }

    /// Returns the download file name for this format.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{EXPORT_FILE_STEM}.{}", self.as_str())
    }

    /// Returns the next format in selection order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Json => Self::Text,
            Self::Text => Self::Markdown,
            Self::Markdown => Self::Csv,
            Self::Csv => Self::Json,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "markdown" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            _ => Err(ReviewError::UnsupportedExportFormat {
                format: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an export request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    /// Format the backend should produce.
    pub format: ExportFormat,
}

#[cfg(test)]
mod tests;
