//! Executes dashboard effects against the backend and download sink.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::api::{BlockGateway, BlockId, ExportFormat, ReviewUpdate};
use crate::download::DownloadSink;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::action::{Action, Effect};

/// Performs [`Effect`]s and turns each outcome into a follow-up [`Action`].
///
/// The runner is cheap to clone so the TUI can move a copy into every
/// background command.
#[derive(Clone)]
pub struct EffectRunner {
    gateway: Arc<dyn BlockGateway>,
    downloads: Arc<dyn DownloadSink>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for EffectRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRunner")
            .field("telemetry", &self.telemetry)
            .finish_non_exhaustive()
    }
}

impl EffectRunner {
    /// Creates a runner without telemetry.
    #[must_use]
    pub fn new(gateway: Arc<dyn BlockGateway>, downloads: Arc<dyn DownloadSink>) -> Self {
        Self {
            gateway,
            downloads,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Performs `effect` and returns the action describing its outcome.
    pub async fn run(&self, effect: Effect) -> Action {
        match effect {
            Effect::LoadBlocks => self.load_blocks().await,
            Effect::SaveReview { block_id, update } => self.save_review(block_id, update).await,
            Effect::RequestExport { format } => self.request_export(format).await,
            Effect::DeliverDownload {
                format,
                file_name,
                contents,
            } => self.deliver(format, &file_name, &contents),
        }
    }

    async fn load_blocks(&self) -> Action {
        let started = Instant::now();
        match self.gateway.list_blocks().await {
            Ok(blocks) => {
                let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                self.telemetry.record(TelemetryEvent::BlocksLoaded {
                    count: blocks.len(),
                    latency_ms,
                });
                Action::BlocksLoaded(blocks)
            }
            Err(error) => Action::LoadFailed(error),
        }
    }

    async fn save_review(&self, block_id: BlockId, update: ReviewUpdate) -> Action {
        match self.gateway.update_review(&block_id, &update).await {
            Ok(()) => {
                self.telemetry.record(TelemetryEvent::ReviewSaved {
                    block_id: block_id.to_string(),
                    review_status: update.review_status.to_string(),
                });
                Action::ReviewSaved { block_id, update }
            }
            Err(error) => Action::SaveFailed { block_id, error },
        }
    }

    async fn request_export(&self, format: ExportFormat) -> Action {
        match self.gateway.export_approved(format).await {
            Ok(body) => {
                debug!(format = %format, bytes = body.len(), "export received");
                Action::ExportReceived { format, body }
            }
            Err(error) => Action::ExportFailed(error),
        }
    }

    fn deliver(&self, format: ExportFormat, file_name: &str, contents: &str) -> Action {
        match self.downloads.deliver(file_name, contents) {
            Ok(path) => {
                self.telemetry.record(TelemetryEvent::ContentExported {
                    format: format.to_string(),
                    bytes: contents.len(),
                });
                Action::DownloadDelivered { format, path }
            }
            Err(error) => {
                warn!(file_name, error = %error, "download delivery failed");
                Action::ExportFailed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use mockall::predicate::eq;

    use super::*;
    use crate::api::gateway::MockBlockGateway;
    use crate::api::models::test_support::numbered_blocks;
    use crate::api::{ReviewError, ReviewStatus};
    use crate::download::MockDownloadSink;
    use crate::telemetry::test_support::RecordingTelemetrySink;

    fn runner(
        gateway: MockBlockGateway,
        downloads: MockDownloadSink,
    ) -> (EffectRunner, Arc<RecordingTelemetrySink>) {
        let telemetry = Arc::new(RecordingTelemetrySink::default());
        let runner = EffectRunner::new(Arc::new(gateway), Arc::new(downloads))
            .with_telemetry(telemetry.clone());
        (runner, telemetry)
    }

    #[tokio::test]
    async fn load_records_count() {
        let mut gateway = MockBlockGateway::new();
        gateway
            .expect_list_blocks()
            .times(1)
            .returning(|| Ok(numbered_blocks(4)));
        let (runner, telemetry) = runner(gateway, MockDownloadSink::new());

        let action = runner.run(Effect::LoadBlocks).await;

        assert_eq!(action, Action::BlocksLoaded(numbered_blocks(4)));
        assert!(matches!(
            telemetry.events().as_slice(),
            [TelemetryEvent::BlocksLoaded { count: 4, .. }]
        ));
    }

    #[tokio::test]
    async fn load_failure_becomes_load_failed() {
        let error = ReviewError::Network {
            message: "refused".to_owned(),
        };
        let returned = error.clone();
        let mut gateway = MockBlockGateway::new();
        gateway
            .expect_list_blocks()
            .returning(move || Err(returned.clone()));
        let (runner, telemetry) = runner(gateway, MockDownloadSink::new());

        assert_eq!(runner.run(Effect::LoadBlocks).await, Action::LoadFailed(error));
        assert!(telemetry.events().is_empty());
    }

    #[tokio::test]
    async fn save_passes_id_and_update() {
        let block_id = BlockId::new("b-7");
        let update = ReviewUpdate {
            review_status: ReviewStatus::Approved,
            reviewer: "ana".to_owned(),
            notes: String::new(),
            updated_at: "2026-10-19T08:30:00.000Z".to_owned(),
        };
        let mut gateway = MockBlockGateway::new();
        gateway
            .expect_update_review()
            .with(eq(block_id.clone()), eq(update.clone()))
            .times(1)
            .returning(|_, _| Ok(()));
        let (runner, telemetry) = runner(gateway, MockDownloadSink::new());

        let action = runner
            .run(Effect::SaveReview {
                block_id: block_id.clone(),
                update: update.clone(),
            })
            .await;

        assert_eq!(action, Action::ReviewSaved { block_id, update });
        assert_eq!(
            telemetry.events(),
            vec![TelemetryEvent::ReviewSaved {
                block_id: "b-7".to_owned(),
                review_status: "approved".to_owned(),
            }]
        );
    }

    #[tokio::test]
    async fn save_failure_carries_block_id() {
        let mut gateway = MockBlockGateway::new();
        gateway.expect_update_review().returning(|_, _| {
            Err(ReviewError::Backend {
                status: 404,
                message: "Block not found".to_owned(),
            })
        });
        let (runner, _) = runner(gateway, MockDownloadSink::new());

        let action = runner
            .run(Effect::SaveReview {
                block_id: BlockId::new("missing"),
                update: ReviewUpdate {
                    review_status: ReviewStatus::Rejected,
                    reviewer: String::new(),
                    notes: String::new(),
                    updated_at: "2026-10-19T08:30:00.000Z".to_owned(),
                },
            })
            .await;

        assert!(matches!(
            action,
            Action::SaveFailed { ref block_id, error: ReviewError::Backend { status: 404, .. } }
                if block_id.as_str() == "missing"
        ));
    }

    #[tokio::test]
    async fn export_returns_body() {
        let mut gateway = MockBlockGateway::new();
        gateway
            .expect_export_approved()
            .with(eq(ExportFormat::Markdown))
            .returning(|_| Ok("# Approved\n".to_owned()));
        let (runner, _) = runner(gateway, MockDownloadSink::new());

        let action = runner
            .run(Effect::RequestExport {
                format: ExportFormat::Markdown,
            })
            .await;

        assert_eq!(
            action,
            Action::ExportReceived {
                format: ExportFormat::Markdown,
                body: "# Approved\n".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn delivery_records_bytes() {
        let mut downloads = MockDownloadSink::new();
        downloads
            .expect_deliver()
            .with(eq("approved_content.csv"), eq("a,b\n"))
            .times(1)
            .returning(|name, _| Ok(Utf8PathBuf::from("/downloads").join(name)));
        let (runner, telemetry) = runner(MockBlockGateway::new(), downloads);

        let action = runner
            .run(Effect::DeliverDownload {
                format: ExportFormat::Csv,
                file_name: "approved_content.csv".to_owned(),
                contents: "a,b\n".to_owned(),
            })
            .await;

        assert_eq!(
            action,
            Action::DownloadDelivered {
                format: ExportFormat::Csv,
                path: Utf8PathBuf::from("/downloads/approved_content.csv"),
            }
        );
        assert_eq!(
            telemetry.events(),
            vec![TelemetryEvent::ContentExported {
                format: "csv".to_owned(),
                bytes: 4,
            }]
        );
    }

    #[tokio::test]
    async fn delivery_failure_becomes_export_failed() {
        let mut downloads = MockDownloadSink::new();
        downloads.expect_deliver().returning(|_, _| {
            Err(ReviewError::Io {
                message: "disk full".to_owned(),
            })
        });
        let (runner, telemetry) = runner(MockBlockGateway::new(), downloads);

        let action = runner
            .run(Effect::DeliverDownload {
                format: ExportFormat::Json,
                file_name: "approved_content.json".to_owned(),
                contents: "[]".to_owned(),
            })
            .await;

        assert!(matches!(action, Action::ExportFailed(ReviewError::Io { .. })));
        assert!(telemetry.events().is_empty());
    }
}
