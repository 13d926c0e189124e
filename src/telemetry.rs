//! Application telemetry events and sinks.
//!
//! The review client is local-first; telemetry here is a structured record of
//! completed backend operations, useful for debugging slow or failing
//! backends. Nothing is transmitted anywhere.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the review client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The block collection was loaded from the backend.
    BlocksLoaded {
        /// Number of blocks returned.
        count: usize,
        /// Round-trip time of the request in milliseconds.
        latency_ms: u64,
    },
    /// A review update was confirmed by the backend.
    ReviewSaved {
        /// Identifier of the reviewed block.
        block_id: String,
        /// Status that was saved.
        review_status: String,
    },
    /// Approved content was exported and delivered.
    ContentExported {
        /// Export format token.
        format: String,
        /// Size of the delivered body in bytes.
        bytes: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync + std::fmt::Debug {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Only suitable for the headless modes; the TUI owns the terminal.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Telemetry sink that forwards events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        if let Ok(serialised) = serde_json::to_string(&event) {
            tracing::debug!(target: "docquest_review::telemetry", "{serialised}");
        }
    }
}

/// Test helpers for capturing telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingTelemetrySink;
    use super::{TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::BlocksLoaded {
            count: 3,
            latency_ms: 12,
        });

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::BlocksLoaded {
                count: 3,
                latency_ms: 12,
            }]
        );
    }

    #[test]
    fn events_serialise_with_snake_case_tag() {
        let event = TelemetryEvent::ContentExported {
            format: "csv".to_owned(),
            bytes: 20,
        };

        let json = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(
            json,
            serde_json::json!({"type": "content_exported", "format": "csv", "bytes": 20})
        );
    }
}
