//! Tests for block models and their wire representation.

use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::json;

use super::*;

#[test]
fn block_deserialises_full_payload() {
    let payload = json!({
        "id": "blk-7",
        "type": "table",
        "content": "| a | b |",
        "page": 3,
        "review_status": "approved",
        "reviewer": "dana",
        "notes": "checked totals"
    });

    let block: Block = serde_json::from_value(payload).expect("payload should decode");

    assert_eq!(block.id, BlockId::new("blk-7"));
    assert_eq!(block.kind, "table");
    assert_eq!(block.page, Some(3));
    assert_eq!(block.status(), ReviewStatus::Approved);
    assert_eq!(block.reviewer.as_deref(), Some("dana"));
    assert_eq!(block.notes.as_deref(), Some("checked totals"));
}

#[test]
fn block_tolerates_missing_optional_fields_and_extras() {
    let payload = json!({
        "id": 42,
        "type": "paragraph",
        "content": "text",
        "review_status": null,
        "bbox": [0, 0, 10, 10]
    });

    let block: Block = serde_json::from_value(payload).expect("payload should decode");

    assert_eq!(block.id.as_str(), "42");
    assert!(block.page.is_none());
    assert!(block.review_status.is_none());
    assert_eq!(block.status(), ReviewStatus::Pending);
    assert_eq!(block.page_label(), "Unknown");
}

#[rstest]
#[case::pending("pending", ReviewStatus::Pending)]
#[case::approved("approved", ReviewStatus::Approved)]
#[case::rejected("rejected", ReviewStatus::Rejected)]
#[case::unknown("needs_revision", ReviewStatus::Other("needs_revision".to_owned()))]
fn review_status_parses_wire_values(#[case] raw: &str, #[case] expected: ReviewStatus) {
    let status: ReviewStatus = serde_json::from_value(json!(raw)).expect("status should decode");
    assert_eq!(status, expected);
    assert_eq!(serde_json::to_value(&status).expect("encode"), json!(raw));
}

#[test]
fn empty_review_status_is_pending() {
    let block: Block = serde_json::from_value(json!({
        "id": "b-9",
        "type": "paragraph",
        "content": "text",
        "review_status": ""
    }))
    .expect("block should decode");

    assert_eq!(block.status(), ReviewStatus::Pending);
    assert_eq!(block.status().as_str(), "pending");
}

#[test]
fn review_status_cycles_through_choices() {
    let mut status = ReviewStatus::Pending;
    let mut seen = Vec::new();
    for _ in 0..3 {
        status = status.next();
        seen.push(status.clone());
    }
    assert_eq!(
        seen,
        vec![
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
            ReviewStatus::Pending
        ]
    );
    assert_eq!(ReviewStatus::Pending.previous(), ReviewStatus::Rejected);
    assert_eq!(
        ReviewStatus::Other("legacy".to_owned()).next(),
        ReviewStatus::Pending
    );
}

#[test]
fn review_update_uses_sortable_utc_timestamp() {
    let at = Utc
        .with_ymd_and_hms(2026, 10, 19, 8, 30, 0)
        .single()
        .expect("valid timestamp");

    let update = ReviewUpdate::stamped(ReviewStatus::Approved, "dana", "", at);

    assert_eq!(update.updated_at, "2026-10-19T08:30:00.000Z");
    assert_eq!(
        serde_json::to_value(&update).expect("encode"),
        json!({
            "review_status": "approved",
            "reviewer": "dana",
            "notes": "",
            "updated_at": "2026-10-19T08:30:00.000Z"
        })
    );
}

#[test]
fn apply_review_overwrites_review_fields_only() {
    let mut block: Block = serde_json::from_value(json!({
        "id": "b1", "type": "title", "content": "Intro", "page": 1
    }))
    .expect("payload should decode");
    let update = ReviewUpdate {
        review_status: ReviewStatus::Rejected,
        reviewer: "eli".to_owned(),
        notes: "duplicate".to_owned(),
        updated_at: "2026-10-19T08:30:00.000Z".to_owned(),
    };

    block.apply_review(&update);

    assert_eq!(block.review_status, Some(ReviewStatus::Rejected));
    assert_eq!(block.reviewer.as_deref(), Some("eli"));
    assert_eq!(block.notes.as_deref(), Some("duplicate"));
    assert_eq!(block.content, "Intro");
    assert_eq!(block.page, Some(1));
}

#[rstest]
#[case::json("json", ExportFormat::Json)]
#[case::text("TEXT", ExportFormat::Text)]
#[case::markdown(" markdown ", ExportFormat::Markdown)]
#[case::csv("csv", ExportFormat::Csv)]
fn export_format_parses_case_insensitively(#[case] raw: &str, #[case] expected: ExportFormat) {
    assert_eq!(raw.parse::<ExportFormat>(), Ok(expected));
}

#[test]
fn export_format_rejects_unknown_tokens() {
    assert_eq!(
        "pdf".parse::<ExportFormat>(),
        Err(ReviewError::UnsupportedExportFormat {
            format: "pdf".to_owned()
        })
    );
}

#[test]
fn export_format_names_download_after_wire_token() {
    assert_eq!(ExportFormat::Csv.file_name(), "approved_content.csv");
    assert_eq!(ExportFormat::Markdown.file_name(), "approved_content.markdown");
    assert_eq!(
        serde_json::to_value(ExportRequest {
            format: ExportFormat::Text
        })
        .expect("encode"),
        json!({"format": "text"})
    );
}

#[test]
fn export_format_cycles_through_all_formats() {
    let visited: Vec<_> = ExportFormat::ALL.iter().map(|format| format.next()).collect();
    assert_eq!(
        visited,
        vec![
            ExportFormat::Text,
            ExportFormat::Markdown,
            ExportFormat::Csv,
            ExportFormat::Json
        ]
    );
}
