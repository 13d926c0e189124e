//! Headless mode printing the block cards.

use std::io::{self, Write};
use std::sync::Arc;

use docquest_review::telemetry::StderrJsonlTelemetrySink;
use docquest_review::{BlockCard, ReviewConfig, ReviewError};

use super::build_headless;

/// Loads the blocks and prints one card per line to stdout.
///
/// # Errors
///
/// Returns the load failure or [`ReviewError::Io`] when stdout is closed.
pub async fn run(config: &ReviewConfig) -> Result<(), ReviewError> {
    let mut dashboard = build_headless(config, Arc::new(StderrJsonlTelemetrySink))?;
    dashboard.load_blocks().await?;
    write_cards(&mut io::stdout().lock(), &dashboard.render_blocks())
}

/// Writes cards as `[status] type id: preview` lines, then a count.
///
/// # Errors
///
/// Returns [`ReviewError::Io`] when writing fails.
pub fn write_cards(out: &mut impl Write, cards: &[BlockCard]) -> Result<(), ReviewError> {
    let io_error = |error: io::Error| ReviewError::Io {
        message: error.to_string(),
    };
    for card in cards {
        let preview = card.preview.split_whitespace().collect::<Vec<_>>().join(" ");
        writeln!(
            out,
            "[{}] {} {}: {preview}",
            card.status_badge(),
            card.kind,
            card.block_id
        )
        .map_err(io_error)?;
    }
    writeln!(out, "{} block(s)", cards.len()).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use docquest_review::api::models::test_support::{minimal_block, reviewed_block};
    use docquest_review::dashboard::project_cards;
    use docquest_review::ReviewStatus;

    use super::write_cards;

    #[test]
    fn cards_are_written_in_order() {
        let cards = project_cards(&[
            minimal_block("t-1", "title", "Results"),
            reviewed_block("p-2", ReviewStatus::Rejected, "ana", "wrong"),
        ]);
        let mut out = Vec::new();

        write_cards(&mut out, &cards).expect("writing to a Vec succeeds");

        assert_eq!(
            String::from_utf8(out).expect("output is UTF-8"),
            "[pending] title t-1: Results\n[rejected] paragraph p-2: Content of p-2\n2 block(s)\n"
        );
    }
}
