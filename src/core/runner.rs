//! Migration driver
//!
//! Iterates the loaded records in file order, transforming, validating and
//! publishing one record at a time. Every failure category is isolated to
//! its record; nothing aborts the run once it has started. There is no
//! progress persistence, so re-running reprocesses everything from the start.

use crate::adapters::kb::{KbClient, PublishOutcome};
use crate::core::transform;
use serde_json::Value;
use std::collections::HashSet;

/// Summary of a migration run
#[derive(Debug, Clone, Default)]
pub struct MigrationSummary {
    /// Total number of records loaded from the input file
    pub total: usize,

    /// Number of articles accepted by the server
    pub sent: usize,

    /// Records that could not be converted into articles
    pub conversion_failures: usize,

    /// Articles rejected by pre-publish validation
    pub validation_rejections: usize,

    /// Duplicates skipped via HTTP 409
    pub duplicates_skipped: usize,

    /// Publish attempts that failed (HTTP error or transport error)
    pub publish_failures: usize,
}

impl MigrationSummary {
    /// Create a new empty summary for `total` records
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.sent as f64 / self.total as f64 * 100.0
    }
}

/// Drives the per-record transform/validate/publish loop
pub struct MigrationRunner {
    client: KbClient,
    dry_run: bool,
}

impl MigrationRunner {
    /// Create a new runner
    ///
    /// In dry-run mode records are transformed and validated but nothing is
    /// sent to the server.
    pub fn new(client: KbClient, dry_run: bool) -> Self {
        Self { client, dry_run }
    }

    /// Process all records in file order and return the run summary
    ///
    /// Per record: transform (conversion errors are logged and skipped),
    /// validate (warn and skip on empty title or short content), publish,
    /// then log progress as `<processed>/<total>` regardless of outcome.
    pub async fn run(&self, records: &[Value]) -> MigrationSummary {
        let total = records.len();
        let mut summary = MigrationSummary::new(total);

        warn_on_duplicate_ids(records);

        for (index, record) in records.iter().enumerate() {
            let processed = index + 1;

            match transform::to_article(record) {
                Err(e) => {
                    tracing::error!(
                        record = %record,
                        error = %e,
                        "Failed to convert record"
                    );
                    summary.conversion_failures += 1;
                }
                Ok(article) => {
                    if !article.is_publishable() {
                        tracing::warn!(
                            article_id = %article.id,
                            "Skipping article with empty title or short content"
                        );
                        summary.validation_rejections += 1;
                    } else if self.dry_run {
                        tracing::info!(
                            article_id = %article.id,
                            title = %article.title,
                            "Dry run, article not sent"
                        );
                    } else {
                        match self.client.publish(&article).await {
                            PublishOutcome::Accepted => summary.sent += 1,
                            PublishOutcome::DuplicateSkipped => summary.duplicates_skipped += 1,
                            PublishOutcome::Rejected { .. } | PublishOutcome::TransportError => {
                                summary.publish_failures += 1
                            }
                        }
                    }
                }
            }

            tracing::info!(processed, total, "Processed {}/{}", processed, total);
        }

        tracing::info!(
            sent = summary.sent,
            total,
            "Migration complete: {}/{} articles sent",
            summary.sent,
            total
        );

        summary
    }
}

/// Warn when distinct records derive the same article id
///
/// Informational only. The server is the authority on duplicates (via 409),
/// but colliding ids inside one input file usually mean the sanitization
/// collapsed two different games.
fn warn_on_duplicate_ids(records: &[Value]) {
    let (total, unique) = count_derived_ids(records);

    if unique < total {
        tracing::warn!(total, unique, "Duplicate article ids across input records");
    }
}

/// Count derived article ids across all convertible records
///
/// Returns `(total, unique)`. Empty ids are excluded: records whose provider
/// and name are both blank all sanitize to an empty id, and validation
/// rejects those articles before they ever reach the server.
fn count_derived_ids(records: &[Value]) -> (usize, usize) {
    let ids: Vec<String> = records
        .iter()
        .filter_map(|record| transform::to_article(record).ok())
        .map(|article| article.id)
        .filter(|id| !id.is_empty())
        .collect();
    let unique: HashSet<&String> = ids.iter().collect();

    (ids.len(), unique.len())
}
