//! Article document model
//!
//! The article is the normalized output document sent to the knowledge base.
//! Articles are immutable once constructed; nothing is stored or mutated
//! after sending.

use serde::Serialize;

/// Fixed author literal marking articles as automated imports
pub const ARTICLE_AUTHOR: &str = "auto_scraper";

/// Minimum content length accepted by the pre-publish validation
///
/// A heuristic guard against degenerate synthesized content, not a semantic
/// check. A record with all fields blank renders below this threshold.
pub const MIN_CONTENT_LEN: usize = 50;

/// Normalized knowledge base article
///
/// Field shape matches what the knowledge base server validates on ingest:
/// `id` must be non-empty `[a-z0-9_-]`, `createdAt` is a passthrough of the
/// source record's last-update field (empty when absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Sanitized concatenation of provider and game name
    pub id: String,

    /// `"<NAME> dari <provider>"` display title
    pub title: String,

    /// Synthesized description embedding RTP, jam gacor and the pattern list
    pub content: String,

    /// Provider followed by up to the first two pattern entries
    pub tags: Vec<String>,

    /// Provider name, unmodified
    pub category: String,

    /// Last-update passthrough from the source record
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// Always [`ARTICLE_AUTHOR`]
    pub author: String,
}

impl Article {
    /// Whether this article passes the pre-publish validation
    ///
    /// Rejects articles with an empty title or with synthesized content
    /// shorter than [`MIN_CONTENT_LEN`] characters.
    pub fn is_publishable(&self) -> bool {
        !self.title.is_empty() && self.content.chars().count() >= MIN_CONTENT_LEN
    }
}
