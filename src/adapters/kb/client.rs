//! Knowledge base HTTP client
//!
//! Performs one synchronous (awaited) JSON POST per article against the
//! configured knowledge base endpoint and interprets the response status.
//! No retry, no backoff, no timeout override beyond transport defaults.

use crate::domain::Article;
use reqwest::{Client, StatusCode};
use url::Url;

/// Outcome of a single publish attempt
///
/// [`PublishOutcome::Accepted`] is the only outcome that counts toward the
/// migration's success total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Server returned 200 or 201
    Accepted,

    /// Server returned 409 and duplicate-skipping is enabled
    DuplicateSkipped,

    /// Server returned any other status
    Rejected { status: u16 },

    /// The request never produced a response
    TransportError,
}

impl PublishOutcome {
    /// Whether the article was accepted by the server
    pub fn is_accepted(&self) -> bool {
        matches!(self, PublishOutcome::Accepted)
    }
}

/// HTTP client for the knowledge base articles endpoint
pub struct KbClient {
    client: Client,
    endpoint: Url,
    skip_duplicates: bool,
}

impl KbClient {
    /// Create a new client for the given articles endpoint
    ///
    /// When `skip_duplicates` is set, an HTTP 409 response is logged as an
    /// informational skip instead of an error.
    pub fn new(endpoint: Url, skip_duplicates: bool) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            skip_duplicates,
        }
    }

    /// The configured articles endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Publish one article with a single JSON POST
    ///
    /// Never returns an error: every failure mode is logged here and folded
    /// into the returned [`PublishOutcome`], keeping publish failures
    /// isolated per record.
    pub async fn publish(&self, article: &Article) -> PublishOutcome {
        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(article)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    article_id = %article.id,
                    error = %e,
                    "Error sending article"
                );
                return PublishOutcome::TransportError;
            }
        };

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => PublishOutcome::Accepted,
            StatusCode::CONFLICT if self.skip_duplicates => {
                tracing::info!(article_id = %article.id, "Duplicate article skipped");
                PublishOutcome::DuplicateSkipped
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::error!(
                    article_id = %article.id,
                    status = status.as_u16(),
                    body = %body,
                    "Failed to send article"
                );
                PublishOutcome::Rejected {
                    status: status.as_u16(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accepted() {
        assert!(PublishOutcome::Accepted.is_accepted());
        assert!(!PublishOutcome::DuplicateSkipped.is_accepted());
        assert!(!PublishOutcome::Rejected { status: 500 }.is_accepted());
        assert!(!PublishOutcome::TransportError.is_accepted());
    }

    #[test]
    fn test_client_stores_endpoint() {
        let endpoint = Url::parse("http://localhost:3000/articles").unwrap();
        let client = KbClient::new(endpoint.clone(), false);
        assert_eq!(client.endpoint(), &endpoint);
    }
}
