//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for kb-migrate using clap.

use crate::adapters::kb::KbClient;
use crate::core::loader::load_games;
use crate::core::runner::MigrationRunner;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// kb-migrate - Migrate game metadata records to an MCP knowledge base
#[derive(Parser, Debug)]
#[command(name = "kb-migrate")]
#[command(version, about, long_about = None)]
#[command(author = "kb-migrate Contributors")]
pub struct Cli {
    /// Path to the input JSON file (an array of game records)
    pub file: PathBuf,

    /// Knowledge base endpoint to POST articles to
    #[arg(
        long,
        default_value = "http://localhost:3000/articles",
        env = "KB_MIGRATE_URL"
    )]
    pub url: Url,

    /// Treat HTTP 409 responses as skipped duplicates instead of failures
    #[arg(long)]
    pub skip_duplicates: bool,

    /// Transform and validate records without sending anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "KB_MIGRATE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Execute the migration
    ///
    /// Always resolves to exit code 0 once the driver runs to completion;
    /// partial failures surface through log lines and the printed summary,
    /// not the exit code.
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(
            file = %self.file.display(),
            url = %self.url,
            skip_duplicates = self.skip_duplicates,
            dry_run = self.dry_run,
            "Starting migration"
        );

        let games = load_games(&self.file);
        if games.is_empty() {
            tracing::error!(path = %self.file.display(), "No games loaded");
            return Ok(0);
        }

        if self.dry_run {
            tracing::info!("Dry run mode enabled - no articles will be sent");
            println!("DRY RUN MODE - No articles will be sent to the knowledge base");
            println!();
        }

        let client = KbClient::new(self.url.clone(), self.skip_duplicates);
        let runner = MigrationRunner::new(client, self.dry_run);
        let summary = runner.run(&games).await;

        println!();
        println!("Migration Summary:");
        println!("  Total Records: {}", summary.total);
        println!("  Sent: {}", summary.sent);
        println!("  Conversion Failures: {}", summary.conversion_failures);
        println!("  Validation Rejections: {}", summary.validation_rejections);
        println!("  Duplicates Skipped: {}", summary.duplicates_skipped);
        println!("  Publish Failures: {}", summary.publish_failures);
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["kb-migrate", "games.json"]);
        assert_eq!(cli.file, PathBuf::from("games.json"));
        assert_eq!(cli.url.as_str(), "http://localhost:3000/articles");
        assert!(!cli.skip_duplicates);
        assert!(!cli.dry_run);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_cli_parse_with_url() {
        let cli = Cli::parse_from(["kb-migrate", "games.json", "--url", "http://kb:9000/articles"]);
        assert_eq!(cli.url.as_str(), "http://kb:9000/articles");
    }

    #[test]
    fn test_cli_parse_with_flags() {
        let cli = Cli::parse_from(["kb-migrate", "games.json", "--skip-duplicates", "--dry-run"]);
        assert!(cli.skip_duplicates);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["kb-migrate", "games.json", "--log-level", "debug"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["kb-migrate"]).is_err());
    }

    #[test]
    fn test_cli_rejects_invalid_url() {
        assert!(Cli::try_parse_from(["kb-migrate", "games.json", "--url", "not a url"]).is_err());
    }
}
