// kb-migrate - Game metadata to knowledge base migration tool
// Copyright (c) 2025 kb-migrate Contributors
// Licensed under the MIT License

//! # kb-migrate
//!
//! kb-migrate is a command-line tool that migrates game-metadata records from
//! a JSON file into an MCP knowledge base over HTTP.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Loading** a JSON array of raw game records from disk
//! - **Transforming** each record into a normalized [`domain::Article`]
//! - **Publishing** each article with a single JSON POST per record
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (loader, transform, migration runner)
//! - [`adapters`] - Knowledge base HTTP client
//! - [`domain`] - Core domain types and errors
//! - [`logging`] - Logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kb_migrate::adapters::kb::KbClient;
//! use kb_migrate::core::loader::load_games;
//! use kb_migrate::core::runner::MigrationRunner;
//! use std::path::Path;
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let games = load_games(Path::new("all_games_global.json"));
//!
//!     let endpoint = Url::parse("http://localhost:3000/articles")?;
//!     let client = KbClient::new(endpoint, true);
//!     let runner = MigrationRunner::new(client, false);
//!
//!     let summary = runner.run(&games).await;
//!     println!("Sent {}/{} articles", summary.sent, summary.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`] with the [`domain::MigrateError`]
//! type; per-record failures are logged and skipped rather than aborting the run.
//!
//! ## Logging
//!
//! kb-migrate uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting migration");
//! warn!(article_id = "pragmaticzeus", "Skipping invalid article");
//! error!(status = 500, "Publish failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod core;
pub mod domain;
pub mod logging;
