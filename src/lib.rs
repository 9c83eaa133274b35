//! # comic-export
//!
//! Fetches the comic catalog of a named character from a public comics
//! gateway and appends normalized records to a local CSV file.
//!
//! The pipeline is a single sequential pass: resolve the character name to
//! its catalog id, walk the comics collection page by page, flatten each
//! record to a CSV row, and persist every page before fetching the next.
//!
//! ## Quick Start
//!
//! ```no_run
//! use comic_export::{Config, Credentials, Exporter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::from_env()?;
//!     let exporter = Exporter::new(Config::default(), credentials)?;
//!     exporter.run("Thor").await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Request signing
pub mod auth;
/// Catalog gateway HTTP client
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Pagination loop and run orchestration
pub mod export;
/// Retry logic with exponential backoff
pub mod retry;
/// Row persistence (CSV appender and in-memory sink)
pub mod sink;
/// Raw-record normalization
pub mod transform;

// Re-export commonly used types
pub use auth::{AuthToken, Signer};
pub use client::{CatalogClient, CharacterId, ComicDate, ComicsPage, RawComic, Thumbnail};
pub use config::{Config, Credentials, RetryConfig};
pub use error::{Error, Result};
pub use export::Exporter;
pub use sink::{CsvSink, MemorySink, RowSink};
pub use transform::{ComicRow, PublicationYear};
