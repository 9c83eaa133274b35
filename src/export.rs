//! The export pipeline: character resolution, pagination, and persistence.
//!
//! A single sequential pass: resolve the character name, then walk the
//! comics collection page by page in increasing offset order, handing each
//! transformed page to the sink before requesting the next one.

use crate::client::{CatalogClient, CharacterId};
use crate::config::{Config, Credentials};
use crate::error::{Error, Result};
use crate::retry::fetch_with_retry;
use crate::sink::{CsvSink, RowSink};
use crate::transform::ComicRow;
use tracing::{debug, info, warn};

/// Drives the resolve → paginate → transform → persist pipeline
#[derive(Debug)]
pub struct Exporter {
    client: CatalogClient,
    config: Config,
}

impl Exporter {
    /// Create an exporter from configuration and credentials
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: Config, credentials: Credentials) -> Result<Self> {
        let client = CatalogClient::new(&config, credentials)?;
        Ok(Self { client, config })
    }

    /// Run the full export for one character name
    ///
    /// Resolution failure is fatal: nothing is written and the error is
    /// returned so the caller can report the abort. On success the rows
    /// land in the configured CSV file.
    ///
    /// # Errors
    /// Returns [`Error::CharacterNotFound`] when the name resolves to
    /// nothing, or the underlying error when resolution or a page fetch
    /// (after retries) fails.
    pub async fn run(&self, character_name: &str) -> Result<()> {
        let id = self
            .client
            .resolve_character(character_name)
            .await?
            .ok_or_else(|| Error::CharacterNotFound(character_name.to_string()))?;

        info!(character = character_name, %id, "resolved character");

        let mut sink = CsvSink::new(&self.config.output_path);
        self.export_comics(id, &mut sink).await
    }

    /// Walk the comics collection for a character and persist every page
    ///
    /// The cursor starts with an unknown total, forcing at least one fetch;
    /// after each successful page the offset advances by the page limit
    /// until it reaches the reported total. Each page fetch is retried with
    /// bounded backoff; an exhausted budget aborts the run. Sink failures
    /// are logged and skipped so later pages still get a chance to land.
    ///
    /// # Errors
    /// Returns error when a page fetch fails past the retry budget.
    pub async fn export_comics(&self, character: CharacterId, sink: &mut dyn RowSink) -> Result<()> {
        let limit = self.config.page_limit;
        let mut offset: u32 = 0;
        let mut total: u32 = 0;
        let mut written: usize = 0;

        // total starts at zero (unknown), so the first iteration always runs
        while offset < total || offset == 0 {
            let page = fetch_with_retry(&self.config.retry, || {
                self.client.fetch_comics_page(character, offset, limit)
            })
            .await?;

            total = page.total;
            let rows: Vec<ComicRow> = page.results.into_iter().map(ComicRow::from_raw).collect();
            debug!(offset, count = rows.len(), total, "fetched comics page");

            // Persist before fetching the next page: bounds memory to one
            // page and makes partial progress durable.
            match sink.write(&rows) {
                Ok(()) => written += rows.len(),
                Err(e) => warn!(error = %e, offset, "failed to persist page, rows lost"),
            }

            offset += limit;
        }

        info!(rows = written, total, %character, "export complete");
        Ok(())
    }
}
