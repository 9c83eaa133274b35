//! Row persistence: the sink trait and the CSV appender.
//!
//! The export loop hands each fetched page to a [`RowSink`] before the next
//! page is requested, so partial progress is durable and memory stays
//! bounded to one page. The pagination logic stays independently testable
//! against [`MemorySink`].

use crate::error::Result;
use crate::transform::ComicRow;
use std::path::{Path, PathBuf};

/// Column titles written once per fresh output file
const HEADERS: [&str; 3] = ["Title", "Publication Year", "Cover URL"];

/// Destination for transformed rows.
///
/// Each call persists one page and is independent of the others — no rows
/// are buffered across calls.
pub trait RowSink {
    /// Persist one page of rows
    ///
    /// # Errors
    /// Returns error if the rows could not be written.
    fn write(&mut self, rows: &[ComicRow]) -> Result<()>;
}

/// Appends rows to a CSV file, writing the header only when creating it.
///
/// The file is opened in append mode on every call and flushed before the
/// call returns, so a crash after one page still leaves prior pages on
/// disk. Re-running the export appends after existing content.
#[derive(Debug)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Create a sink targeting the given path (the file is created lazily)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The output path this sink appends to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSink for CsvSink {
    fn write(&mut self, rows: &[ComicRow]) -> Result<()> {
        // Existence check decides whether this call owns the header line
        let fresh = !self.path.exists();

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if fresh {
            writer.write_record(HEADERS)?;
        }
        for row in rows {
            let year = row.year.to_string();
            writer.write_record([row.title.as_str(), year.as_str(), row.cover_url.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// In-memory sink collecting pages for inspection in tests and dry runs
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Pages in arrival order, one inner `Vec` per `write` call
    pub pages: Vec<Vec<ComicRow>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows across all pages
    pub fn row_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }
}

impl RowSink for MemorySink {
    fn write(&mut self, rows: &[ComicRow]) -> Result<()> {
        self.pages.push(rows.to_vec());
        Ok(())
    }
}
