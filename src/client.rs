//! HTTP client for the comics catalog gateway.
//!
//! Wraps a single `reqwest::Client` and signs every request with a fresh
//! [`AuthToken`](crate::auth::AuthToken). Two read-only endpoints are used:
//! character search by exact name, and the paged comics listing filtered by
//! character id.

use crate::auth::Signer;
use crate::config::{Config, Credentials};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// Opaque identifier of a resolved character.
///
/// Produced once per run by [`CatalogClient::resolve_character`]; it has no
/// lifecycle beyond the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct CharacterId(pub u64);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Thumbnail reference as returned by the gateway: a path and an extension
/// that join with a period to form the full image URL.
#[derive(Clone, Debug, Deserialize)]
pub struct Thumbnail {
    /// URL path without extension
    pub path: String,
    /// Image extension, e.g. "jpg"
    pub extension: String,
}

/// One dated event attached to a comic (onsale, FOC, digital release, ...)
#[derive(Clone, Debug, Deserialize)]
pub struct ComicDate {
    /// Event classification, e.g. "onsaleDate"
    #[serde(rename = "type")]
    pub kind: String,
    /// The date string as the gateway renders it
    pub date: String,
}

/// Raw comic record as returned by the gateway
#[derive(Clone, Debug, Deserialize)]
pub struct RawComic {
    /// Issue title
    pub title: String,
    /// Cover thumbnail reference
    pub thumbnail: Thumbnail,
    /// Dated events; exactly one tagged "onsaleDate" is relevant here
    #[serde(default)]
    pub dates: Vec<ComicDate>,
}

/// One page of comics plus the total size of the filtered collection
#[derive(Debug)]
pub struct ComicsPage {
    /// Total number of comics matching the filter, across all pages
    pub total: u32,
    /// The records on this page, in gateway order
    pub results: Vec<RawComic>,
}

// Every gateway payload is wrapped in { "data": { "total": .., "results": [..] } }.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: ResultSet<T>,
}

#[derive(Debug, Deserialize)]
struct ResultSet<T> {
    #[serde(default)]
    total: u32,
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct CharacterSummary {
    id: u64,
}

/// Authenticated read-only client for the catalog gateway
#[derive(Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    signer: Signer,
}

impl CatalogClient {
    /// Create a client from the pipeline configuration and credentials
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config, credentials: Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("comic-export/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            signer: Signer::new(credentials),
        })
    }

    /// Resolve a character name to its catalog id
    ///
    /// Issues one authenticated GET against the character-search endpoint
    /// with an exact-match `name` parameter and takes the id of the first
    /// result. An empty result set is `Ok(None)` — the caller decides
    /// whether that aborts the run.
    ///
    /// # Errors
    /// Returns error on transport failures, non-success HTTP status, or a
    /// body that does not match the gateway envelope.
    pub async fn resolve_character(&self, name: &str) -> Result<Option<CharacterId>> {
        let token = self.signer.sign();
        let ts = token.ts.to_string();
        let url = format!("{}/characters", self.base_url);

        debug!(name, "resolving character id");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("name", name),
                ("ts", ts.as_str()),
                ("apikey", self.signer.public_key()),
                ("hash", token.hash.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                endpoint: "characters".to_string(),
            });
        }

        let envelope: Envelope<CharacterSummary> = response.json().await?;
        Ok(envelope
            .data
            .results
            .first()
            .map(|character| CharacterId(character.id)))
    }

    /// Fetch one page of the comics collection for a character
    ///
    /// Signs a fresh token, requests `limit` records starting at `offset`,
    /// and returns the page together with the collection `total` from the
    /// response envelope.
    ///
    /// # Errors
    /// Returns error on transport failures, non-success HTTP status, or a
    /// body that does not match the gateway envelope.
    pub async fn fetch_comics_page(
        &self,
        character: CharacterId,
        offset: u32,
        limit: u32,
    ) -> Result<ComicsPage> {
        let token = self.signer.sign();
        let ts = token.ts.to_string();
        let character = character.to_string();
        let limit = limit.to_string();
        let offset = offset.to_string();
        let url = format!("{}/comics", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("characters", character.as_str()),
                ("ts", ts.as_str()),
                ("hash", token.hash.as_str()),
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
                ("apikey", self.signer.public_key()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                endpoint: "comics".to_string(),
            });
        }

        let envelope: Envelope<RawComic> = response.json().await?;
        Ok(ComicsPage {
            total: envelope.data.total,
            results: envelope.data.results,
        })
    }
}
