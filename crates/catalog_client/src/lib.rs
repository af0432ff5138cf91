//! HTTP source for the movie catalog.
//!
//! Performs the one listing retrieval per session plus per-movie poster
//! downloads. No retries live here; a failed listing fetch is reported as a
//! typed [`FetchError`] and recovery is left to the caller.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use shared::{
    domain::Movie,
    error::FetchError,
    protocol::{decode_catalog, MovieRecord},
};
use tracing::{debug, info, warn};

/// Fixed upstream listing endpoint.
pub const DEFAULT_LISTING_URL: &str = "https://dummyapi.online/api/movies";

/// Bounds both the listing fetch and poster downloads so the UI can never
/// sit in its loading state forever on a hung connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct CatalogClient {
    http: Client,
    listing_url: String,
}

impl CatalogClient {
    pub fn new(listing_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build catalog http client")?;
        Ok(Self {
            http,
            listing_url: listing_url.into(),
        })
    }

    /// Retrieves and decodes the full movie collection.
    ///
    /// Exactly one GET per invocation. Incomplete records (missing title or
    /// rating) are dropped rather than failing the fetch; a body that is not
    /// a JSON array of records is a [`FetchError::BadBody`].
    pub async fn fetch_all(&self) -> Result<Vec<Movie>, FetchError> {
        debug!(url = %self.listing_url, "fetching movie listing");
        let response = self
            .http
            .get(&self.listing_url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let records: Vec<MovieRecord> = response
            .json()
            .await
            .map_err(|err| FetchError::BadBody(err.to_string()))?;

        let fetched = records.len();
        let movies = decode_catalog(records);
        if movies.len() < fetched {
            warn!(
                dropped = fetched - movies.len(),
                "dropped incomplete movie records from listing"
            );
        }
        info!(count = movies.len(), "movie listing fetched");
        Ok(movies)
    }

    /// Downloads raw poster bytes for one movie.
    ///
    /// Poster failures are per-card and non-fatal; callers fall back to a
    /// placeholder instead of surfacing an error banner.
    pub async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "fetching poster");
        let response = self.http.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| FetchError::BadBody(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Unreachable(err.to_string())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
