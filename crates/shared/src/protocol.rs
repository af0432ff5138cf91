use serde::{Deserialize, Serialize};

use crate::domain::{Movie, MovieId};

/// Raw listing-endpoint record, shaped `{ "id"?, "movie", "rating",
/// "image"?, "imdb_url"? }`. Every field is optional at the serde level;
/// leniency beyond "the body is a sequence of records" is deliberate, so a
/// sparse record never sinks the whole fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display title. The upstream API names this field `movie`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_url: Option<String>,
}

impl MovieRecord {
    /// Converts one wire record into a domain [`Movie`].
    ///
    /// A record is kept iff both `movie` (title) and `rating` are present.
    /// Records without an upstream id get a session-local one derived from
    /// their position in the fetched sequence; the fetch happens once per
    /// session, so position-derived ids stay stable for the session.
    pub fn into_movie(self, position: usize) -> Option<Movie> {
        let title = self.movie?;
        let rating = self.rating?;
        Some(Movie {
            id: MovieId(self.id.unwrap_or(fallback_id(position))),
            title,
            rating,
            image_url: self.image,
            imdb_url: self.imdb_url,
        })
    }
}

/// Session-local ids for records the upstream left unnumbered. Kept far
/// below zero so they cannot collide with real upstream ids.
fn fallback_id(position: usize) -> i64 {
    i64::MIN + position as i64
}

/// Decodes a listing body into the catalog, preserving fetch order and
/// dropping records that lack a title or rating.
pub fn decode_catalog(records: Vec<MovieRecord>) -> Vec<Movie> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| record.into_movie(position))
        .collect()
}
