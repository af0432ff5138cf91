use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(MovieId);

/// One entry of the fetched catalog. Immutable after decoding; the view
/// layer references movies by [`MovieId`] and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Observed range 0-10; used for sorting and the `{rating}/10` label.
    pub rating: f64,
    /// Poster URL. Missing or broken URLs fall back to a placeholder.
    pub image_url: Option<String>,
    /// Outbound link only; the app opens it externally, never fetches it.
    pub imdb_url: Option<String>,
}

impl Movie {
    pub fn rating_label(&self) -> String {
        format!("{}/10", self.rating)
    }
}
