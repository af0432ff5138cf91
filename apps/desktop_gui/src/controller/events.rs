//! Events flowing from the backend worker to the UI thread.

use shared::{
    domain::{Movie, MovieId},
    error::FetchError,
};

/// Poster pixels decoded off the UI thread; the UI only uploads textures.
#[derive(Clone)]
pub struct PosterImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub enum UiEvent {
    CatalogLoaded(Vec<Movie>),
    CatalogFailed(FetchError),
    PosterLoaded {
        movie_id: MovieId,
        image: PosterImage,
    },
    PosterFailed {
        movie_id: MovieId,
        reason: String,
    },
}
