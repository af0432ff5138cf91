//! Backend commands queued from UI to backend worker.

use shared::domain::MovieId;

pub enum BackendCommand {
    /// The one catalog retrieval, dispatched once at startup. No control
    /// re-triggers it, so two listing fetches are never in flight.
    FetchCatalog,
    FetchPoster { movie_id: MovieId, url: String },
}
