//! The single source of truth for the browsing session.
//!
//! `ViewState` owns the fetched catalog, the active query, the sort mode,
//! and the selection. The displayed list is never stored; it is recomputed
//! by [`ViewState::derive`] from those inputs on demand, so the filtered
//! and sorted views can never drift apart.

use shared::domain::{Movie, MovieId};

/// The one user-visible message all fetch failures collapse to.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching movies. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    None,
    RatingDescending,
    NameAscending,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::None,
        SortMode::RatingDescending,
        SortMode::NameAscending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "Sort by...",
            SortMode::RatingDescending => "Rating",
            SortMode::NameAscending => "Movie Name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ViewState {
    all: Vec<Movie>,
    /// Stored lowercased; matching is case-insensitive substring.
    query: String,
    sort_mode: SortMode,
    selected: Option<MovieId>,
    load_status: LoadStatus,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn all(&self) -> &[Movie] {
        &self.all
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.sort_mode = sort_mode;
    }

    /// Selects a movie by id. Ignored for ids outside the catalog, which
    /// keeps the invariant that a selection always refers to an element of
    /// the fetched collection.
    pub fn select(&mut self, id: MovieId) {
        if self.all.iter().any(|movie| movie.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        let id = self.selected?;
        self.all.iter().find(|movie| movie.id == id)
    }

    /// Replaces the catalog wholesale; never a partial update. A selection
    /// that no longer resolves against the new collection is dropped.
    pub fn catalog_loaded(&mut self, movies: Vec<Movie>) {
        self.all = movies;
        if let Some(id) = self.selected {
            if !self.all.iter().any(|movie| movie.id == id) {
                self.selected = None;
            }
        }
        self.load_status = LoadStatus::Ready;
    }

    pub fn catalog_failed(&mut self) {
        self.load_status = LoadStatus::Failed(FETCH_ERROR_MESSAGE.to_string());
    }

    /// Computes the displayed list: filter against the full catalog, then a
    /// stable sort. Always evaluated from `all`, never from a previous
    /// derivation, so changing the sort mode can never lose filtered-out
    /// movies and a shorter query re-admits everything that matches.
    pub fn derive(&self) -> Vec<&Movie> {
        let mut displayed: Vec<&Movie> = self
            .all
            .iter()
            .filter(|movie| {
                self.query.is_empty() || movie.title.to_lowercase().contains(&self.query)
            })
            .collect();

        match self.sort_mode {
            SortMode::None => {}
            SortMode::RatingDescending => {
                // sort_by is stable: equal ratings keep fetch order.
                displayed.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
            SortMode::NameAscending => {
                displayed.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
            }
        }

        displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, rating: f64) -> Movie {
        Movie {
            id: MovieId(id),
            title: title.to_string(),
            rating,
            image_url: None,
            imdb_url: None,
        }
    }

    fn ready_state(movies: Vec<Movie>) -> ViewState {
        let mut state = ViewState::new();
        state.catalog_loaded(movies);
        state
    }

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn starts_loading_with_defaults() {
        let state = ViewState::new();
        assert_eq!(state.load_status(), &LoadStatus::Loading);
        assert_eq!(state.sort_mode(), SortMode::None);
        assert_eq!(state.query(), "");
        assert!(state.selected_movie().is_none());
    }

    #[test]
    fn query_is_lowercased_on_write() {
        let mut state = ViewState::new();
        state.set_query("The GodFather");
        assert_eq!(state.query(), "the godfather");
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut state = ready_state(vec![
            movie(1, "The Godfather", 9.2),
            movie(2, "Goodfellas", 8.7),
            movie(3, "Casablanca", 8.5),
        ]);
        state.set_query("GOOD");

        let displayed = state.derive();
        assert_eq!(titles(&displayed), vec!["Goodfellas"]);
        for shown in &displayed {
            assert!(shown.title.to_lowercase().contains(state.query()));
        }
    }

    #[test]
    fn derive_never_grows_the_collection() {
        let mut state = ready_state(vec![
            movie(1, "Alpha", 1.0),
            movie(2, "Beta", 2.0),
            movie(3, "Gamma", 3.0),
        ]);
        for query in ["", "a", "zz", "alpha"] {
            state.set_query(query);
            assert!(state.derive().len() <= state.all().len());
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut state = ready_state(vec![
            movie(1, "Heat", 8.3),
            movie(2, "Heathers", 7.2),
            movie(3, "Alien", 8.5),
        ]);
        state.set_query("heat");

        let once: Vec<Movie> = state.derive().into_iter().cloned().collect();

        // Feeding the derived list back through the same filter must
        // reproduce it exactly.
        let mut refiltered = ready_state(once.clone());
        refiltered.set_query("heat");
        let twice: Vec<Movie> = refiltered.derive().into_iter().cloned().collect();

        assert_eq!(once, twice);
        assert_eq!(
            once.iter().map(|m| m.title.as_str()).collect::<Vec<_>>(),
            vec!["Heat", "Heathers"]
        );
    }

    #[test]
    fn sort_none_preserves_fetch_order_and_all_is_never_reordered() {
        let mut state = ready_state(vec![
            movie(1, "Zeta", 5.0),
            movie(2, "Alpha", 9.0),
            movie(3, "Mid", 5.0),
        ]);

        state.set_sort_mode(SortMode::RatingDescending);
        let _ = state.derive();
        state.set_sort_mode(SortMode::None);

        assert_eq!(titles(&state.derive()), vec!["Zeta", "Alpha", "Mid"]);
        let order: Vec<i64> = state.all().iter().map(|m| m.id.0).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn rating_descending_is_stable_on_ties() {
        let mut state = ready_state(vec![
            movie(1, "Zeta", 5.0),
            movie(2, "Alpha", 9.0),
            movie(3, "Mid", 5.0),
        ]);
        state.set_sort_mode(SortMode::RatingDescending);

        assert_eq!(titles(&state.derive()), vec!["Alpha", "Zeta", "Mid"]);
    }

    #[test]
    fn name_ascending_sorts_titles() {
        let mut state = ready_state(vec![
            movie(1, "Zeta", 5.0),
            movie(2, "Alpha", 9.0),
            movie(3, "Mid", 5.0),
        ]);
        state.set_sort_mode(SortMode::NameAscending);

        assert_eq!(titles(&state.derive()), vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn changing_sort_mode_never_loses_filtered_out_movies() {
        let mut state = ready_state(vec![
            movie(1, "Heat", 8.3),
            movie(2, "Alien", 8.5),
            movie(3, "Heathers", 7.2),
        ]);
        state.set_query("heat");
        state.set_sort_mode(SortMode::NameAscending);
        state.set_query("");

        assert_eq!(state.derive().len(), 3);
    }

    #[test]
    fn selection_requires_catalog_membership() {
        let mut state = ready_state(vec![movie(1, "Heat", 8.3)]);

        state.select(MovieId(99));
        assert!(state.selected_movie().is_none());

        state.select(MovieId(1));
        assert_eq!(state.selected_movie().map(|m| m.id), Some(MovieId(1)));
    }

    #[test]
    fn selection_round_trip_leaves_derivation_unchanged() {
        let mut state = ready_state(vec![
            movie(1, "Zeta", 5.0),
            movie(2, "Alpha", 9.0),
            movie(3, "Mid", 5.0),
        ]);
        state.set_query("a");
        state.set_sort_mode(SortMode::NameAscending);
        let before = titles(&state.derive());

        state.select(MovieId(2));
        assert_eq!(state.query(), "a");
        assert_eq!(state.sort_mode(), SortMode::NameAscending);
        state.clear_selection();

        assert_eq!(titles(&state.derive()), before);
    }

    #[test]
    fn catalog_reload_replaces_wholesale_and_drops_stale_selection() {
        let mut state = ready_state(vec![movie(1, "Heat", 8.3), movie(2, "Alien", 8.5)]);
        state.select(MovieId(2));

        state.catalog_loaded(vec![movie(3, "Dune", 8.0)]);

        assert_eq!(state.all().len(), 1);
        assert!(state.selected_movie().is_none());
        assert_eq!(state.load_status(), &LoadStatus::Ready);
    }

    #[test]
    fn catalog_failure_stores_the_single_user_message() {
        let mut state = ViewState::new();
        state.catalog_failed();
        assert_eq!(
            state.load_status(),
            &LoadStatus::Failed(FETCH_ERROR_MESSAGE.to_string())
        );
    }
}
