//! Pure mapping from [`ViewState`] to what the frame should paint.
//!
//! Keeping this as a side-effect-free function means the full decision
//! table is unit-testable without a rendering environment.

use shared::domain::Movie;

use crate::controller::state::{LoadStatus, ViewState};

#[derive(Debug, PartialEq)]
pub enum RenderPlan<'a> {
    /// Loading indicator only.
    Loading,
    /// Error banner only; no grid, no controls.
    Failed { message: &'a str },
    /// Detail view replaces the grid; search/sort controls hidden.
    Detail { movie: &'a Movie },
    /// Controls plus an explicit "no results" message. Distinct from
    /// `Loading`/`Failed`: an empty successful fetch lands here.
    EmptyResults,
    /// Controls plus the derived card grid.
    Grid { movies: Vec<&'a Movie> },
}

impl RenderPlan<'_> {
    pub fn shows_controls(&self) -> bool {
        matches!(self, RenderPlan::EmptyResults | RenderPlan::Grid { .. })
    }
}

pub fn plan(state: &ViewState) -> RenderPlan<'_> {
    match state.load_status() {
        LoadStatus::Loading => RenderPlan::Loading,
        LoadStatus::Failed(message) => RenderPlan::Failed {
            message: message.as_str(),
        },
        LoadStatus::Ready => {
            if let Some(movie) = state.selected_movie() {
                return RenderPlan::Detail { movie };
            }
            let movies = state.derive();
            if movies.is_empty() {
                RenderPlan::EmptyResults
            } else {
                RenderPlan::Grid { movies }
            }
        }
    }
}
