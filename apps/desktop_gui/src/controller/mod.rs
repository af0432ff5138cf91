//! Controller layer: UI events, view-state transitions, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod state;
