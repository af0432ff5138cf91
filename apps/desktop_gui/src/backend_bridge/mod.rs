//! Bridge between the UI thread and the network-facing backend worker.

pub mod commands;
pub mod runtime;
