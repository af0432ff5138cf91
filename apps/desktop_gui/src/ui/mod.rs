//! UI layer: app shell, pure render-plan computation, and theming.

pub mod app;
pub mod presenter;
pub mod theme;

pub use app::MovieGuiApp;
