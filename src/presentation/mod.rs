//! Presentation layer with the command-driven account view.

/// Application driver.
pub mod app;
/// Line command parsing.
pub mod commands;
/// Panel view state.
pub mod widgets;

pub use app::App;
pub use commands::Command;
