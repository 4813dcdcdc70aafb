//! Application layer with services and use cases.

/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{AccountPanelCoordinator, PanelEvent, PanelServices};
pub use use_cases::{ResolveTokenUseCase, TokenSource};
