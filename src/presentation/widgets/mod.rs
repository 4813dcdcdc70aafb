//! Panel view state.

pub mod timeline_panel;

pub use timeline_panel::TimelinePanelState;
