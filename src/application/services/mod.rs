//! Application services.

pub mod account_panel;

pub use account_panel::{
    AccountPanelCoordinator, PanelAction, PanelEvent, PanelSelection, PanelServices, PanelView,
};
