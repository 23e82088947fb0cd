//! UI components for the TUI.
//!
//! This module contains all the widget implementations for rendering
//! different parts of the interface.
//!
//! # Component Types
//!
//! - **Widgets** (`Widget` trait): `HeaderBar`, `TriggerRow`, `ChangeLog`,
//!   `StatusBar`, `WheelColumn`
//! - **Overlays**: `PickerPopup`, `HelpPanel`

mod change_log;
mod header;
mod help;
mod popup;
mod status_bar;
mod trigger;
mod wheel_column;

pub use change_log::ChangeLog;
pub use header::HeaderBar;
pub use help::HelpPanel;
pub use popup::PickerPopup;
pub use status_bar::StatusBar;
pub use trigger::TriggerRow;
pub use wheel_column::WheelColumn;
