//! Terminal user interface for the timewheel picker using Ratatui.
//!
//! This crate hosts the headless picker protocol (`tw-picker`) inside a
//! terminal application: an async event loop with tokio, mouse-driven wheel
//! scrolling, and a component-based renderer.
//!
//! # Architecture
//!
//! ```text
//! crates/tw-tui/src/
//!   lib.rs           # Public API exports and the run() event loop
//!   app.rs           # Host state: authoritative value + Selector
//!   event.rs         # Event types (Key, Mouse, Tick, Render)
//!   tui.rs           # Terminal wrapper with async event streaming
//!   action.rs        # User actions (commands from input bindings)
//!   ui.rs            # Layout geometry and rendering orchestration
//!   theme.rs         # Color scheme and styling constants
//!   error.rs         # TUI-specific error types
//!   components/
//!     mod.rs         # Component exports
//!     trigger.rs     # TriggerRow - the closed-state control
//!     wheel_column.rs # WheelColumn - one scrollable wheel
//!     popup.rs       # PickerPopup - the open-state overlay
//!     change_log.rs  # ChangeLog - emitted value history
//!     header.rs      # HeaderBar component
//!     status_bar.rs  # StatusBar component
//!     help.rs        # HelpPanel modal overlay
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use tw_core::{Config, TimeValue};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tw_tui::TuiError> {
//!     let config = Config::default();
//!     let initial = TimeValue::new(8, 0).unwrap();
//!     let final_value = tw_tui::run(config, "Start time", false, initial).await?;
//!     println!("{final_value}");
//!     Ok(())
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod theme;
pub mod tui;
pub mod ui;

use std::time::Instant;

use tracing::{debug, info};
use tw_core::{Config, TimeValue};

// Public re-exports
pub use action::Action;
pub use app::{App, AppMode, StatusMessage};
pub use error::TuiError;
pub use event::Event;
pub use theme::Theme;
pub use tui::Tui;

/// Runs the TUI application and returns the final committed value.
///
/// This is the main entry point for the tw-tui crate. It:
///
/// 1. Initializes the terminal (raw mode, alternate screen, mouse capture)
/// 2. Runs the main event loop until the user quits
/// 3. Restores the terminal
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `label` - Display label for the widget
/// * `required` - Whether the field is marked required (presentation only)
/// * `initial` - The initial host value
///
/// # Errors
///
/// Returns an error if terminal initialization or drawing fails.
pub async fn run(
    config: Config,
    label: impl Into<String>,
    required: bool,
    initial: TimeValue,
) -> Result<TimeValue, TuiError> {
    // tick_rate_ms and frame_rate are small UI timing values, precision
    // loss is acceptable
    #[allow(clippy::cast_precision_loss)]
    let tick_rate = 1000.0 / config.tui.tick_rate_ms as f64;
    #[allow(clippy::cast_precision_loss)]
    let frame_rate = config.tui.frame_rate as f64;

    let mut tui = Tui::new(tick_rate)?.with_frame_rate(frame_rate);

    let theme = Theme::from_scheme(config.tui.color_scheme);
    let mut app = App::new(config, label, required, initial);

    tui.enter()?;
    app.set_terminal_size(tui.size());

    info!("Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app, &theme).await;

    tui.exit()?;

    let value = app.value();
    debug!(%value, "TUI finished");
    result.map(|()| value)
}

/// Runs the main event loop.
async fn run_event_loop(tui: &mut Tui, app: &mut App, theme: &Theme) -> Result<(), TuiError> {
    loop {
        // Draw the UI
        tui.draw(|frame| ui::render(app, frame, theme))?;

        // Wait for next event
        let Some(event) = tui.next_event().await else {
            return Err(TuiError::ChannelClosed);
        };

        let now = Instant::now();
        let action = match event {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize { width, height } => {
                app.set_terminal_size(ratatui::layout::Rect::new(0, 0, width, height));
                Action::Render
            }
            Event::Tick => {
                app.tick(now);
                Action::None
            }
            Event::Render => Action::Render,
            Event::FocusGained | Event::FocusLost => Action::None,
        };

        // Apply action
        app.update(action, now);

        // Check for quit
        if app.should_quit {
            info!("Quit requested");
            break;
        }
    }

    Ok(())
}
