//! Headless wheel-picker protocol.
//!
//! This crate implements the commit protocol of a two-wheel time picker
//! without any terminal or rendering dependency: scroll offsets in, settled
//! value events out. The presentation layer (see `tw-tui`) feeds it raw
//! scroll offsets and polls it with the current instant; all timing is
//! expressed as stored deadlines, so the protocol is fully deterministic
//! under test.
//!
//! # Architecture
//!
//! ```text
//! crates/tw-picker/src/
//!   lib.rs       # Public API exports
//!   timer.rs     # DebounceTimer - one pending deadline, last-event-wins
//!   wheel.rs     # Wheel - offset->index mapping, debounce, snap, commit
//!   selector.rs  # Selector - Closed/Open lifecycle, settle, reconciliation
//!   dismiss.rs   # DismissWatcher capability (outside-interaction detection)
//! ```
//!
//! # Event flow
//!
//! ```text
//! host value ──► Selector::set_value ──► Wheel::seed (both wheels)
//!
//! scroll ──► Wheel::scroll_to ──► DebounceTimer::restart
//!                                        │ (quiet period elapses)
//!                                        ▼
//!            Selector::poll ──► Wheel::poll ──► snap + WheelSnap
//!                                        │ (index changed)
//!                                        ▼
//!                        PickerEvent::ValueChanged { value, text }
//! ```
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tw_core::{TimeField, TimeValue, WheelConfig};
//! use tw_picker::{PickerEvent, Selector};
//!
//! let config = WheelConfig::default();
//! let mut selector = Selector::new(&config, TimeValue::new(8, 0).unwrap());
//!
//! let t0 = Instant::now();
//! selector.open(t0);
//!
//! // Scroll the hours wheel to the offset of index 23, then wait out the
//! // debounce window.
//! let offset = f32::from(config.item_height) * 23.0;
//! selector.scroll_to(TimeField::Hour, offset, t0);
//! let events = selector.poll(t0 + Duration::from_millis(151));
//!
//! assert!(events.iter().any(|e| matches!(
//!     e,
//!     PickerEvent::ValueChanged { text, .. } if text.as_str() == "23:00"
//! )));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod dismiss;
pub mod selector;
pub mod timer;
pub mod wheel;

pub use dismiss::{DismissWatcher, LatchDismiss, NoopDismiss};
pub use selector::{PickerEvent, PickerEvents, Selector, SelectorPhase};
pub use timer::DebounceTimer;
pub use wheel::{Wheel, WheelSnap};
