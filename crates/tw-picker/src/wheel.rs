//! One scroll wheel: offset-to-index mapping, debounce, and snap.
//!
//! A [`Wheel`] owns a raw scroll offset, the committed index it last settled
//! on, and a [`DebounceTimer`]. Scroll events only record the offset and
//! restart the timer; the commit happens in [`poll`](Wheel::poll) once the
//! quiet period has elapsed.
//!
//! The offset lives in logical units where adjacent options are
//! `item_height` apart. While the user is dragging past an edge the offset
//! may leave the valid range; it is clamped only at commit time.

use std::time::{Duration, Instant};

use tracing::{debug, trace};
use tw_core::{TimeField, WheelConfig};

use crate::timer::DebounceTimer;

/// Outcome of a debounce firing: the wheel snapped to `index`.
///
/// `changed` is `true` iff the index differs from the previously committed
/// one; an unchanged snap must not be propagated as a value change
/// (duplicate-commit suppression).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelSnap {
    /// The index the wheel snapped to (always in range).
    pub index: u8,

    /// Whether the committed index changed.
    pub changed: bool,
}

/// Scroll state and commit logic for a single wheel.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use tw_core::{TimeField, WheelConfig};
/// use tw_picker::Wheel;
///
/// let config = WheelConfig::default();
/// let mut wheel = Wheel::new(TimeField::Hour, &config);
/// let t0 = Instant::now();
///
/// wheel.scroll_to(f32::from(config.item_height) * 5.0, t0);
/// let snap = wheel.poll(t0 + config.debounce_window()).unwrap();
/// assert_eq!(snap.index, 5);
/// assert!(snap.changed);
/// ```
#[derive(Debug, Clone)]
pub struct Wheel {
    field: TimeField,
    item_height: u16,
    debounce_window: Duration,
    committed_index: u8,
    raw_offset: f32,
    debounce: DebounceTimer,
}

impl Wheel {
    /// Creates a wheel for `field`, committed to index 0 at offset 0.
    #[must_use]
    pub fn new(field: TimeField, config: &WheelConfig) -> Self {
        Self {
            field,
            item_height: config.item_height.max(1),
            debounce_window: config.debounce_window(),
            committed_index: 0,
            raw_offset: 0.0,
            debounce: DebounceTimer::new(),
        }
    }

    /// Returns the field this wheel selects.
    #[inline]
    #[must_use]
    pub const fn field(&self) -> TimeField {
        self.field
    }

    /// Returns the committed index. Always within the wheel's range.
    #[inline]
    #[must_use]
    pub const fn committed_index(&self) -> u8 {
        self.committed_index
    }

    /// Returns the current raw scroll offset.
    ///
    /// May transiently lie outside the valid range while scrolling.
    #[inline]
    #[must_use]
    pub const fn raw_offset(&self) -> f32 {
        self.raw_offset
    }

    /// Returns the logical distance between adjacent options.
    #[inline]
    #[must_use]
    pub const fn item_height(&self) -> u16 {
        self.item_height
    }

    /// Returns the largest valid index.
    #[inline]
    #[must_use]
    pub const fn max_index(&self) -> u8 {
        self.field.max_index()
    }

    /// Returns the offset at which `index` sits exactly.
    #[inline]
    #[must_use]
    pub fn offset_for(&self, index: u8) -> f32 {
        f32::from(index) * f32::from(self.item_height)
    }

    /// Returns `true` if a debounce deadline is pending.
    #[inline]
    #[must_use]
    pub const fn has_pending_commit(&self) -> bool {
        self.debounce.is_armed()
    }

    /// Re-seeds the committed index from an external value.
    ///
    /// The index is clamped into range and any pending debounce deadline is
    /// cancelled, so a stale scroll cannot overwrite a fresh seed. The
    /// offset is left untouched; positioning is a separate step
    /// ([`snap_to_committed`](Self::snap_to_committed)) because the caller
    /// may need to defer it until the viewport is ready.
    pub fn seed(&mut self, index: u8) {
        let clamped = index.min(self.max_index());
        trace!(field = %self.field, index = clamped, "seeding wheel");
        self.committed_index = clamped;
        self.debounce.cancel();
    }

    /// Moves the raw offset to the committed index's exact position.
    ///
    /// Programmatic navigation only; no commit and no signal.
    pub fn snap_to_committed(&mut self) {
        self.raw_offset = self.offset_for(self.committed_index);
    }

    /// Records a scroll event at `raw_offset` and restarts the debounce
    /// window.
    ///
    /// Side effect only: the committed index is untouched until the window
    /// elapses without another scroll (last-event-wins).
    pub fn scroll_to(&mut self, raw_offset: f32, now: Instant) {
        self.raw_offset = raw_offset;
        self.debounce.restart(now, self.debounce_window);
    }

    /// Adjusts the raw offset by `delta` and restarts the debounce window.
    pub fn scroll_by(&mut self, delta: f32, now: Instant) {
        self.scroll_to(self.raw_offset + delta, now);
    }

    /// Returns the in-range index nearest the current raw offset.
    ///
    /// Ties at the midpoint between two options round upward (toward the
    /// option the viewport has more fully passed); offsets beyond either
    /// edge clamp to the boundary index.
    #[must_use]
    pub fn nearest_index(&self) -> u8 {
        let rows = (self.raw_offset / f32::from(self.item_height) + 0.5).floor();
        let clamped = rows.clamp(0.0, f32::from(self.max_index()));
        // Clamped into 0..=max above, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = clamped as u8;
        index
    }

    /// Drives the debounce timer.
    ///
    /// When the quiet period has elapsed, snaps the offset to the nearest
    /// index and returns the [`WheelSnap`]; otherwise returns `None`.
    pub fn poll(&mut self, now: Instant) -> Option<WheelSnap> {
        if !self.debounce.poll(now) {
            return None;
        }

        let index = self.nearest_index();
        let changed = index != self.committed_index;
        self.committed_index = index;
        self.raw_offset = self.offset_for(index);

        debug!(field = %self.field, index, changed, "wheel settled");
        Some(WheelSnap { index, changed })
    }
}
