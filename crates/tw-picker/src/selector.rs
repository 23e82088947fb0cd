//! Picker lifecycle: the Closed/Open state machine over two wheels.
//!
//! The [`Selector`] owns one [`Wheel`] per time field, the settle timer used
//! for programmatic positioning after opening, and the injected
//! [`DismissWatcher`]. It mediates between the host's authoritative value
//! and the wheels' scroll state:
//!
//! - host value in: [`set_value`](Selector::set_value) re-seeds both wheels
//! - commits out: [`poll`](Selector::poll) emits [`PickerEvent`]s
//!
//! The wheels are a reconciled view of the host value, never a second
//! source of truth; the selector proposes replacements and the host decides
//! what to do with them.
//!
//! Closing does not cancel in-flight wheel deadlines: a commit whose quiet
//! period ends after the picker closed is still emitted on the next poll.
//! Re-seeding, by contrast, always cancels them (see [`Wheel::seed`]).

use std::time::{Duration, Instant};

use smallvec::SmallVec;
use tracing::{debug, info, trace};
use tw_core::{codec, TimeField, TimeValue, WheelConfig};

use crate::dismiss::{DismissWatcher, NoopDismiss};
use crate::timer::DebounceTimer;
use crate::wheel::Wheel;

/// Lifecycle phase of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorPhase {
    /// The picker is closed; only the trigger control is visible.
    #[default]
    Closed,

    /// The picker is open; the wheels accept scroll input and the dismiss
    /// watcher is engaged.
    Open,
}

/// Events produced by [`Selector::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PickerEvent {
    /// A wheel's debounce fired and its offset snapped to `index`.
    ///
    /// Emitted for every settle, including ones that did not change the
    /// committed index.
    Snapped {
        /// The wheel that settled.
        field: TimeField,
        /// The index it snapped to.
        index: u8,
    },

    /// A wheel commit changed the merged value.
    ///
    /// `text` is the codec encoding of `value`, ready to hand to the host's
    /// change callback. Each wheel propagates independently; the selector
    /// does not wait for both wheels to settle.
    ValueChanged {
        /// The new merged value.
        value: TimeValue,
        /// The `HH:MM` encoding of `value`.
        text: String,
    },

    /// The dismiss watcher reported an outside interaction and the picker
    /// closed.
    Dismissed,
}

/// Event batch returned by one poll. Rarely holds more than a snap, a value
/// change, and a dismissal.
pub type PickerEvents = SmallVec<[PickerEvent; 4]>;

/// The picker lifecycle state machine.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use tw_core::{TimeValue, WheelConfig};
/// use tw_picker::{Selector, SelectorPhase};
///
/// let mut selector = Selector::new(&WheelConfig::default(), TimeValue::new(8, 0).unwrap());
/// assert_eq!(selector.phase(), SelectorPhase::Closed);
///
/// selector.open(Instant::now());
/// assert!(selector.is_open());
/// assert_eq!(selector.value().to_string(), "08:00");
/// ```
#[derive(Debug)]
pub struct Selector<D: DismissWatcher = NoopDismiss> {
    phase: SelectorPhase,
    hours: Wheel,
    minutes: Wheel,
    settle: DebounceTimer,
    settle_delay: Duration,
    dismiss: D,
}

impl Selector<NoopDismiss> {
    /// Creates a closed selector seeded with `initial`, without outside-
    /// interaction detection.
    #[must_use]
    pub fn new(config: &WheelConfig, initial: TimeValue) -> Self {
        Self::with_dismiss(config, initial, NoopDismiss)
    }
}

impl<D: DismissWatcher> Selector<D> {
    /// Creates a closed selector seeded with `initial`, using `dismiss` for
    /// outside-interaction detection.
    #[must_use]
    pub fn with_dismiss(config: &WheelConfig, initial: TimeValue, dismiss: D) -> Self {
        let mut hours = Wheel::new(TimeField::Hour, config);
        let mut minutes = Wheel::new(TimeField::Minute, config);
        hours.seed(initial.hour());
        minutes.seed(initial.minute());

        Self {
            phase: SelectorPhase::Closed,
            hours,
            minutes,
            settle: DebounceTimer::new(),
            settle_delay: config.settle_delay(),
            dismiss,
        }
    }

    /// Returns the current lifecycle phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> SelectorPhase {
        self.phase
    }

    /// Returns `true` while the picker is open.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == SelectorPhase::Open
    }

    /// Returns the merged committed value of both wheels.
    #[must_use]
    pub fn value(&self) -> TimeValue {
        TimeValue::MIDNIGHT
            .with_field(TimeField::Hour, self.hours.committed_index())
            .with_field(TimeField::Minute, self.minutes.committed_index())
    }

    /// Returns the wheel for `field`.
    #[must_use]
    pub const fn wheel(&self, field: TimeField) -> &Wheel {
        match field {
            TimeField::Hour => &self.hours,
            TimeField::Minute => &self.minutes,
        }
    }

    /// Returns the dismiss watcher, for hosts that feed it interactions.
    pub fn dismiss_watcher_mut(&mut self) -> &mut D {
        &mut self.dismiss
    }

    /// Opens the picker.
    ///
    /// Re-seeds both wheels from the committed value, arms the settle timer
    /// (positioning happens in [`poll`](Self::poll) once the viewport has
    /// had a moment to become measurable), and engages the dismiss watcher.
    /// No-op if already open.
    pub fn open(&mut self, now: Instant) {
        if self.is_open() {
            return;
        }

        let value = self.value();
        debug!(%value, "opening picker");

        self.phase = SelectorPhase::Open;
        self.hours.seed(value.hour());
        self.minutes.seed(value.minute());
        self.settle.restart(now, self.settle_delay);
        self.dismiss.engage();
    }

    /// Confirms and closes the picker, returning the committed value.
    ///
    /// No value change happens on this transition beyond what wheel commits
    /// have already produced. No-op (beyond returning the value) if closed.
    pub fn confirm(&mut self) -> TimeValue {
        if self.is_open() {
            debug!(value = %self.value(), "picker confirmed");
            self.close_internal();
        }
        self.value()
    }

    /// Dismisses the picker without an explicit confirmation.
    ///
    /// Equivalent to an outside interaction, for hosts with their own
    /// dismissal input. No-op if closed.
    pub fn dismiss(&mut self) {
        if self.is_open() {
            debug!("picker dismissed");
            self.close_internal();
        }
    }

    /// Reconciles the wheels with a new externally owned value.
    ///
    /// Both wheels are re-seeded (cancelling any pending commits). If the
    /// picker is open the offsets snap immediately; if closed, positioning
    /// waits for the next open's settle step.
    pub fn set_value(&mut self, value: TimeValue) {
        debug!(%value, open = self.is_open(), "reconciling external value");

        self.hours.seed(value.hour());
        self.minutes.seed(value.minute());

        if self.is_open() {
            self.hours.snap_to_committed();
            self.minutes.snap_to_committed();
        }
    }

    /// Records a scroll event placing `field`'s wheel at `raw_offset`.
    ///
    /// Ignored while closed (there is no viewport to scroll).
    pub fn scroll_to(&mut self, field: TimeField, raw_offset: f32, now: Instant) {
        if !self.is_open() {
            trace!(%field, raw_offset, "scroll ignored while closed");
            return;
        }
        self.wheel_mut(field).scroll_to(raw_offset, now);
    }

    /// Adjusts `field`'s wheel offset by `delta`.
    ///
    /// Ignored while closed.
    pub fn scroll_by(&mut self, field: TimeField, delta: f32, now: Instant) {
        if !self.is_open() {
            trace!(%field, delta, "scroll ignored while closed");
            return;
        }
        self.wheel_mut(field).scroll_by(delta, now);
    }

    /// Drives all pending deadlines and collects the resulting events.
    ///
    /// Order per poll: the settle snap (silent programmatic positioning),
    /// then each wheel's debounce (commits fire in either phase), then the
    /// dismiss watcher. A wheel the user has already scrolled is excluded
    /// from the settle snap; its own debounce owns the offset.
    pub fn poll(&mut self, now: Instant) -> PickerEvents {
        let mut events = PickerEvents::new();

        if self.is_open() && self.settle.poll(now) {
            if !self.hours.has_pending_commit() {
                self.hours.snap_to_committed();
            }
            if !self.minutes.has_pending_commit() {
                self.minutes.snap_to_committed();
            }
            trace!("wheels positioned after settle delay");
        }

        for field in TimeField::ALL {
            if let Some(snap) = self.wheel_mut(field).poll(now) {
                events.push(PickerEvent::Snapped {
                    field,
                    index: snap.index,
                });

                if snap.changed {
                    let value = self.value();
                    let text = codec::encode(value);
                    info!(%value, %field, "picker value committed");
                    events.push(PickerEvent::ValueChanged { value, text });
                }
            }
        }

        if self.is_open() && self.dismiss.take_dismissal() {
            debug!("outside interaction, closing picker");
            self.close_internal();
            events.push(PickerEvent::Dismissed);
        }

        events
    }

    /// Shared Open -> Closed transition.
    ///
    /// Releases the dismiss watcher and cancels the settle timer. Wheel
    /// debounce deadlines are left armed so a scroll that was still settling
    /// commits normally.
    fn close_internal(&mut self) {
        self.phase = SelectorPhase::Closed;
        self.settle.cancel();
        self.dismiss.release();
    }

    const fn wheel_mut(&mut self, field: TimeField) -> &mut Wheel {
        match field {
            TimeField::Hour => &mut self.hours,
            TimeField::Minute => &mut self.minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dismiss::LatchDismiss;

    const DEBOUNCE: Duration = Duration::from_millis(150);
    const SETTLE: Duration = Duration::from_millis(50);

    fn config() -> WheelConfig {
        WheelConfig::default()
    }

    fn time(hour: u8, minute: u8) -> TimeValue {
        TimeValue::MIDNIGHT
            .with_field(TimeField::Hour, hour)
            .with_field(TimeField::Minute, minute)
    }

    fn height() -> f32 {
        f32::from(config().item_height)
    }

    fn changed_values(events: &PickerEvents) -> Vec<String> {
        events
            .iter()
            .filter_map(|e| match e {
                PickerEvent::ValueChanged { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_starts_closed_with_initial_value() {
        let selector = Selector::new(&config(), time(8, 30));
        assert_eq!(selector.phase(), SelectorPhase::Closed);
        assert_eq!(selector.value(), time(8, 30));
    }

    #[test]
    fn test_open_seeds_wheels_from_value() {
        // Scenario: external value "08:00", then open.
        let mut selector = Selector::new(&config(), time(8, 0));
        selector.open(Instant::now());

        assert!(selector.is_open());
        assert_eq!(selector.wheel(TimeField::Hour).committed_index(), 8);
        assert_eq!(selector.wheel(TimeField::Minute).committed_index(), 0);
    }

    #[test]
    fn test_settle_positions_wheels_silently() {
        // Scenario: value supplied while closed, offsets applied only after
        // the settle delay on the next open, with no change signal.
        let mut selector = Selector::new(&config(), TimeValue::MIDNIGHT);
        selector.set_value(time(14, 30));

        let t0 = Instant::now();
        selector.open(t0);

        // Before the settle deadline the offsets are untouched.
        let events = selector.poll(t0 + SETTLE - Duration::from_millis(1));
        assert!(events.is_empty());

        let events = selector.poll(t0 + SETTLE);
        assert!(events.is_empty(), "seeding must be silent");

        let h = height();
        let hour_offset = selector.wheel(TimeField::Hour).raw_offset();
        let minute_offset = selector.wheel(TimeField::Minute).raw_offset();
        assert!((hour_offset - h * 14.0).abs() < f32::EPSILON);
        assert!((minute_offset - h * 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scroll_commit_emits_merged_value() {
        // Scenario: hours at 8, scroll hours to index 23, wait out the
        // debounce; the emitted value keeps the minute untouched.
        let mut selector = Selector::new(&config(), time(8, 0));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);

        selector.scroll_to(TimeField::Hour, height() * 23.0, t0 + SETTLE);
        let events = selector.poll(t0 + SETTLE + DEBOUNCE);

        assert_eq!(changed_values(&events), vec!["23:00".to_owned()]);
        assert_eq!(selector.value(), time(23, 0));
    }

    #[test]
    fn test_scroll_past_top_edge_clamps_to_zero() {
        // Scenario: minutes scrolled past the top edge commits to 0.
        let mut selector = Selector::new(&config(), time(8, 15));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);

        selector.scroll_to(TimeField::Minute, -5.0, t0 + SETTLE);
        let events = selector.poll(t0 + SETTLE + DEBOUNCE);

        assert_eq!(changed_values(&events), vec!["08:00".to_owned()]);
        assert_eq!(selector.wheel(TimeField::Minute).committed_index(), 0);
    }

    #[test]
    fn test_duplicate_commit_emits_no_value_change() {
        let mut selector = Selector::new(&config(), time(5, 0));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);

        // Nudge within the committed item's half-window.
        selector.scroll_to(TimeField::Hour, height() * 5.0 + 1.0, t0 + SETTLE);
        let events = selector.poll(t0 + SETTLE + DEBOUNCE);

        assert!(changed_values(&events).is_empty());
        assert!(events
            .iter()
            .any(|e| matches!(e, PickerEvent::Snapped { index: 5, .. })));
    }

    #[test]
    fn test_wheels_commit_independently() {
        let mut selector = Selector::new(&config(), time(0, 0));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);

        let h = height();
        selector.scroll_to(TimeField::Hour, h * 9.0, t0 + SETTLE);
        selector.scroll_to(
            TimeField::Minute,
            h * 41.0,
            t0 + SETTLE + Duration::from_millis(60),
        );

        // Hours settle first; minutes are still inside their window.
        let events = selector.poll(t0 + SETTLE + DEBOUNCE);
        assert_eq!(changed_values(&events), vec!["09:00".to_owned()]);

        let events = selector.poll(t0 + SETTLE + Duration::from_millis(60) + DEBOUNCE);
        assert_eq!(changed_values(&events), vec!["09:41".to_owned()]);
    }

    #[test]
    fn test_scroll_before_settle_wins_over_positioning() {
        let mut selector = Selector::new(&config(), time(8, 0));
        let t0 = Instant::now();
        selector.open(t0);

        // The user scrolls before the settle deadline; the deferred
        // programmatic snap must not clobber the gesture.
        let scroll_at = t0 + Duration::from_millis(10);
        selector.scroll_to(TimeField::Hour, height() * 23.0, scroll_at);
        let events = selector.poll(scroll_at + DEBOUNCE);

        assert_eq!(changed_values(&events), vec!["23:00".to_owned()]);
    }

    #[test]
    fn test_scroll_while_closed_is_ignored() {
        let mut selector = Selector::new(&config(), time(8, 0));
        let t0 = Instant::now();

        selector.scroll_to(TimeField::Hour, height() * 3.0, t0);
        let events = selector.poll(t0 + DEBOUNCE);

        assert!(events.is_empty());
        assert_eq!(selector.value(), time(8, 0));
    }

    #[test]
    fn test_commit_pending_at_close_still_fires() {
        // Closing does not cancel in-flight wheel deadlines.
        let mut selector = Selector::new(&config(), time(8, 0));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);

        selector.scroll_to(TimeField::Hour, height() * 10.0, t0 + SETTLE);
        selector.confirm();
        assert!(!selector.is_open());

        let events = selector.poll(t0 + SETTLE + DEBOUNCE);
        assert_eq!(changed_values(&events), vec!["10:00".to_owned()]);
    }

    #[test]
    fn test_set_value_cancels_pending_commit() {
        // A fresh external seed wins over a stale in-flight scroll.
        let mut selector = Selector::new(&config(), time(8, 0));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);

        selector.scroll_to(TimeField::Hour, height() * 20.0, t0 + SETTLE);
        selector.set_value(time(6, 45));

        let events = selector.poll(t0 + SETTLE + DEBOUNCE);
        assert!(events.is_empty());
        assert_eq!(selector.value(), time(6, 45));
    }

    #[test]
    fn test_set_value_while_open_snaps_immediately() {
        let mut selector = Selector::new(&config(), time(8, 0));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);

        selector.set_value(time(12, 34));

        let h = height();
        assert!((selector.wheel(TimeField::Hour).raw_offset() - h * 12.0).abs() < f32::EPSILON);
        assert!((selector.wheel(TimeField::Minute).raw_offset() - h * 34.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_set_value_while_closed_defers_positioning() {
        let mut selector = Selector::new(&config(), time(8, 0));
        selector.set_value(time(12, 34));

        // Committed indices update, offsets wait for the next open.
        assert_eq!(selector.value(), time(12, 34));
        assert!((selector.wheel(TimeField::Hour).raw_offset() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_dismiss_watcher_scoped_to_open() {
        let mut selector = Selector::with_dismiss(&config(), time(8, 0), LatchDismiss::new());
        assert!(!selector.dismiss_watcher_mut().is_engaged());

        let t0 = Instant::now();
        selector.open(t0);
        assert!(selector.dismiss_watcher_mut().is_engaged());

        selector.confirm();
        assert!(!selector.dismiss_watcher_mut().is_engaged());
    }

    #[test]
    fn test_outside_interaction_closes_picker() {
        let mut selector = Selector::with_dismiss(&config(), time(8, 0), LatchDismiss::new());
        let t0 = Instant::now();
        selector.open(t0);

        selector.dismiss_watcher_mut().notify_outside_interaction();
        let events = selector.poll(t0 + Duration::from_millis(1));

        assert!(events.contains(&PickerEvent::Dismissed));
        assert!(!selector.is_open());
    }

    #[test]
    fn test_confirm_returns_committed_value() {
        let mut selector = Selector::new(&config(), time(8, 0));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);

        selector.scroll_to(TimeField::Minute, height() * 30.0, t0 + SETTLE);
        selector.poll(t0 + SETTLE + DEBOUNCE);

        assert_eq!(selector.confirm(), time(8, 30));
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut selector = Selector::new(&config(), time(8, 0));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);
        selector.scroll_to(TimeField::Hour, height() * 3.0, t0 + SETTLE);

        // A second open while already open must not reset anything.
        selector.open(t0 + SETTLE + Duration::from_millis(10));
        let events = selector.poll(t0 + SETTLE + DEBOUNCE);
        assert_eq!(changed_values(&events), vec!["03:00".to_owned()]);
    }

    #[test]
    fn test_committed_indices_always_in_range() {
        let mut selector = Selector::new(&config(), time(23, 59));
        let t0 = Instant::now();
        selector.open(t0);
        selector.poll(t0 + SETTLE);

        let h = height();
        selector.scroll_to(TimeField::Hour, h * 99.0, t0 + SETTLE);
        selector.scroll_to(TimeField::Minute, -h * 7.0, t0 + SETTLE);
        selector.poll(t0 + SETTLE + DEBOUNCE);

        assert!(selector.wheel(TimeField::Hour).committed_index() <= 23);
        assert!(selector.wheel(TimeField::Minute).committed_index() <= 59);
        assert_eq!(selector.value(), time(23, 0));
    }
}
