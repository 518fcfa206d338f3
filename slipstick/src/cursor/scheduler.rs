//! Throttled snapshot publication.
//!
//! The scheduler is the only stateful, consumer-facing piece of the
//! pipeline. It keeps two snapshots: `hot`, recomputed unconditionally on
//! every cycle, and `published`, which consumers observe. A cycle admits
//! `hot` into `published` only when the readings actually changed AND the
//! publish throttle allows it, so a drag gesture republishes at a bounded
//! rate while a cursor parked against the domain clamp never republishes at
//! all.
//!
//! # State Machine
//!
//! ```text
//! position event ──► rebuild hot ──► unchanged? ──► drop
//!                                  └► changed ──► throttled? ──► drop (hot stays fresh)
//!                                              └► admit ──► published + notify
//! ```
//!
//! The first publish is immediate; after that at most one publish goes out
//! per `publish_stride` cycles, so N consecutive reading-changing events
//! produce ⌈N / stride⌉ publishes.

use std::sync::Arc;

use crate::provider::ScaleDataProvider;

use super::builder::build_readings;
use super::readings::CursorReadings;

/// Default publish stride: one publish per three raw position events.
pub const DEFAULT_PUBLISH_STRIDE: u32 = 3;

/// Default rendered cursor width in device-independent pixels.
///
/// Must match the host's rendered cursor width, or the hairline coordinate
/// will be offset from what the user sees.
pub const DEFAULT_CURSOR_WIDTH_PX: f64 = 108.0;

/// Tuning knobs for the scheduler.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Publish at most one snapshot per this many cycles (default: 3).
    /// Values below 2 disable throttling.
    pub publish_stride: u32,
    /// Rendered cursor width in pixels (default: 108.0).
    pub cursor_width_px: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            publish_stride: DEFAULT_PUBLISH_STRIDE,
            cursor_width_px: DEFAULT_CURSOR_WIDTH_PX,
        }
    }
}

/// Subscriber callback invoked with every freshly published snapshot.
type ReadingsSubscriber = Box<dyn Fn(&CursorReadings) + Send>;

/// Mutable pipeline state, exclusively owned by one scheduler.
#[derive(Debug)]
struct PositionState {
    /// Last raw cursor left-edge coordinate, pixels.
    last_raw_left_px: f64,
    /// Slide offset observed on the last cycle, pixels.
    last_slide_offset_px: f64,
    /// Latest build result, updated unconditionally every cycle.
    hot: CursorReadings,
    /// What consumers observe; updated only when the gate admits it.
    published: CursorReadings,
    /// Cycles elapsed since the last publish.
    cycles_since_publish: u32,
    /// Whether anything was ever published.
    has_published: bool,
}

impl PositionState {
    fn new() -> Self {
        Self {
            last_raw_left_px: 0.0,
            last_slide_offset_px: 0.0,
            hot: CursorReadings::empty(),
            published: CursorReadings::empty(),
            cycles_since_publish: 0,
            has_published: false,
        }
    }
}

/// Recomputes readings on every position event and publishes them under the
/// stride/equality gate.
///
/// The scheduler is owned by its consumer and driven synchronously from the
/// host's event loop; there is no background work to cancel. Disabling the
/// feature reduces to not issuing further events.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use slipstick::{Instrument, InstrumentProvider, UpdateScheduler};
///
/// let provider = Arc::new(InstrumentProvider::new(Instrument::mannheim(), 1080.0));
/// let mut scheduler = UpdateScheduler::new(provider);
///
/// scheduler.position_changed(486.0);
/// let reading = scheduler.published().reading_for("D", slipstick::Side::Front);
/// assert!(reading.is_some());
/// ```
pub struct UpdateScheduler {
    config: SchedulerConfig,
    provider: Arc<dyn ScaleDataProvider>,
    state: PositionState,
    subscribers: Vec<ReadingsSubscriber>,
}

impl std::fmt::Debug for UpdateScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateScheduler")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("subscriber_count", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl UpdateScheduler {
    /// Create a scheduler with the default configuration.
    pub fn new(provider: Arc<dyn ScaleDataProvider>) -> Self {
        Self::with_config(provider, SchedulerConfig::default())
    }

    /// Create a scheduler with a custom configuration.
    pub fn with_config(provider: Arc<dyn ScaleDataProvider>, config: SchedulerConfig) -> Self {
        Self {
            config,
            provider,
            state: PositionState::new(),
            subscribers: Vec::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Register a callback for published snapshots.
    ///
    /// Subscribers run synchronously, in registration order, inside the
    /// cycle that published.
    pub fn subscribe(&mut self, subscriber: impl Fn(&CursorReadings) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Latest published snapshot; the empty sentinel before the first
    /// publish.
    pub fn published(&self) -> &CursorReadings {
        &self.state.published
    }

    /// Latest build result regardless of the publish gate.
    ///
    /// Full-fidelity view for consumers that need every cycle, such as a
    /// test harness; display consumers should watch [`published`](Self::published).
    pub fn hot(&self) -> &CursorReadings {
        &self.state.hot
    }

    /// Handle a cursor position event.
    ///
    /// Returns `true` when the cycle published a new snapshot.
    pub fn position_changed(&mut self, raw_left_px: f64) -> bool {
        self.state.last_raw_left_px = raw_left_px;
        self.cycle()
    }

    /// Re-run the pipeline at the last cursor position.
    ///
    /// Lets slide drags or instrument swaps update the readings while the
    /// cursor itself stays put; goes through the same publish gate as a
    /// position event.
    pub fn refresh(&mut self) -> bool {
        self.cycle()
    }

    /// One update cycle: rebuild `hot`, then run the publish gate.
    fn cycle(&mut self) -> bool {
        self.state.last_slide_offset_px = self.provider.slide_offset();
        self.state.hot = build_readings(
            self.state.last_raw_left_px,
            self.config.cursor_width_px,
            self.provider.as_ref(),
        );
        self.state.cycles_since_publish = self.state.cycles_since_publish.saturating_add(1);

        if self.state.hot.same_readings(&self.state.published) {
            tracing::trace!(
                raw_left_px = self.state.last_raw_left_px,
                "Cycle produced unchanged readings, not publishing"
            );
            return false;
        }

        let stride = self.config.publish_stride.max(1);
        if self.state.has_published && self.state.cycles_since_publish < stride {
            tracing::trace!(
                cycles_since_publish = self.state.cycles_since_publish,
                stride,
                "Readings changed but publish throttled"
            );
            return false;
        }

        self.state.published = self.state.hot.clone();
        self.state.cycles_since_publish = 0;
        self.state.has_published = true;
        tracing::debug!(
            position = self.state.published.cursor_position(),
            readings = self.state.published.len(),
            "Published cursor readings"
        );
        for subscriber in &self.subscribers {
            subscriber(&self.state.published);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::instrument::Instrument;
    use crate::provider::InstrumentProvider;
    use crate::scale::{Component, ScaleDefinition, ScaleLaw, Side};

    fn identity_instrument() -> Instrument {
        Instrument::new(
            "test",
            vec![ScaleDefinition::new(
                "C",
                "x",
                ScaleLaw::Linear,
                Side::Front,
                Component::StatorBottom,
            )],
        )
        .expect("valid test instrument")
    }

    fn scheduler_with_width(scale_width_px: f64) -> (UpdateScheduler, Arc<InstrumentProvider>) {
        let provider = Arc::new(InstrumentProvider::new(identity_instrument(), scale_width_px));
        let scheduler = UpdateScheduler::with_config(
            provider.clone(),
            SchedulerConfig {
                publish_stride: 3,
                cursor_width_px: 100.0,
            },
        );
        (scheduler, provider)
    }

    #[test]
    fn test_published_starts_as_empty_sentinel() {
        let (scheduler, _) = scheduler_with_width(1000.0);
        assert!(scheduler.published().is_empty());
        assert!(scheduler.hot().is_empty());
    }

    #[test]
    fn test_first_event_publishes_immediately() {
        let (mut scheduler, _) = scheduler_with_width(1000.0);
        assert!(scheduler.position_changed(400.0));

        let reading = scheduler.published().reading_for("C", Side::Front).unwrap();
        assert_eq!(reading.display_value, "0.450");
    }

    #[test]
    fn test_changing_events_publish_at_stride_rate() {
        let (mut scheduler, _) = scheduler_with_width(1000.0);

        let mut publishes = 0;
        for step in 0..9 {
            if scheduler.position_changed(step as f64 * 50.0) {
                publishes += 1;
            }
        }
        // ceil(9 / 3)
        assert_eq!(publishes, 3);
    }

    #[test]
    fn test_hot_tracks_every_cycle() {
        let (mut scheduler, _) = scheduler_with_width(1000.0);

        scheduler.position_changed(100.0);
        scheduler.position_changed(200.0);

        // Second event was throttled, but hot is current
        assert!((scheduler.hot().cursor_position() - 0.25).abs() < 1e-12);
        assert!((scheduler.published().cursor_position() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_identical_events_never_republish() {
        let (mut scheduler, _) = scheduler_with_width(1000.0);

        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();
        scheduler.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        for _ in 0..10 {
            scheduler.position_changed(400.0);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clamped_drag_does_not_republish() {
        let (mut scheduler, _) = scheduler_with_width(1000.0);

        // Park the hairline past the right edge: every reading is "—"
        scheduler.position_changed(2000.0);
        let published_after_first = scheduler.published().clone();

        let published = (0..6)
            .filter(|i| scheduler.position_changed(2000.0 + *i as f64 * 10.0))
            .count();

        // Position keeps changing but the readings stay undefined
        assert_eq!(published, 0);
        assert!(scheduler.published().same_readings(&published_after_first));
    }

    #[test]
    fn test_refresh_picks_up_slide_motion() {
        let instrument = Instrument::new(
            "test",
            vec![ScaleDefinition::new(
                "B",
                "x",
                ScaleLaw::Linear,
                Side::Front,
                Component::Slide,
            )],
        )
        .expect("valid test instrument");
        let provider = Arc::new(InstrumentProvider::new(instrument, 1000.0));
        let mut scheduler = UpdateScheduler::with_config(
            provider.clone(),
            SchedulerConfig {
                publish_stride: 1,
                cursor_width_px: 100.0,
            },
        );

        scheduler.position_changed(400.0);
        let before = scheduler.published().reading_for("B", Side::Front).unwrap().raw_value;

        provider.set_slide_offset(250.0);
        assert!(scheduler.refresh());
        let after = scheduler.published().reading_for("B", Side::Front).unwrap().raw_value;

        assert!((before - 0.45).abs() < 1e-12);
        assert!((after - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_stride_one_publishes_every_change() {
        let provider = Arc::new(InstrumentProvider::new(identity_instrument(), 1000.0));
        let mut scheduler = UpdateScheduler::with_config(
            provider,
            SchedulerConfig {
                publish_stride: 1,
                cursor_width_px: 100.0,
            },
        );

        let published = (0..5)
            .filter(|i| scheduler.position_changed(*i as f64 * 50.0))
            .count();
        assert_eq!(published, 5);
    }

    #[test]
    fn test_stride_zero_is_treated_as_one() {
        let provider = Arc::new(InstrumentProvider::new(identity_instrument(), 1000.0));
        let mut scheduler = UpdateScheduler::with_config(
            provider,
            SchedulerConfig {
                publish_stride: 0,
                cursor_width_px: 100.0,
            },
        );

        assert!(scheduler.position_changed(100.0));
        assert!(scheduler.position_changed(200.0));
    }

    #[test]
    fn test_subscribers_run_in_registration_order() {
        let (mut scheduler, _) = scheduler_with_width(1000.0);

        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            scheduler.subscribe(move |_| order.lock().push(tag));
        }

        scheduler.position_changed(400.0);
        assert_eq!(*order.lock(), ["first", "second", "third"]);
    }

    #[test]
    fn test_random_walk_respects_publish_bound() {
        use rand::Rng;

        let (mut scheduler, _) = scheduler_with_width(1000.0);
        let mut rng = rand::rng();

        let events = 100;
        let published = (0..events)
            .filter(|_| {
                let raw = rng.random_range(0.0..900.0);
                scheduler.position_changed(raw)
            })
            .count();

        // Never more than one publish per stride window
        assert!(published <= events / 3 + 1, "published {} times", published);
    }
}
