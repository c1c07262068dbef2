//! Scene-clock timer tasks.
//!
//! A [`TimerTask`] is a time window bound to its scene's clock rather than to
//! wall-clock time. While the window is open each frame fires `on_tick`; once
//! it closes the task fires `on_timeout` and flags itself for removal.
//! Timer notifications happen *before* the scene's behaviors are advanced.
//!
//! Callbacks are run by the owning [`Scene`], which lends itself to them, so a
//! callback may reset or cancel any timer, create new ones or start a
//! transition.

use super::Scene;
use std::fmt;

/// Callback invoked with `(scene, scene_time, elapsed, id)`.
///
/// `elapsed` is `scene_time - start_time` and `id` is the task that fired,
/// so the callback can [`reset`](Scene::reset_timer) or
/// [`cancel`](Scene::cancel_timer) it through the scene.
pub type TimerCallback = Box<dyn FnMut(&mut Scene, f64, f64, TimerId)>;

/// Sequential identifier assigned by the owning scene.
///
/// Handles are only good for asking the scene to reset or cancel the task;
/// they never remove it from the registry directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub(crate) u64);

impl TimerId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Which callback a task wants fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
    Timeout,
    Cancel,
}

/// A single time-windowed callback unit.
///
/// Build one with [`TimerTask::new`] and hand it to
/// [`Scene::create_timer`], which assigns its id.
///
/// Once flagged for removal (by timing out or by being cancelled) the scene
/// stops advancing it and reclaims it at the end of the frame. Cancelling
/// twice is not guarded against: `on_cancel` simply fires again.
pub struct TimerTask {
    pub(crate) id: TimerId,
    start_time: f64,
    duration: f64,
    pub(crate) created_at: f64,
    on_timeout: Option<TimerCallback>,
    on_tick: Option<TimerCallback>,
    on_cancel: Option<TimerCallback>,
    remove: bool,
}

impl TimerTask {
    /// Create a task that opens at `start_time` and lasts `duration`.
    ///
    /// Negative durations are not validated; such a task times out on its
    /// first check.
    pub fn new(start_time: f64, duration: f64) -> Self {
        Self {
            id: TimerId(0),
            start_time,
            duration,
            created_at: 0.0,
            on_timeout: None,
            on_tick: None,
            on_cancel: None,
            remove: false,
        }
    }

    /// Create a task with all callbacks at once.
    pub fn create(
        start_time: f64,
        duration: f64,
        on_timeout: Option<TimerCallback>,
        on_tick: Option<TimerCallback>,
        on_cancel: Option<TimerCallback>,
    ) -> Self {
        Self {
            on_timeout,
            on_tick,
            on_cancel,
            ..Self::new(start_time, duration)
        }
    }

    pub fn on_timeout<F: FnMut(&mut Scene, f64, f64, TimerId) + 'static>(mut self, f: F) -> Self {
        self.on_timeout = Some(Box::new(f));
        self
    }

    pub fn on_tick<F: FnMut(&mut Scene, f64, f64, TimerId) + 'static>(mut self, f: F) -> Self {
        self.on_tick = Some(Box::new(f));
        self
    }

    pub fn on_cancel<F: FnMut(&mut Scene, f64, f64, TimerId) + 'static>(mut self, f: F) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Scene time at which the task was registered.
    pub fn created_at(&self) -> f64 {
        self.created_at
    }

    /// Whether the task is waiting to be reclaimed.
    pub fn is_flagged(&self) -> bool {
        self.remove
    }

    /// Advance the task to scene time `time`.
    ///
    /// Returns the event due and the elapsed time. A closed window flags the
    /// task. The scene fires the matching callback.
    pub fn check_task(&mut self, time: f64) -> (TimerEvent, f64) {
        let elapsed = time - self.start_time;
        if elapsed >= self.duration {
            self.remove = true;
            (TimerEvent::Timeout, elapsed)
        } else {
            (TimerEvent::Tick, elapsed)
        }
    }

    /// Reopen the window starting at `time`. Duration and callbacks are kept.
    pub fn reset(&mut self, time: f64) -> &mut Self {
        self.remove = false;
        self.start_time = time;
        self
    }

    /// Flag the task for removal and return the elapsed time to report to
    /// `on_cancel`.
    pub fn cancel(&mut self, scene_time: f64) -> f64 {
        self.remove = true;
        scene_time - self.start_time
    }

    fn slot(&mut self, event: TimerEvent) -> &mut Option<TimerCallback> {
        match event {
            TimerEvent::Timeout => &mut self.on_timeout,
            TimerEvent::Tick => &mut self.on_tick,
            TimerEvent::Cancel => &mut self.on_cancel,
        }
    }

    /// Lend out a callback for the duration of a call.
    pub(crate) fn take_callback(&mut self, event: TimerEvent) -> Option<TimerCallback> {
        self.slot(event).take()
    }

    /// Put a lent callback back unless the slot was refilled meanwhile.
    pub(crate) fn restore_callback(&mut self, event: TimerEvent, callback: TimerCallback) {
        let slot = self.slot(event);
        if slot.is_none() {
            *slot = Some(callback);
        }
    }
}

impl fmt::Debug for TimerTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerTask")
            .field("id", &self.id)
            .field("start_time", &self.start_time)
            .field("duration", &self.duration)
            .field("created_at", &self.created_at)
            .field("remove", &self.remove)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> TimerCallback {
        Box::new(|_: &mut Scene, _: f64, _: f64, _: TimerId| {})
    }

    #[test]
    fn inside_window_only_ticks() {
        let mut task = TimerTask::new(100.0, 50.0);
        assert_eq!(task.check_task(120.0), (TimerEvent::Tick, 20.0));
        assert_eq!(task.check_task(149.0), (TimerEvent::Tick, 49.0));
        assert!(!task.is_flagged());
    }

    #[test]
    fn window_end_times_out_and_flags() {
        let mut task = TimerTask::new(100.0, 50.0);
        assert_eq!(task.check_task(150.0), (TimerEvent::Timeout, 50.0));
        assert!(task.is_flagged());
    }

    #[test]
    fn before_start_ticks_with_negative_elapsed() {
        let mut task = TimerTask::new(100.0, 50.0);
        assert_eq!(task.check_task(40.0), (TimerEvent::Tick, -60.0));
    }

    #[test]
    fn negative_duration_times_out_immediately() {
        let mut task = TimerTask::new(0.0, -10.0);
        assert_eq!(task.check_task(0.0).0, TimerEvent::Timeout);
    }

    #[test]
    fn cancel_flags_and_reports_elapsed() {
        let mut task = TimerTask::new(10.0, 100.0);
        assert_eq!(task.cancel(35.0), 25.0);
        assert!(task.is_flagged());
    }

    #[test]
    fn reset_revives_timed_out_task() {
        let mut task = TimerTask::new(0.0, 10.0);
        task.check_task(10.0);
        assert!(task.is_flagged());

        task.reset(100.0);
        assert!(!task.is_flagged());
        assert_eq!(task.start_time(), 100.0);
        assert_eq!(task.duration(), 10.0);

        assert_eq!(task.check_task(105.0), (TimerEvent::Tick, 5.0));
        assert_eq!(task.check_task(110.0), (TimerEvent::Timeout, 10.0));
    }

    #[test]
    fn reset_revives_cancelled_task() {
        let mut task = TimerTask::new(0.0, 50.0);
        task.cancel(20.0);
        assert!(task.is_flagged());

        task.reset(30.0);
        assert!(!task.is_flagged());
        assert_eq!(task.check_task(40.0), (TimerEvent::Tick, 10.0));
        assert!(!task.is_flagged());
        assert_eq!(task.check_task(80.0), (TimerEvent::Timeout, 50.0));
    }

    #[test]
    fn reset_moves_live_window() {
        let mut task = TimerTask::new(0.0, 50.0);
        task.check_task(40.0);
        task.reset(40.0);
        assert_eq!(task.check_task(60.0), (TimerEvent::Tick, 20.0));
    }

    #[test]
    fn lent_callback_is_restored_only_into_empty_slot() {
        let mut task = TimerTask::new(0.0, 10.0).on_tick(|_, _, _, _| {});
        let first = task.take_callback(TimerEvent::Tick).unwrap();
        assert!(task.take_callback(TimerEvent::Tick).is_none());

        task.restore_callback(TimerEvent::Tick, first);
        assert!(task.on_tick.is_some());

        task.restore_callback(TimerEvent::Cancel, noop());
        assert!(task.on_cancel.is_some());
        assert!(task.on_timeout.is_none());
    }

    #[test]
    fn create_stores_every_callback() {
        let mut task = TimerTask::create(
            0.0,
            10.0,
            Some(noop()),
            Some(noop()),
            Some(noop()),
        );
        for event in [TimerEvent::Timeout, TimerEvent::Tick, TimerEvent::Cancel] {
            assert!(task.take_callback(event).is_some());
        }
    }
}
