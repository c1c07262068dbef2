//! Time-windowed animators for actor properties.
//!
//! A [`Behavior`] maps a time window onto a visual property change. Primitive
//! behaviors drive one property each; [`ContainerBehavior`] groups several and
//! reports completion once all of them are done.

mod container;
mod primitives;

pub use container::ContainerBehavior;
pub use primitives::{AlphaBehavior, PathBehavior, RotateBehavior, ScaleBehavior};

use crate::actor::ActorState;
use crate::easing::Easing;

/// Outcome of applying a behavior at a given time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BehaviorStatus {
    /// The window has not started yet.
    Pending,
    /// Inside the window.
    Running,
    /// The window ended on this call. Reported exactly once.
    Expired,
    /// Already expired on an earlier call; nothing was applied.
    Finished,
}

/// Active window `[start, start + duration]` of a behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BehaviorFrame {
    pub start: f64,
    pub duration: f64,
}

impl BehaviorFrame {
    pub fn new(start: f64, duration: f64) -> Self {
        Self { start, duration }
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// A reusable time-interval-to-value animator.
pub trait Behavior {
    fn frame(&self) -> BehaviorFrame;

    fn set_frame_time(&mut self, start: f64, duration: f64);

    /// Shape progress with `easing`; `None` runs linearly.
    fn set_interpolator(&mut self, easing: Option<Easing>);

    /// Advance to `time`, writing the resulting value into `actor`.
    fn apply(&mut self, time: f64, actor: &mut ActorState) -> BehaviorStatus;

    fn is_expired(&self) -> bool;
}

/// Shared window bookkeeping for primitive behaviors.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BehaviorClock {
    pub frame: BehaviorFrame,
    pub easing: Option<Easing>,
    pub expired: bool,
}

/// A single clock step: status plus the eased progress to apply, if any.
pub(crate) struct Step {
    pub status: BehaviorStatus,
    pub progress: Option<f32>,
}

impl BehaviorClock {
    pub fn step(&mut self, time: f64) -> Step {
        if self.expired {
            return Step {
                status: BehaviorStatus::Finished,
                progress: None,
            };
        }
        if time < self.frame.start {
            return Step {
                status: BehaviorStatus::Pending,
                progress: None,
            };
        }
        if time >= self.frame.end() {
            self.expired = true;
            return Step {
                status: BehaviorStatus::Expired,
                progress: Some(1.0),
            };
        }

        let raw = ((time - self.frame.start) / self.frame.duration) as f32;
        Step {
            status: BehaviorStatus::Running,
            progress: Some(self.easing.unwrap_or_default().apply(raw)),
        }
    }
}
