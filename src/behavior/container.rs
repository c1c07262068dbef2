//! Composite behavior that advances its children together.

use super::{Behavior, BehaviorFrame, BehaviorStatus};
use crate::actor::ActorState;
use crate::easing::Easing;

/// A group of behaviors sharing one time base.
///
/// Child frame times are relative to the container's own start. The container
/// reports [`BehaviorStatus::Expired`] exactly once, on the frame where every
/// child has finished its window. An empty container expires at the end of
/// its own window.
#[derive(Default)]
pub struct ContainerBehavior {
    frame: BehaviorFrame,
    behaviors: Vec<Box<dyn Behavior>>,
    expired: bool,
}

impl ContainerBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) {
        self.behaviors.push(behavior);
    }
}

impl Behavior for ContainerBehavior {
    fn frame(&self) -> BehaviorFrame {
        self.frame
    }

    fn set_frame_time(&mut self, start: f64, duration: f64) {
        self.frame = BehaviorFrame::new(start, duration);
    }

    /// Applies the curve to every child.
    fn set_interpolator(&mut self, easing: Option<Easing>) {
        for behavior in &mut self.behaviors {
            behavior.set_interpolator(easing);
        }
    }

    fn apply(&mut self, time: f64, actor: &mut ActorState) -> BehaviorStatus {
        if self.expired {
            return BehaviorStatus::Finished;
        }
        if time < self.frame.start {
            return BehaviorStatus::Pending;
        }

        let local = time - self.frame.start;
        for behavior in &mut self.behaviors {
            behavior.apply(local, actor);
        }

        let done = if self.behaviors.is_empty() {
            time >= self.frame.end()
        } else {
            self.behaviors.iter().all(|b| b.is_expired())
        };

        if done {
            self.expired = true;
            BehaviorStatus::Expired
        } else {
            BehaviorStatus::Running
        }
    }

    fn is_expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{AlphaBehavior, PathBehavior};
    use crate::path::LinearPath;
    use glam::Vec2;

    fn fade_and_slide(start: f64) -> ContainerBehavior {
        let mut container = ContainerBehavior::new();
        container.add_behavior(Box::new(AlphaBehavior::fade(100.0, true)));
        container.add_behavior(Box::new(
            PathBehavior::new(LinearPath::linear(100.0, 0.0, 0.0, 0.0)).frame_time(0.0, 200.0),
        ));
        container.set_frame_time(start, 200.0);
        container
    }

    #[test]
    fn children_run_relative_to_container_start() {
        let mut actor = ActorState::default();
        let mut container = fade_and_slide(1000.0);

        assert_eq!(container.apply(900.0, &mut actor), BehaviorStatus::Pending);
        assert_eq!(container.apply(1050.0, &mut actor), BehaviorStatus::Running);
        assert!((actor.alpha - 0.5).abs() < 1e-6);
        assert_eq!(actor.position, Vec2::new(75.0, 0.0));
    }

    #[test]
    fn expires_once_when_all_children_finish() {
        let mut actor = ActorState::default();
        let mut container = fade_and_slide(0.0);

        // Alpha is done, path is not.
        assert_eq!(container.apply(150.0, &mut actor), BehaviorStatus::Running);
        assert_eq!(actor.alpha, 1.0);

        assert_eq!(container.apply(200.0, &mut actor), BehaviorStatus::Expired);
        assert_eq!(actor.position, Vec2::ZERO);
        assert!(container.is_expired());

        assert_eq!(container.apply(300.0, &mut actor), BehaviorStatus::Finished);
    }

    #[test]
    fn empty_container_expires_at_window_end() {
        let mut actor = ActorState::default();
        let mut container = ContainerBehavior::new();
        container.set_frame_time(10.0, 20.0);

        assert_eq!(container.apply(20.0, &mut actor), BehaviorStatus::Running);
        assert_eq!(container.apply(30.0, &mut actor), BehaviorStatus::Expired);
    }

    #[test]
    fn interpolator_propagates_to_children() {
        let mut actor = ActorState::default();
        let mut container = ContainerBehavior::new();
        container.add_behavior(Box::new(AlphaBehavior::new(0.0, 1.0).frame_time(0.0, 100.0)));
        container.set_frame_time(0.0, 100.0);
        container.set_interpolator(Some(Easing::EaseIn));

        container.apply(50.0, &mut actor);
        assert!((actor.alpha - 0.25).abs() < 1e-6);
    }
}
