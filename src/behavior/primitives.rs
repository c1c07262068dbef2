//! Single-property behaviors: translate, scale, rotate and fade.

use super::{Behavior, BehaviorClock, BehaviorFrame, BehaviorStatus};
use crate::actor::ActorState;
use crate::anchor::Anchor;
use crate::easing::Easing;
use crate::path::LinearPath;
use glam::Vec2;

macro_rules! clock_accessors {
    () => {
        fn frame(&self) -> BehaviorFrame {
            self.clock.frame
        }

        fn set_frame_time(&mut self, start: f64, duration: f64) {
            self.clock.frame = BehaviorFrame::new(start, duration);
        }

        fn set_interpolator(&mut self, easing: Option<Easing>) {
            self.clock.easing = easing;
        }

        fn is_expired(&self) -> bool {
            self.clock.expired
        }
    };
}

macro_rules! builder_methods {
    () => {
        /// Set the active window.
        pub fn frame_time(mut self, start: f64, duration: f64) -> Self {
            self.clock.frame = BehaviorFrame::new(start, duration);
            self
        }

        /// Set the interpolation curve.
        pub fn interpolator(mut self, easing: Option<Easing>) -> Self {
            self.clock.easing = easing;
            self
        }
    };
}

/// Moves an actor along a [`LinearPath`].
#[derive(Clone, Debug)]
pub struct PathBehavior {
    clock: BehaviorClock,
    pub path: LinearPath,
}

impl PathBehavior {
    pub fn new(path: LinearPath) -> Self {
        Self {
            clock: BehaviorClock::default(),
            path,
        }
    }

    builder_methods!();
}

impl Behavior for PathBehavior {
    clock_accessors!();

    fn apply(&mut self, time: f64, actor: &mut ActorState) -> BehaviorStatus {
        let step = self.clock.step(time);
        if let Some(t) = step.progress {
            actor.position = self.path.position(t);
        }
        step.status
    }
}

/// Scales an actor around an anchor.
#[derive(Clone, Debug)]
pub struct ScaleBehavior {
    clock: BehaviorClock,
    pub start_scale: Vec2,
    pub end_scale: Vec2,
    pub anchor: Anchor,
}

impl ScaleBehavior {
    pub fn new(start_scale: Vec2, end_scale: Vec2, anchor: Anchor) -> Self {
        Self {
            clock: BehaviorClock::default(),
            start_scale,
            end_scale,
            anchor,
        }
    }

    builder_methods!();
}

impl Behavior for ScaleBehavior {
    clock_accessors!();

    fn apply(&mut self, time: f64, actor: &mut ActorState) -> BehaviorStatus {
        let step = self.clock.step(time);
        if let Some(t) = step.progress {
            actor.scale = self.start_scale.lerp(self.end_scale, t);
            actor.scale_anchor = self.anchor;
        }
        step.status
    }
}

/// Rotates an actor around an anchor. Angles are in radians.
#[derive(Clone, Debug)]
pub struct RotateBehavior {
    clock: BehaviorClock,
    pub start_angle: f32,
    pub end_angle: f32,
    pub anchor: Anchor,
}

impl RotateBehavior {
    pub fn new(start_angle: f32, end_angle: f32, anchor: Anchor) -> Self {
        Self {
            clock: BehaviorClock::default(),
            start_angle,
            end_angle,
            anchor,
        }
    }

    builder_methods!();
}

impl Behavior for RotateBehavior {
    clock_accessors!();

    fn apply(&mut self, time: f64, actor: &mut ActorState) -> BehaviorStatus {
        let step = self.clock.step(time);
        if let Some(t) = step.progress {
            actor.rotation = self.start_angle + (self.end_angle - self.start_angle) * t;
            actor.rotation_anchor = self.anchor;
        }
        step.status
    }
}

/// Fades an actor's alpha.
#[derive(Clone, Debug)]
pub struct AlphaBehavior {
    clock: BehaviorClock,
    pub start_alpha: f32,
    pub end_alpha: f32,
}

impl AlphaBehavior {
    pub fn new(start_alpha: f32, end_alpha: f32) -> Self {
        Self {
            clock: BehaviorClock::default(),
            start_alpha,
            end_alpha,
        }
    }

    /// Fade in (0 to 1) or out (1 to 0) over `[0, duration]`.
    pub fn fade(duration: f64, fade_in: bool) -> Self {
        let (start, end) = if fade_in { (0.0, 1.0) } else { (1.0, 0.0) };
        Self::new(start, end).frame_time(0.0, duration)
    }

    builder_methods!();
}

impl Behavior for AlphaBehavior {
    clock_accessors!();

    fn apply(&mut self, time: f64, actor: &mut ActorState) -> BehaviorStatus {
        let step = self.clock.step(time);
        if let Some(t) = step.progress {
            actor.alpha = self.start_alpha + (self.end_alpha - self.start_alpha) * t;
        }
        step.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn path_behavior_lands_on_end_point() {
        let mut actor = ActorState::default();
        let mut pb =
            PathBehavior::new(LinearPath::linear(0.0, -300.0, 0.0, 0.0)).frame_time(0.0, 500.0);

        assert_eq!(pb.apply(0.0, &mut actor), BehaviorStatus::Running);
        assert_eq!(actor.position, Vec2::new(0.0, -300.0));

        pb.apply(250.0, &mut actor);
        assert_eq!(actor.position, Vec2::new(0.0, -150.0));

        // A large jump still writes the final position.
        assert_eq!(pb.apply(10_000.0, &mut actor), BehaviorStatus::Expired);
        assert_eq!(actor.position, Vec2::ZERO);
    }

    #[test]
    fn scale_behavior_sets_anchor() {
        let mut actor = ActorState::default();
        let mut sb = ScaleBehavior::new(Vec2::new(1.0, 0.0), Vec2::ONE, Anchor::Top)
            .frame_time(0.0, 100.0);

        sb.apply(50.0, &mut actor);
        assert_eq!(actor.scale, Vec2::new(1.0, 0.5));
        assert_eq!(actor.scale_anchor, Anchor::Top);
    }

    #[test]
    fn rotate_behavior_interpolates_angle() {
        let mut actor = ActorState::default();
        let mut rb = RotateBehavior::new(PI, 0.0, Anchor::TopLeft).frame_time(0.0, 100.0);

        rb.apply(25.0, &mut actor);
        assert!((actor.rotation - PI * 0.75).abs() < 1e-5);
        assert_eq!(actor.rotation_anchor, Anchor::TopLeft);
    }

    #[test]
    fn pending_behavior_leaves_actor_untouched() {
        let mut actor = ActorState::default();
        let mut ab = AlphaBehavior::fade(100.0, true).frame_time(50.0, 100.0);

        assert_eq!(ab.apply(10.0, &mut actor), BehaviorStatus::Pending);
        assert_eq!(actor.alpha, 1.0);
    }

    #[test]
    fn fade_direction() {
        let fade_in = AlphaBehavior::fade(100.0, true);
        assert_eq!((fade_in.start_alpha, fade_in.end_alpha), (0.0, 1.0));
        let fade_out = AlphaBehavior::fade(100.0, false);
        assert_eq!((fade_out.start_alpha, fade_out.end_alpha), (1.0, 0.0));
        assert_eq!(fade_out.frame(), BehaviorFrame::new(0.0, 100.0));
    }

    #[test]
    fn interpolator_is_applied() {
        let mut actor = ActorState::default();
        let mut ab = AlphaBehavior::new(0.0, 1.0)
            .frame_time(0.0, 100.0)
            .interpolator(Some(Easing::EaseIn));

        ab.apply(50.0, &mut actor);
        assert!((actor.alpha - 0.25).abs() < 1e-6);
    }
}
