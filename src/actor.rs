//! Actor state and the animatable container contract.
//!
//! Behaviors write visual properties into an [`ActorState`]. An
//! [`ActorContainer`] owns a list of behaviors plus child nodes and advances
//! both once per frame.

use crate::anchor::Anchor;
use crate::behavior::{Behavior, BehaviorStatus};
use crate::draw2d::{Color, Director, Rect};
use glam::Vec2;

/// Visual properties of a node in the scene graph.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    /// Offset from the parent origin.
    pub position: Vec2,
    pub size: Vec2,
    pub scale: Vec2,
    /// Pivot used for scaling.
    pub scale_anchor: Anchor,
    /// Rotation in radians.
    pub rotation: f32,
    /// Pivot used for rotation.
    pub rotation_anchor: Anchor,
    pub alpha: f32,
    pub fill_color: Option<Color>,
    pub expired: bool,
    /// Last time this node was animated at.
    pub time: f64,
}

impl Default for ActorState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            scale: Vec2::ONE,
            scale_anchor: Anchor::Center,
            rotation: 0.0,
            rotation_anchor: Anchor::Center,
            alpha: 1.0,
            fill_color: None,
            expired: false,
            time: 0.0,
        }
    }
}

impl ActorState {
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ..Self::default()
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Bounds of this node in parent space.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }
}

/// A node that is advanced and painted once per frame.
pub trait Animatable {
    fn animate(&mut self, director: &mut dyn Director, time: f64);

    fn paint(&self, director: &mut dyn Director, time: f64);

    fn state(&self) -> &ActorState;
}

/// Generic container node: own behaviors plus child nodes.
#[derive(Default)]
pub struct ActorContainer {
    pub state: ActorState,
    behaviors: Vec<Box<dyn Behavior>>,
    children: Vec<Box<dyn Animatable>>,
}

impl ActorContainer {
    pub fn new(state: ActorState) -> Self {
        Self {
            state,
            behaviors: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) {
        self.behaviors.push(behavior);
    }

    /// Drop every behavior without notifying anyone.
    pub fn empty_behavior_list(&mut self) {
        self.behaviors.clear();
    }

    pub fn add_child(&mut self, child: Box<dyn Animatable>) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Box<dyn Animatable>] {
        &self.children
    }

    /// Mark this node expired. Generic actors also rewind their clock.
    pub fn set_expired(&mut self, expired: bool) {
        self.state.expired = expired;
        if expired {
            self.state.time = 0.0;
        }
    }

    /// Apply behaviors in insertion order, then animate children.
    ///
    /// Returns the indices of behaviors that reported expiry on this frame.
    /// Expired nodes are left untouched.
    pub fn advance(&mut self, director: &mut dyn Director, time: f64) -> Vec<usize> {
        let mut expired = Vec::new();
        if self.state.expired {
            return expired;
        }

        self.state.time = time;
        for (index, behavior) in self.behaviors.iter_mut().enumerate() {
            if behavior.apply(time, &mut self.state) == BehaviorStatus::Expired {
                expired.push(index);
            }
        }

        for child in &mut self.children {
            child.animate(director, time);
        }

        expired
    }

    /// Paint children in insertion order.
    pub fn paint_children(&self, director: &mut dyn Director, time: f64) {
        for child in &self.children {
            child.paint(director, time);
        }
    }
}

impl Animatable for ActorContainer {
    fn animate(&mut self, director: &mut dyn Director, time: f64) {
        self.advance(director, time);
    }

    fn paint(&self, director: &mut dyn Director, time: f64) {
        if let Some(color) = self.state.fill_color {
            director
                .canvas()
                .fill_rect(self.state.bounds(), color.faded(self.state.alpha));
        }
        self.paint_children(director, time);
    }

    fn state(&self) -> &ActorState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::AlphaBehavior;
    use crate::draw2d::testing::TestDirector;

    #[test]
    fn advance_applies_behaviors_and_reports_expiry() {
        let mut director = TestDirector::default();
        let mut actor = ActorContainer::new(ActorState::with_size(10.0, 10.0));
        actor.add_behavior(Box::new(AlphaBehavior::new(1.0, 0.0).frame_time(0.0, 100.0)));

        assert!(actor.advance(&mut director, 50.0).is_empty());
        assert!((actor.state.alpha - 0.5).abs() < 1e-5);

        assert_eq!(actor.advance(&mut director, 100.0), vec![0]);
        assert_eq!(actor.state.alpha, 0.0);

        // Expiry is reported only once.
        assert!(actor.advance(&mut director, 150.0).is_empty());
    }

    #[test]
    fn children_are_animated_with_parent_time() {
        let mut director = TestDirector::default();
        let mut parent = ActorContainer::default();
        let mut child = ActorContainer::default();
        child.add_behavior(Box::new(AlphaBehavior::new(0.0, 1.0).frame_time(0.0, 10.0)));
        parent.add_child(Box::new(child));

        parent.advance(&mut director, 20.0);
        assert_eq!(parent.children()[0].state().alpha, 1.0);
        assert_eq!(parent.children()[0].state().time, 20.0);
    }

    #[test]
    fn expired_container_is_frozen() {
        let mut director = TestDirector::default();
        let mut actor = ActorContainer::default();
        actor.add_behavior(Box::new(AlphaBehavior::new(1.0, 0.0).frame_time(0.0, 10.0)));
        actor.set_expired(true);

        assert!(actor.advance(&mut director, 20.0).is_empty());
        assert_eq!(actor.state.alpha, 1.0);
        assert_eq!(actor.state.time, 0.0);
    }

    #[test]
    fn paint_fills_bounds_with_faded_color() {
        let mut director = TestDirector::default();
        let mut actor = ActorContainer::new(ActorState::with_size(4.0, 2.0));
        actor.state.fill_color = Some(Color::WHITE);
        actor.state.alpha = 0.5;

        actor.paint(&mut director, 0.0);
        assert_eq!(
            director.canvas.fills,
            vec![(Rect::new(0.0, 0.0, 4.0, 2.0), Color::WHITE.faded(0.5))]
        );
    }
}
