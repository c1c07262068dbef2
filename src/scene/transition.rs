//! Scene-switch transition requests, errors and completion listeners.

use super::Scene;
use crate::anchor::{Anchor, AnchorCode};
use crate::easing::Easing;
use std::fmt;
use thiserror::Error;

/// Family of a scene-switch transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EaseKind {
    Rotation,
    Scale,
    Translate,
}

impl fmt::Display for EaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EaseKind::Rotation => "rotation",
            EaseKind::Scale => "scale",
            EaseKind::Translate => "translate",
        })
    }
}

/// Errors raised while setting up a transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The anchor code is not one of the known [`Anchor`] values.
    #[error("unknown {kind} anchor: {code}")]
    UnknownAnchor { kind: EaseKind, code: i32 },
}

/// Stored configuration for a scene-switch transition.
///
/// An orchestrator keeps one of these and applies it to the incoming scene
/// with [`Scene::ease_in`] and to the outgoing one with [`Scene::ease_out`].
///
/// # Example
///
/// ```
/// use hoplite_stage::{Anchor, Easing, SceneTransition};
///
/// let slide = SceneTransition::translate(500.0, Anchor::Left)
///     .alpha(true)
///     .interpolator(Easing::EaseOut);
/// assert!(slide.alpha);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTransition {
    pub kind: EaseKind,
    /// Length of the transition in scene milliseconds.
    pub duration: f64,
    /// Also fade the scene in or out.
    pub alpha: bool,
    pub anchor: AnchorCode,
    pub interpolator: Option<Easing>,
    /// Offset of the scale sub-behavior within the transition. Only used by [`EaseKind::Scale`].
    pub start_time: f64,
}

impl SceneTransition {
    fn with_kind(kind: EaseKind, duration: f64, anchor: impl Into<AnchorCode>) -> Self {
        Self {
            kind,
            duration,
            alpha: false,
            anchor: anchor.into(),
            interpolator: None,
            start_time: 0.0,
        }
    }

    /// Slide in from / out to the given edge.
    pub fn translate(duration: f64, anchor: impl Into<AnchorCode>) -> Self {
        Self::with_kind(EaseKind::Translate, duration, anchor)
    }

    /// Grow from / shrink to the given anchor.
    pub fn scale(duration: f64, anchor: impl Into<AnchorCode>) -> Self {
        Self::with_kind(EaseKind::Scale, duration, anchor)
    }

    /// Spin in from / out to a random half or quarter turn.
    pub fn rotation(duration: f64, anchor: impl Into<AnchorCode>) -> Self {
        Self::with_kind(EaseKind::Rotation, duration, anchor)
    }

    pub fn alpha(mut self, alpha: bool) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn interpolator(mut self, easing: Easing) -> Self {
        self.interpolator = Some(easing);
        self
    }

    pub fn start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }
}

impl Default for SceneTransition {
    fn default() -> Self {
        Self::translate(500.0, Anchor::Left)
    }
}

/// Token returned by [`Scene::add_ease_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Observer notified when a scene's transition has finished.
///
/// Implemented for any `FnMut(&mut Scene, bool)` closure. The scene is lent
/// mutably so the listener can schedule timers or start another transition.
pub trait EaseListener {
    fn ease_end(&mut self, scene: &mut Scene, is_entering: bool);
}

impl<F: FnMut(&mut Scene, bool)> EaseListener for F {
    fn ease_end(&mut self, scene: &mut Scene, is_entering: bool) {
        self(scene, is_entering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_anchor_message() {
        let err = TransitionError::UnknownAnchor {
            kind: EaseKind::Scale,
            code: 12,
        };
        assert_eq!(err.to_string(), "unknown scale anchor: 12");
    }

    #[test]
    fn builders_fill_request() {
        let t = SceneTransition::scale(300.0, 9)
            .alpha(true)
            .start_time(50.0)
            .interpolator(Easing::Bounce);
        assert_eq!(t.kind, EaseKind::Scale);
        assert_eq!(t.anchor, AnchorCode(9));
        assert_eq!(t.start_time, 50.0);
        assert_eq!(t.interpolator, Some(Easing::Bounce));
    }
}
