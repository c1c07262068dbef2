//! Scene lifecycle for Hoplite Stage.
//!
//! A [`Scene`] is the top-level container of the scene graph. It owns a clock
//! that the orchestrator advances once per frame, a registry of
//! [`TimerTask`]s bound to that clock, and at most one scene-switch
//! transition.
//!
//! # Frame order
//!
//! Each call to [`Scene::animate`] runs, in order:
//! 1. every live timer (newest first)
//! 2. the active transition and the child actors
//! 3. reclamation of timers that timed out or were cancelled
//!
//! # Example
//!
//! ```
//! use hoplite_stage::*;
//!
//! struct Screen(Vec<(Rect, Color)>);
//!
//! impl Canvas for Screen {
//!     fn fill_rect(&mut self, rect: Rect, color: Color) {
//!         self.0.push((rect, color));
//!     }
//! }
//!
//! impl Director for Screen {
//!     fn canvas(&mut self) -> &mut dyn Canvas {
//!         self
//!     }
//! }
//!
//! let mut screen = Screen(Vec::new());
//! let mut scene = Scene::new(SceneConfig::new().size(640.0, 480.0));
//!
//! // Blink every 250ms.
//! scene.create_timer(TimerTask::new(0.0, 250.0).on_timeout(|scene, time, _, id| {
//!     scene.reset_timer(id, time);
//! }));
//!
//! scene.set_ease_listener(|scene: &mut Scene, entering: bool| {
//!     if entering {
//!         scene.activated();
//!     }
//! });
//! scene.ease_translation_in(500.0, true, Anchor::Right, Some(Easing::EaseOut));
//!
//! for frame in 0..=30 {
//!     let time = frame as f64 * 1000.0 / 60.0;
//!     scene.animate(&mut screen, time);
//!     scene.paint(&mut screen, time);
//! }
//! assert!(scene.transition_finished());
//! ```

mod config;
mod scene;
mod sign;
mod timer;
mod transition;

pub use config::SceneConfig;
pub use scene::Scene;
pub use timer::{TimerCallback, TimerEvent, TimerId, TimerTask};
pub use transition::{EaseKind, EaseListener, ListenerId, SceneTransition, TransitionError};
