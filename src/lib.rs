//! # Hoplite Stage
//!
//! **Scene lifecycle engine for Hoplite: scene-clock timers and scene-switch transitions.**
//!
//! Everything here is driven by one external tick per frame. Nothing runs on
//! its own thread and nothing reads the wall clock: the orchestrator passes the
//! scene time into [`Scene::animate`] and the scene advances its timers and its
//! transition from that value alone.
//!
//! ## Quick Start
//!
//! ```
//! use hoplite_stage::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! struct NullCanvas;
//!
//! impl Canvas for NullCanvas {
//!     fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
//! }
//!
//! impl Director for NullCanvas {
//!     fn canvas(&mut self) -> &mut dyn Canvas {
//!         self
//!     }
//! }
//!
//! let mut director = NullCanvas;
//! let mut scene = Scene::new(SceneConfig::new().size(800.0, 600.0));
//!
//! let done = Rc::new(Cell::new(false));
//! let flag = done.clone();
//! scene.create_timer(TimerTask::new(0.0, 100.0).on_timeout(move |_, _, _, _| flag.set(true)));
//!
//! scene.ease_in(&SceneTransition::scale(300.0, Anchor::Center).alpha(true))?;
//!
//! scene.animate(&mut director, 50.0);
//! scene.animate(&mut director, 150.0);
//! assert!(done.get());
//! assert_eq!(scene.timer_count(), 0);
//! # Ok::<(), TransitionError>(())
//! ```
//!
//! ## Pieces
//!
//! - [`Scene`] owns the timer registry and the transition slot.
//! - [`TimerTask`] is a time window with tick / timeout / cancel callbacks.
//! - [`Behavior`] implementations animate [`ActorState`] properties;
//!   [`ContainerBehavior`] groups them and reports completion once.
//! - [`Canvas`] and [`Director`] are the seams to the rendering side.

mod actor;
mod anchor;
pub mod behavior;
mod draw2d;
mod easing;
mod path;
pub mod scene;

pub use actor::{ActorContainer, ActorState, Animatable};
pub use anchor::{Anchor, AnchorCode};
pub use behavior::{
    AlphaBehavior, Behavior, BehaviorFrame, BehaviorStatus, ContainerBehavior, PathBehavior,
    RotateBehavior, ScaleBehavior,
};
pub use draw2d::{Canvas, Color, Director, Rect};
pub use easing::Easing;
pub use path::LinearPath;
pub use scene::{
    EaseKind, EaseListener, ListenerId, Scene, SceneConfig, SceneTransition, TimerCallback,
    TimerEvent, TimerId, TimerTask, TransitionError,
};

// Re-export glam math types for convenience
pub use glam::Vec2;
