//! Scene definition: timer registry, transition composer and frame driver.

use super::config::SceneConfig;
use super::sign::SignSource;
use super::timer::{TimerEvent, TimerId, TimerTask};
use super::transition::{EaseKind, EaseListener, ListenerId, SceneTransition, TransitionError};
use crate::actor::{ActorContainer, ActorState, Animatable};
use crate::anchor::{Anchor, AnchorCode};
use crate::behavior::{
    AlphaBehavior, Behavior, ContainerBehavior, PathBehavior, RotateBehavior, ScaleBehavior,
};
use crate::draw2d::{Color, Director, Rect};
use crate::easing::Easing;
use crate::path::LinearPath;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};
use tracing::{debug, trace, warn};

/// Top-level, time-owning container of the scene graph.
///
/// At most one scene is fully active at a time; two coexist while a switch
/// transition runs. A scene owns:
/// - its clock, supplied each frame through [`animate`](Self::animate)
/// - a registry of [`TimerTask`]s bound to that clock
/// - at most one scene-switch transition, started with the `ease_*` methods
///
/// Generic behaviors cannot be attached to a scene directly; all scene-level
/// animation goes through the transition methods.
pub struct Scene {
    root: ActorContainer,
    fill_color: Option<Color>,
    time: f64,

    timers: Vec<TimerTask>,
    timer_sequence: u64,

    transition: Option<EaseKind>,
    transition_finished: bool,
    is_entering: bool,

    ease_listeners: Vec<(ListenerId, Box<dyn EaseListener>)>,
    listener_sequence: u64,
    notifying: bool,
    lent_listeners: Vec<ListenerId>,
    listeners_replaced: bool,
    detached_listeners: Vec<ListenerId>,

    on_activated: Option<Box<dyn FnMut(&mut Scene)>>,
    signs: SignSource,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let signs = match config.seed {
            Some(seed) => SignSource::seeded(seed),
            None => SignSource::from_entropy(),
        };
        Self {
            root: ActorContainer::new(ActorState::with_size(config.width, config.height)),
            fill_color: config.fill_color,
            time: 0.0,
            timers: Vec::new(),
            timer_sequence: 0,
            transition: None,
            transition_finished: false,
            is_entering: false,
            ease_listeners: Vec::new(),
            listener_sequence: 0,
            notifying: false,
            lent_listeners: Vec::new(),
            listeners_replaced: false,
            detached_listeners: Vec::new(),
            on_activated: None,
            signs,
        }
    }

    /// Current scene time, as last passed to [`animate`](Self::animate).
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn width(&self) -> f32 {
        self.root.state.width()
    }

    pub fn height(&self) -> f32 {
        self.root.state.height()
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.root.state.size = Vec2::new(width, height);
    }

    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    /// Visual state written by the active transition.
    pub fn state(&self) -> &ActorState {
        &self.root.state
    }

    pub fn add_child(&mut self, child: Box<dyn Animatable>) {
        self.root.add_child(child);
    }

    /// Ignored. Scene animation is driven exclusively by the `ease_*` methods.
    pub fn add_behavior(&mut self, _behavior: Box<dyn Behavior>) {
        trace!("ignoring behavior added directly to a scene");
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Register a timer task on this scene's clock and return its handle.
    pub fn create_timer(&mut self, mut task: TimerTask) -> TimerId {
        let id = TimerId(self.timer_sequence);
        self.timer_sequence += 1;
        task.id = id;
        task.created_at = self.time;
        debug!(
            timer = %id,
            start = task.start_time(),
            duration = task.duration(),
            "timer created"
        );
        self.timers.push(task);
        id
    }

    /// Advance every live timer, newest first.
    ///
    /// Only tasks registered and live when the pass starts are visited, each
    /// once. Callbacks may mutate the registry: timers they create wait for
    /// the next pass, and timers they cancel are skipped and reclaimed by
    /// [`remove_expired_timers`](Self::remove_expired_timers).
    pub fn check_timers(&mut self, time: f64) {
        let due: Vec<TimerId> = self
            .timers
            .iter()
            .rev()
            .filter(|task| !task.is_flagged())
            .map(TimerTask::id)
            .collect();
        for id in due {
            let Some(task) = self.timer_mut(id) else {
                continue;
            };
            if task.is_flagged() {
                continue;
            }
            let (event, elapsed) = task.check_task(time);
            if event == TimerEvent::Timeout {
                trace!(timer = %id, time, elapsed, "timer timed out");
            }
            self.fire_timer(id, event, time, elapsed);
        }
    }

    /// Evict every task flagged for removal.
    pub fn remove_expired_timers(&mut self) {
        let before = self.timers.len();
        self.timers.retain(|task| !task.is_flagged());
        let reclaimed = before - self.timers.len();
        if reclaimed > 0 {
            trace!(reclaimed, remaining = self.timers.len(), "expired timers removed");
        }
    }

    pub fn timer(&self, id: TimerId) -> Option<&TimerTask> {
        self.timers.iter().find(|task| task.id() == id)
    }

    /// Number of registered tasks, including flagged ones not yet reclaimed.
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Cancel a timer at the current scene time, firing its `on_cancel`
    /// immediately. Returns `false` if the task has already been reclaimed.
    pub fn cancel_timer(&mut self, id: TimerId) -> bool {
        let time = self.time;
        let Some(task) = self.timer_mut(id) else {
            return false;
        };
        let elapsed = task.cancel(time);
        trace!(timer = %id, time, "timer cancelled");
        self.fire_timer(id, TimerEvent::Cancel, time, elapsed);
        true
    }

    /// Restart a timer's window at `time`. Returns `false` if the task has
    /// already been reclaimed.
    pub fn reset_timer(&mut self, id: TimerId, time: f64) -> bool {
        match self.timer_mut(id) {
            Some(task) => {
                task.reset(time);
                true
            }
            None => false,
        }
    }

    fn timer_mut(&mut self, id: TimerId) -> Option<&mut TimerTask> {
        self.timers.iter_mut().find(|task| task.id() == id)
    }

    fn fire_timer(&mut self, id: TimerId, event: TimerEvent, time: f64, elapsed: f64) {
        // The callback is lent out so it can borrow the scene.
        let Some(mut callback) = self.timer_mut(id).and_then(|task| task.take_callback(event))
        else {
            return;
        };
        callback(self, time, elapsed, id);
        if let Some(task) = self.timer_mut(id) {
            task.restore_callback(event, callback);
        }
    }

    // ------------------------------------------------------------------
    // Frame driver
    // ------------------------------------------------------------------

    /// Advance the scene to `time`.
    ///
    /// Timers run first, then the active transition and child actors, then
    /// expired timers are reclaimed. Timers cancelled or created by a
    /// transition listener are therefore handled within the same frame.
    pub fn animate(&mut self, director: &mut dyn Director, time: f64) {
        self.time = time;
        self.check_timers(time);
        if !self.root.advance(director, time).is_empty() {
            self.behavior_expired();
        }
        self.remove_expired_timers();
    }

    /// Fill the whole scene with its background color, then paint children.
    pub fn paint(&self, director: &mut dyn Director, time: f64) {
        let color = self.fill_color.unwrap_or(Color::WHITE);
        director
            .canvas()
            .fill_rect(Rect::from_size(self.width(), self.height()), color);
        self.root.paint_children(director, time);
    }

    /// Mark the scene inactive or active again.
    ///
    /// Unlike generic actors, the scene's clock is left untouched.
    pub fn set_expired(&mut self, expired: bool) {
        self.root.state.expired = expired;
    }

    pub fn is_expired(&self) -> bool {
        self.root.state.expired
    }

    /// Set a callback to run when this scene becomes the current one.
    pub fn on_activated<F: FnMut(&mut Scene) + 'static>(&mut self, callback: F) {
        self.on_activated = Some(Box::new(callback));
    }

    /// Called by the orchestrator once the scene has been brought in.
    pub fn activated(&mut self) {
        if let Some(mut callback) = self.on_activated.take() {
            callback(self);
            if self.on_activated.is_none() {
                self.on_activated = Some(callback);
            }
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Whether the current (or last) transition brings the scene in.
    pub fn is_entering(&self) -> bool {
        self.is_entering
    }

    /// Family of the installed transition, if any.
    pub fn transition(&self) -> Option<EaseKind> {
        self.transition
    }

    pub fn has_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether the installed transition has completed.
    pub fn transition_finished(&self) -> bool {
        self.transition_finished
    }

    /// Apply a stored transition to bring this scene in.
    pub fn ease_in(&mut self, transition: &SceneTransition) -> Result<(), TransitionError> {
        self.ease(transition, true)
    }

    /// Apply a stored transition to take this scene away.
    pub fn ease_out(&mut self, transition: &SceneTransition) -> Result<(), TransitionError> {
        self.ease(transition, false)
    }

    pub fn ease(
        &mut self,
        transition: &SceneTransition,
        is_entering: bool,
    ) -> Result<(), TransitionError> {
        let SceneTransition {
            kind,
            duration,
            alpha,
            anchor,
            interpolator,
            start_time,
        } = *transition;
        match kind {
            EaseKind::Translate => {
                self.ease_translation(duration, alpha, anchor, is_entering, interpolator);
                Ok(())
            }
            EaseKind::Scale => self.ease_scale(
                start_time,
                duration,
                alpha,
                anchor,
                is_entering,
                interpolator,
            ),
            EaseKind::Rotation => {
                self.ease_rotation(duration, alpha, anchor, is_entering, interpolator)
            }
        }
    }

    pub fn ease_translation_in(
        &mut self,
        duration: f64,
        alpha: bool,
        anchor: impl Into<AnchorCode>,
        interpolator: Option<Easing>,
    ) {
        self.ease_translation(duration, alpha, anchor, true, interpolator);
    }

    pub fn ease_translation_out(
        &mut self,
        duration: f64,
        alpha: bool,
        anchor: impl Into<AnchorCode>,
        interpolator: Option<Easing>,
    ) {
        self.ease_translation(duration, alpha, anchor, false, interpolator);
    }

    /// Slide the scene in from, or out to, one of its edges.
    ///
    /// Anchor codes outside `[Top, Right]` are clamped into that range
    /// instead of being rejected, so this never fails.
    pub fn ease_translation(
        &mut self,
        duration: f64,
        alpha: bool,
        anchor: impl Into<AnchorCode>,
        is_entering: bool,
        interpolator: Option<Easing>,
    ) {
        let anchor = anchor.into().clamp_to_edge();
        let (w, h) = (self.width(), self.height());
        let offscreen = match anchor {
            Anchor::Top => Vec2::new(0.0, -h),
            Anchor::Bottom => Vec2::new(0.0, h),
            Anchor::Left => Vec2::new(-w, 0.0),
            _ => Vec2::new(w, 0.0),
        };
        let path = if is_entering {
            LinearPath::new(offscreen, Vec2::ZERO)
        } else {
            LinearPath::new(Vec2::ZERO, offscreen)
        };

        let behavior = PathBehavior::new(path)
            .frame_time(0.0, duration)
            .interpolator(interpolator);
        self.install_transition(
            EaseKind::Translate,
            anchor,
            duration,
            alpha,
            is_entering,
            Box::new(behavior),
        );
    }

    pub fn ease_scale_in(
        &mut self,
        start_time: f64,
        duration: f64,
        alpha: bool,
        anchor: impl Into<AnchorCode>,
        interpolator: Option<Easing>,
    ) -> Result<(), TransitionError> {
        self.ease_scale(start_time, duration, alpha, anchor, true, interpolator)
    }

    pub fn ease_scale_out(
        &mut self,
        start_time: f64,
        duration: f64,
        alpha: bool,
        anchor: impl Into<AnchorCode>,
        interpolator: Option<Easing>,
    ) -> Result<(), TransitionError> {
        self.ease_scale(start_time, duration, alpha, anchor, false, interpolator)
    }

    /// Grow the scene from, or shrink it into, an anchor.
    ///
    /// Center and corner anchors scale both axes; edge anchors scale only
    /// the axis perpendicular to the edge. `start_time` offsets the scale
    /// within the transition window.
    pub fn ease_scale(
        &mut self,
        start_time: f64,
        duration: f64,
        alpha: bool,
        anchor: impl Into<AnchorCode>,
        is_entering: bool,
        interpolator: Option<Easing>,
    ) -> Result<(), TransitionError> {
        let anchor = resolve_anchor(EaseKind::Scale, anchor.into())?;

        let (mut from, mut to) = if anchor.is_vertical_edge() {
            (Vec2::new(1.0, 0.0), Vec2::ONE)
        } else if anchor.is_horizontal_edge() {
            (Vec2::new(0.0, 1.0), Vec2::ONE)
        } else {
            (Vec2::ZERO, Vec2::ONE)
        };
        if !is_entering {
            std::mem::swap(&mut from, &mut to);
        }

        let behavior = ScaleBehavior::new(from, to, anchor)
            .frame_time(start_time, duration)
            .interpolator(interpolator);
        self.install_transition(
            EaseKind::Scale,
            anchor,
            duration,
            alpha,
            is_entering,
            Box::new(behavior),
        );
        Ok(())
    }

    pub fn ease_rotation_in(
        &mut self,
        duration: f64,
        alpha: bool,
        anchor: impl Into<AnchorCode>,
        interpolator: Option<Easing>,
    ) -> Result<(), TransitionError> {
        self.ease_rotation(duration, alpha, anchor, true, interpolator)
    }

    pub fn ease_rotation_out(
        &mut self,
        duration: f64,
        alpha: bool,
        anchor: impl Into<AnchorCode>,
        interpolator: Option<Easing>,
    ) -> Result<(), TransitionError> {
        self.ease_rotation(duration, alpha, anchor, false, interpolator)
    }

    /// Spin the scene in from, or out to, a random angle.
    ///
    /// Edge anchors turn by half a revolution, corners by a quarter; the
    /// direction is a coin flip. `Center` behaves like `Top`.
    pub fn ease_rotation(
        &mut self,
        duration: f64,
        alpha: bool,
        anchor: impl Into<AnchorCode>,
        is_entering: bool,
        interpolator: Option<Easing>,
    ) -> Result<(), TransitionError> {
        let anchor = match resolve_anchor(EaseKind::Rotation, anchor.into())? {
            Anchor::Center => Anchor::Top,
            other => other,
        };

        let magnitude = if anchor.is_corner() { FRAC_PI_2 } else { PI };
        let mut start = magnitude * self.signs.sign();
        let mut end = 0.0;
        if !is_entering {
            std::mem::swap(&mut start, &mut end);
        }

        let behavior = RotateBehavior::new(start, end, anchor)
            .frame_time(0.0, duration)
            .interpolator(interpolator);
        self.install_transition(
            EaseKind::Rotation,
            anchor,
            duration,
            alpha,
            is_entering,
            Box::new(behavior),
        );
        Ok(())
    }

    /// Wrap `primary` (and an optional fade) into a fresh composite anchored
    /// at the current scene time and make it the scene's only behavior.
    fn install_transition(
        &mut self,
        kind: EaseKind,
        anchor: Anchor,
        duration: f64,
        alpha: bool,
        is_entering: bool,
        primary: Box<dyn Behavior>,
    ) {
        let mut composite = ContainerBehavior::new();
        if alpha {
            composite.add_behavior(Box::new(AlphaBehavior::fade(duration, is_entering)));
        }
        composite.add_behavior(primary);
        composite.set_frame_time(self.time, duration);

        if let (Some(previous), false) = (self.transition, self.transition_finished) {
            warn!(%previous, replacement = %kind, "discarding unfinished scene transition");
        }

        self.root.empty_behavior_list();
        self.root.add_behavior(Box::new(composite));
        self.transition = Some(kind);
        self.transition_finished = false;
        self.is_entering = is_entering;

        debug!(
            %kind,
            ?anchor,
            is_entering,
            alpha,
            start = self.time,
            duration,
            "scene transition installed"
        );
    }

    // ------------------------------------------------------------------
    // Completion listeners
    // ------------------------------------------------------------------

    /// Replace every listener with `listener`.
    pub fn set_ease_listener<L: EaseListener + 'static>(&mut self, listener: L) -> ListenerId {
        self.ease_listeners.clear();
        if self.notifying {
            self.listeners_replaced = true;
            self.lent_listeners.clear();
        }
        self.add_ease_listener(listener)
    }

    /// Register an additional completion listener.
    pub fn add_ease_listener<L: EaseListener + 'static>(&mut self, listener: L) -> ListenerId {
        let id = ListenerId(self.listener_sequence);
        self.listener_sequence += 1;
        self.ease_listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` for ids that are not
    /// registered. During a notification the removal of a listener being
    /// notified takes effect once every listener has been called.
    pub fn remove_ease_listener(&mut self, id: ListenerId) -> bool {
        if let Some(index) = self.ease_listeners.iter().position(|(lid, _)| *lid == id) {
            self.ease_listeners.remove(index);
            return true;
        }
        if let Some(index) = self.lent_listeners.iter().position(|lid| *lid == id) {
            self.lent_listeners.swap_remove(index);
            self.detached_listeners.push(id);
            return true;
        }
        false
    }

    pub fn ease_listener_count(&self) -> usize {
        self.ease_listeners.len()
    }

    /// The transition composite finished: tell every listener once.
    fn behavior_expired(&mut self) {
        self.transition_finished = true;
        let is_entering = self.is_entering;
        debug!(
            kind = ?self.transition,
            is_entering,
            time = self.time,
            "scene transition finished"
        );

        // Listeners are lent out so they can borrow the scene.
        let mut listeners = std::mem::take(&mut self.ease_listeners);
        self.lent_listeners = listeners.iter().map(|(id, _)| *id).collect();
        self.notifying = true;
        for (_, listener) in listeners.iter_mut() {
            listener.ease_end(self, is_entering);
        }
        self.notifying = false;
        self.lent_listeners.clear();

        if std::mem::take(&mut self.listeners_replaced) {
            listeners.clear();
        }
        listeners.append(&mut self.ease_listeners);
        let detached = std::mem::take(&mut self.detached_listeners);
        listeners.retain(|(id, _)| !detached.contains(id));
        self.ease_listeners = listeners;
    }
}

fn resolve_anchor(kind: EaseKind, code: AnchorCode) -> Result<Anchor, TransitionError> {
    code.resolve().ok_or_else(|| {
        warn!(%kind, code = code.0, "rejecting transition with unknown anchor");
        TransitionError::UnknownAnchor { kind, code: code.0 }
    })
}

impl Animatable for Scene {
    fn animate(&mut self, director: &mut dyn Director, time: f64) {
        Scene::animate(self, director, time);
    }

    fn paint(&self, director: &mut dyn Director, time: f64) {
        Scene::paint(self, director, time);
    }

    fn state(&self) -> &ActorState {
        &self.root.state
    }
}
