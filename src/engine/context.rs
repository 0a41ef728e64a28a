use crate::engine::instance::{AnimationInstance, Ctx};
use crate::engine::options::{CompletionCallback, DrawOptions};
use crate::engine::registry::{InstanceId, Registry};
use crate::foundation::clock::{Clock, SystemClock};
use crate::foundation::error::{WalkwayError, WalkwayResult};
use crate::host::surface::Host;
use crate::schedule::frame_loop::FrameLoop;
use crate::schedule::pacing::FrameSource;
use crate::shape::state::ShapeState;

/// Top-level animation context.
///
/// Owns the host, the clock, the frame loop and the registry of live instances. Everything runs on
/// the caller's thread: state only changes inside control calls and inside [`Engine::tick`].
pub struct Engine<H, C = SystemClock> {
    host: H,
    clock: C,
    frames: FrameLoop<InstanceId>,
    registry: Registry,
    hidden: bool,
}

impl<H: Host> Engine<H, SystemClock> {
    /// Create an engine on the wall clock.
    pub fn new(host: H) -> Self {
        Self::with_clock(host, SystemClock::new())
    }
}

impl<H: Host, C: Clock> Engine<H, C> {
    /// Create an engine reading time from `clock`.
    pub fn with_clock(host: H, clock: C) -> Self {
        Self {
            host,
            clock,
            frames: FrameLoop::new(),
            registry: Registry::new(),
            hidden: false,
        }
    }

    /// The platform host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The platform host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The engine clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Live instances.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A live instance.
    pub fn instance(&self, id: InstanceId) -> Option<&AnimationInstance> {
        self.registry.get(id)
    }

    /// Whether any tick is queued.
    pub fn has_pending_frames(&self) -> bool {
        self.frames.has_pending()
    }

    /// Whether the surface is currently reported hidden.
    pub fn is_surface_hidden(&self) -> bool {
        self.hidden
    }

    /// Resolve the selector's shapes and register a new instance over them.
    ///
    /// Every shape is measured and validated before any style is written, so a rejected
    /// configuration leaves the host untouched.
    #[tracing::instrument(skip_all)]
    pub fn create(&mut self, opts: impl Into<DrawOptions>) -> WalkwayResult<InstanceId> {
        let opts = opts.into();
        let selector = match opts.require_selector() {
            Ok(selector) => selector.to_owned(),
            Err(err) => {
                tracing::error!(%err, "walkway instance not created");
                return Err(err);
            }
        };
        let timing = opts.timing()?;

        let mut shapes = Vec::new();
        for resolved in self.host.resolve_shapes(&selector)? {
            let length = self.host.measure_length(&resolved);
            let kind = resolved.geometry.kind();
            shapes.push(ShapeState::new(resolved.id, kind, length, timing.clone())?);
        }
        if shapes.is_empty() {
            tracing::warn!(%selector, "selector matched no animatable shapes");
        }
        for shape in &mut shapes {
            shape.apply_initial_style(&mut self.host);
        }

        tracing::debug!(
            %selector,
            shapes = shapes.len(),
            duration_ms = timing.duration_ms,
            "instance created"
        );
        let id = self
            .registry
            .register(AnimationInstance::new(selector, shapes, timing.direction));
        Ok(id)
    }

    /// Start or continue drawing. See [`Engine::draw_with_callback`].
    pub fn draw(&mut self, id: InstanceId) -> WalkwayResult<()> {
        self.draw_inner(id, None)
    }

    /// Start or continue drawing, registering `callback` for completion.
    ///
    /// Advances every unfinished shape once and queues the next tick. If every shape is already
    /// done the completion callback fires immediately (once per completion) and nothing is queued.
    pub fn draw_with_callback(
        &mut self,
        id: InstanceId,
        callback: impl FnMut() + 'static,
    ) -> WalkwayResult<()> {
        self.draw_inner(id, Some(Box::new(callback)))
    }

    fn draw_inner(
        &mut self,
        id: InstanceId,
        callback: Option<CompletionCallback>,
    ) -> WalkwayResult<()> {
        tracing::debug!(?id, "draw");
        let (instance, cx) = self.split(id)?;
        instance.draw(cx, callback);
        Ok(())
    }

    /// Stop ticking and freeze every running shape.
    pub fn pause(&mut self, id: InstanceId) -> WalkwayResult<()> {
        tracing::debug!(?id, "pause");
        let (instance, cx) = self.split(id)?;
        instance.pause(cx);
        Ok(())
    }

    /// Stop ticking but leave shape timers running; a later `draw` catches up.
    pub fn cancel(&mut self, id: InstanceId) -> WalkwayResult<()> {
        tracing::debug!(?id, "cancel");
        let (instance, cx) = self.split(id)?;
        instance.cancel(cx);
        Ok(())
    }

    /// Flip the direction of every shape and return them to the new direction's start.
    pub fn revert(&mut self, id: InstanceId) -> WalkwayResult<()> {
        tracing::debug!(?id, "revert");
        let (instance, cx) = self.split(id)?;
        instance.revert(cx);
        Ok(())
    }

    /// Reset every touched shape and draw again from scratch.
    pub fn redraw(&mut self, id: InstanceId) -> WalkwayResult<()> {
        tracing::debug!(?id, "redraw");
        let (instance, cx) = self.split(id)?;
        instance.redraw(cx);
        Ok(())
    }

    /// Render every shape at `value` (0..=1) without ticking.
    pub fn progress(&mut self, id: InstanceId, value: f64) -> WalkwayResult<()> {
        tracing::debug!(?id, value, "progress");
        if !value.is_finite() {
            return Err(WalkwayError::configuration(format!(
                "progress must be finite (got {value})"
            )));
        }
        let (instance, cx) = self.split(id)?;
        instance.progress(cx, value);
        Ok(())
    }

    /// Move every shape's timer to `elapsed_ms` without ticking.
    pub fn time_travel(&mut self, id: InstanceId, elapsed_ms: f64) -> WalkwayResult<()> {
        tracing::debug!(?id, elapsed_ms, "time travel");
        let (instance, cx) = self.split(id)?;
        instance.time_travel(cx, elapsed_ms);
        Ok(())
    }

    /// Stop ticking and return every touched shape to idle.
    pub fn reset(&mut self, id: InstanceId) -> WalkwayResult<()> {
        tracing::debug!(?id, "reset");
        let (instance, cx) = self.split(id)?;
        instance.reset(cx);
        Ok(())
    }

    /// Unregister an instance. Its shapes keep whatever style they last had.
    pub fn clear(&mut self, id: InstanceId) -> WalkwayResult<AnimationInstance> {
        tracing::debug!(?id, "clear");
        let (instance, cx) = self.split(id)?;
        instance.clear(cx);
        self.registry
            .unregister(id)
            .ok_or_else(|| WalkwayError::instance(format!("{id:?} is not registered")))
    }

    /// Run one repaint: deliver every queued tick.
    ///
    /// Returns the number of instances that ticked.
    pub fn tick(&mut self) -> usize {
        let now_ms = self.clock.now_ms();
        let due = self.frames.take_due();
        let mut ran = 0;
        for (handle, id) in due {
            let Some(instance) = self.registry.get_mut(id) else {
                continue;
            };
            // Cancelled or superseded after the loop handed the tick out.
            if !instance.take_pending(handle) {
                continue;
            }
            let finished = instance.step(Ctx {
                id,
                now_ms,
                frames: &mut self.frames,
                host: &mut self.host,
            });
            if finished {
                tracing::debug!(?id, "instance complete");
            }
            ran += 1;
        }
        tracing::trace!(now_ms, ran, pending = self.frames.pending_len(), "tick");
        ran
    }

    /// Pump repaints from `source` until no tick is queued. Returns the number of repaints.
    pub fn run(&mut self, source: &mut impl FrameSource) -> u64 {
        let mut repaints = 0;
        while self.frames.has_pending() {
            source.wait_for_frame();
            self.tick();
            repaints += 1;
        }
        repaints
    }

    /// Report a visibility change of the rendering surface.
    ///
    /// On the transition to hidden every instance with a queued tick stops and completes at once,
    /// firing its completion callback and notification exactly once.
    #[tracing::instrument(skip(self))]
    pub fn set_surface_hidden(&mut self, hidden: bool) {
        let became_hidden = hidden && !self.hidden;
        self.hidden = hidden;
        if !became_hidden {
            return;
        }

        let now_ms = self.clock.now_ms();
        let frames = &mut self.frames;
        let host = &mut self.host;
        let mut forced = 0usize;
        self.registry.for_each_live(|id, instance| {
            let cx = Ctx {
                id,
                now_ms,
                frames: &mut *frames,
                host: &mut *host,
            };
            if instance.force_complete(cx) {
                forced += 1;
            }
        });
        tracing::debug!(forced, "surface hidden, running animations completed");
    }

    fn split(&mut self, id: InstanceId) -> WalkwayResult<(&mut AnimationInstance, Ctx<'_, H>)> {
        let now_ms = self.clock.now_ms();
        let instance = self
            .registry
            .get_mut(id)
            .ok_or_else(|| WalkwayError::instance(format!("{id:?} is not registered")))?;
        Ok((
            instance,
            Ctx {
                id,
                now_ms,
                frames: &mut self.frames,
                host: &mut self.host,
            },
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/context.rs"]
mod tests;
