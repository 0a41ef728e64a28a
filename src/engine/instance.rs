use crate::engine::events::DrawEvent;
use crate::engine::options::CompletionCallback;
use crate::engine::registry::InstanceId;
use crate::foundation::core::Direction;
use crate::host::surface::Host;
use crate::schedule::frame_loop::{FrameHandle, FrameLoop};
use crate::shape::state::ShapeState;

/// Borrowed engine state an instance needs while handling one operation.
pub(crate) struct Ctx<'a, H> {
    pub(crate) id: InstanceId,
    pub(crate) now_ms: f64,
    pub(crate) frames: &'a mut FrameLoop<InstanceId>,
    pub(crate) host: &'a mut H,
}

/// One animation session over the shapes matched by a selector.
///
/// The shape list is resolved once at construction and never re-queried.
pub struct AnimationInstance {
    selector: String,
    shapes: Vec<ShapeState>,
    direction: Direction,
    pending: Option<FrameHandle>,
    callback: Option<CompletionCallback>,
    completion_reported: bool,
}

impl std::fmt::Debug for AnimationInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationInstance")
            .field("selector", &self.selector)
            .field("shapes", &self.shapes)
            .field("direction", &self.direction)
            .field("pending", &self.pending)
            .field("has_callback", &self.callback.is_some())
            .field("completion_reported", &self.completion_reported)
            .finish()
    }
}

impl AnimationInstance {
    pub(crate) fn new(selector: String, shapes: Vec<ShapeState>, direction: Direction) -> Self {
        Self {
            selector,
            shapes,
            direction,
            pending: None,
            callback: None,
            completion_reported: false,
        }
    }

    /// Selector this instance was built from.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Owned shapes in document order.
    pub fn shapes(&self) -> &[ShapeState] {
        &self.shapes
    }

    /// Current reveal direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether a tick is queued.
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether every shape has finished.
    pub fn is_complete(&self) -> bool {
        self.shapes.iter().all(ShapeState::is_done)
    }

    #[cfg(test)]
    pub(crate) fn shapes_mut(&mut self) -> &mut [ShapeState] {
        &mut self.shapes
    }

    pub(crate) fn draw<H: Host>(&mut self, cx: Ctx<'_, H>, callback: Option<CompletionCallback>) {
        self.unschedule(cx.frames);
        if let Some(callback) = callback {
            self.callback = Some(callback);
            self.completion_reported = false;
        }
        cx.host.emit(&self.selector, &DrawEvent::Draw);
        self.step(cx);
    }

    /// Run one tick. Returns `true` once the instance has finished and stopped scheduling.
    pub(crate) fn step<H: Host>(&mut self, cx: Ctx<'_, H>) -> bool {
        if self.is_complete() {
            self.unschedule(cx.frames);
            self.report_completion(cx.host);
            return true;
        }

        // Finished shapes stay in the list so that reset and revert can reach them.
        for shape in self.shapes.iter_mut().rev().filter(|s| !s.is_done()) {
            if shape.update(cx.now_ms, cx.host) {
                shape.mark_done();
            }
        }

        self.pending = Some(cx.frames.request(cx.id));
        false
    }

    pub(crate) fn pause<H: Host>(&mut self, cx: Ctx<'_, H>) {
        self.unschedule(cx.frames);
        for shape in &mut self.shapes {
            shape.pause(cx.now_ms);
        }
        cx.host.emit(&self.selector, &DrawEvent::Pause);
    }

    pub(crate) fn cancel<H: Host>(&mut self, cx: Ctx<'_, H>) {
        self.unschedule(cx.frames);
        cx.host.emit(&self.selector, &DrawEvent::Cancel);
    }

    pub(crate) fn revert<H: Host>(&mut self, cx: Ctx<'_, H>) {
        self.unschedule(cx.frames);
        self.direction = self.direction.flipped();
        for shape in &mut self.shapes {
            shape.flip_direction();
            shape.reset(cx.host);
        }
        self.completion_reported = false;
        let reversed = self.direction == Direction::Reverse;
        cx.host.emit(&self.selector, &DrawEvent::Revert { reversed });
    }

    pub(crate) fn redraw<H: Host>(&mut self, cx: Ctx<'_, H>) {
        self.unschedule(cx.frames);
        self.reset_touched(cx.host);
        cx.host.emit(&self.selector, &DrawEvent::Redraw);
        self.draw(cx, None);
    }

    pub(crate) fn progress<H: Host>(&mut self, cx: Ctx<'_, H>, value: f64) {
        self.unschedule(cx.frames);
        for shape in &mut self.shapes {
            shape.seek(value, cx.host);
        }
        self.completion_reported = false;
        cx.host.emit(&self.selector, &DrawEvent::Progress { value });
    }

    pub(crate) fn time_travel<H: Host>(&mut self, cx: Ctx<'_, H>, elapsed_ms: f64) {
        self.unschedule(cx.frames);
        for shape in &mut self.shapes {
            shape.time_travel(elapsed_ms, cx.host);
        }
        self.completion_reported = false;
    }

    pub(crate) fn reset<H: Host>(&mut self, cx: Ctx<'_, H>) {
        self.unschedule(cx.frames);
        self.reset_touched(cx.host);
        cx.host.emit(&self.selector, &DrawEvent::Reset);
    }

    /// Stop scheduling and jump every unfinished shape to its end state.
    ///
    /// Only instances with a queued tick are affected; returns whether this one was.
    pub(crate) fn force_complete<H: Host>(&mut self, cx: Ctx<'_, H>) -> bool {
        if self.pending.is_none() {
            return false;
        }
        self.unschedule(cx.frames);
        for shape in &mut self.shapes {
            shape.complete(cx.host);
        }
        self.report_completion(cx.host);
        true
    }

    pub(crate) fn clear<H: Host>(&mut self, cx: Ctx<'_, H>) {
        self.unschedule(cx.frames);
        cx.host.emit(&self.selector, &DrawEvent::Clear);
    }

    /// Forget the queued tick after the frame loop already handed it out.
    pub(crate) fn take_pending(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    fn unschedule(&mut self, frames: &mut FrameLoop<InstanceId>) {
        if let Some(handle) = self.pending.take() {
            frames.cancel(handle);
        }
    }

    fn reset_touched<H: Host>(&mut self, host: &mut H) {
        for shape in self.shapes.iter_mut().filter(|s| s.is_touched()) {
            shape.reset(host);
        }
        self.completion_reported = false;
    }

    fn report_completion<H: Host>(&mut self, host: &mut H) {
        if self.completion_reported {
            return;
        }
        self.completion_reported = true;
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
        host.emit(&self.selector, &DrawEvent::Complete);
    }
}
