use crate::animation::ease::Easing;
use crate::foundation::core::{Direction, ShapeId, stroke_offset};
use crate::foundation::error::{WalkwayError, WalkwayResult};
use crate::host::surface::StyleSink;
use crate::shape::geometry::ShapeKind;

/// Timing shared by every shape of one animation instance.
#[derive(Clone, Debug)]
pub struct Timing {
    /// Milliseconds needed to traverse the full stroke.
    pub duration_ms: f64,
    /// Curve mapping elapsed ratio to progress.
    pub easing: Easing,
    /// Initial reveal direction.
    pub direction: Direction,
}

/// Animation state machine for one shape.
///
/// Idle -> Running -> Done, with Paused (timer frozen) and Reset (back to Idle) as side branches.
/// `progress` values handed to [`ShapeState::fill`] are in animation space: 0 is the direction's
/// starting point and 1 its end, so a reversed shape at progress 0 is fully drawn.
#[derive(Clone, Debug)]
pub struct ShapeState {
    id: ShapeId,
    kind: ShapeKind,
    length: f64,
    duration_ms: f64,
    easing: Easing,
    direction: Direction,
    start_ms: Option<f64>,
    // Time already spent running, kept across pauses so resuming continues instead of jumping.
    elapsed_ms: f64,
    started: bool,
    paused: bool,
    done: bool,
    offset: f64,
}

impl ShapeState {
    /// Create an idle shape state, rejecting lengths that are negative or not finite.
    pub fn new(id: ShapeId, kind: ShapeKind, length: f64, timing: Timing) -> WalkwayResult<Self> {
        if !length.is_finite() || length < 0.0 {
            return Err(WalkwayError::geometry(format!(
                "shape '{id}' ({kind:?}) has unmeasurable length {length}"
            )));
        }
        Ok(Self {
            id,
            kind,
            length,
            duration_ms: timing.duration_ms,
            easing: timing.easing,
            direction: timing.direction,
            start_ms: None,
            elapsed_ms: 0.0,
            started: false,
            paused: false,
            done: false,
            offset: length,
        })
    }

    /// Host id of the animated shape.
    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    /// Geometry kind the length was measured from.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Total stroke length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Duration of a full traversal in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Current reveal direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Last stroke offset written to the host.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether the shape is advancing on ticks.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the timer is frozen mid-animation.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the animation reached its end.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether any transition away from Idle has happened.
    pub fn is_touched(&self) -> bool {
        self.started || self.paused || self.done || self.elapsed_ms > 0.0
    }

    /// Time spent running as of `now_ms`.
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        match self.start_ms {
            Some(start) if self.started => now_ms - start,
            _ => self.elapsed_ms,
        }
    }

    /// Write the dash pattern and idle offset for this shape.
    pub fn apply_initial_style(&mut self, style: &mut dyn StyleSink) {
        style.set_dash_array(&self.id, self.length);
        self.fill(0.0, style);
    }

    /// Advance to `now_ms` and render the eased frame.
    ///
    /// Returns `true` once the elapsed ratio reaches 1, after rendering the direction's end state;
    /// marking the shape done is up to the caller.
    pub fn update(&mut self, now_ms: f64, style: &mut dyn StyleSink) -> bool {
        let start = match self.start_ms {
            Some(start) if self.started => start,
            _ => {
                let start = now_ms - self.elapsed_ms;
                self.start_ms = Some(start);
                self.started = true;
                self.paused = false;
                start
            }
        };
        self.elapsed_ms = now_ms - start;
        let ratio = self.ratio(self.elapsed_ms);
        let finished = ratio >= 1.0;
        // Some curves dip back below 1 past the end, so the final frame renders the end state.
        let progress = if finished { 1.0 } else { self.easing.apply(ratio) };
        self.fill(progress, style);
        finished
    }

    /// Render `progress` (unclamped) as a stroke offset.
    pub fn fill(&mut self, progress: f64, style: &mut dyn StyleSink) {
        let offset = stroke_offset(self.length, self.direction.drawn_fraction(progress));
        self.offset = offset;
        style.set_visual_offset(&self.id, offset);
    }

    /// Record the end of the animation after `update` reported it.
    pub fn mark_done(&mut self) {
        self.done = true;
        self.started = false;
        self.paused = false;
        self.start_ms = None;
        self.elapsed_ms = self.elapsed_ms.max(self.duration_ms);
    }

    /// Jump straight to the fully drawn state, whatever the direction. Calling it again is a no-op.
    pub fn complete(&mut self, style: &mut dyn StyleSink) {
        if self.done {
            return;
        }
        let offset = stroke_offset(self.length, 1.0);
        self.offset = offset;
        style.set_visual_offset(&self.id, offset);
        self.mark_done();
    }

    /// Freeze the timer, keeping elapsed time for a later resume.
    pub fn pause(&mut self, now_ms: f64) {
        if !self.started {
            return;
        }
        self.elapsed_ms = self.elapsed_ms(now_ms);
        self.start_ms = None;
        self.started = false;
        self.paused = true;
    }

    /// Return to Idle and render the direction's starting point.
    pub fn reset(&mut self, style: &mut dyn StyleSink) {
        self.done = false;
        self.started = false;
        self.paused = false;
        self.start_ms = None;
        self.elapsed_ms = 0.0;
        self.fill(0.0, style);
    }

    /// Reverse the reveal direction. The rendered offset is untouched until the next fill.
    pub fn flip_direction(&mut self) {
        self.direction = self.direction.flipped();
    }

    /// Move the timer to `elapsed_ms` without ticking and render that frame.
    pub fn time_travel(&mut self, elapsed_ms: f64, style: &mut dyn StyleSink) {
        self.elapsed_ms = elapsed_ms.max(0.0);
        self.start_ms = None;
        self.started = false;
        self.done = self.elapsed_ms >= self.duration_ms;
        self.paused = !self.done;
        let progress = if self.done {
            1.0
        } else {
            self.easing.apply(self.ratio(self.elapsed_ms))
        };
        self.fill(progress, style);
    }

    /// Render `progress` directly and park the timer at the matching linear position.
    pub fn seek(&mut self, progress: f64, style: &mut dyn StyleSink) {
        self.fill(progress, style);
        self.elapsed_ms = progress.clamp(0.0, 1.0) * self.duration_ms;
        self.start_ms = None;
        self.started = false;
        self.done = progress >= 1.0;
        self.paused = !self.done;
    }

    fn ratio(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms > 0.0 {
            elapsed_ms / self.duration_ms
        } else {
            1.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/state.rs"]
mod tests;
