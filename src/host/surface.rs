//! Capabilities the engine consumes from the surrounding platform.

use crate::engine::events::DrawEvent;
use crate::foundation::core::ShapeId;
use crate::foundation::error::WalkwayResult;
use crate::shape::geometry::ShapeGeometry;

/// A shape matched by a selector, with the geometry needed to measure it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedShape {
    /// Host identity used for later style writes.
    pub id: ShapeId,
    /// Immutable geometry.
    pub geometry: ShapeGeometry,
}

/// Resolves selectors into animatable shapes.
pub trait ShapeSource {
    /// Every path, line and polyline under `selector`, in document order.
    ///
    /// Other element kinds are left out. Shapes whose geometry cannot be read are a
    /// [`Geometry`](crate::WalkwayError::Geometry) error.
    fn resolve_shapes(&self, selector: &str) -> WalkwayResult<Vec<ResolvedShape>>;

    /// Total stroke length of `shape`.
    ///
    /// Hosts with an exact native measurement may override this.
    fn measure_length(&self, shape: &ResolvedShape) -> f64 {
        shape.geometry.length()
    }
}

/// Writes the stroke style that drives the reveal.
pub trait StyleSink {
    /// Set a dash pattern of `length` drawn followed by `length` gap.
    fn set_dash_array(&mut self, shape: &ShapeId, length: f64);
    /// Set the remaining undrawn length.
    fn set_visual_offset(&mut self, shape: &ShapeId, offset: f64);
}

/// Receives notifications about instance transitions.
pub trait EventSink {
    /// Fire `event` on behalf of the instance bound to `target`.
    fn emit(&mut self, target: &str, event: &DrawEvent);
}

/// Everything the engine needs from its platform.
pub trait Host: ShapeSource + StyleSink + EventSink {}

impl<T: ShapeSource + StyleSink + EventSink> Host for T {}
