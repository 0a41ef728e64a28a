pub use kurbo::{BezPath, Point};

/// Host-assigned identity of one animatable shape.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub String);

impl ShapeId {
    /// Create a shape id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction in which a stroke is revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Undrawn to fully drawn.
    #[default]
    Forward,
    /// Fully drawn to undrawn.
    Reverse,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// Map animation progress onto the drawn fraction of the stroke.
    pub fn drawn_fraction(self, progress: f64) -> f64 {
        match self {
            Self::Forward => progress,
            Self::Reverse => 1.0 - progress,
        }
    }
}

/// Stroke offset that leaves `drawn` (0 = nothing, 1 = everything) of `length` visible.
///
/// Rounded up and clamped into `[0, length]`, so overshooting progress never yields a negative
/// offset.
pub fn stroke_offset(length: f64, drawn: f64) -> f64 {
    (length * (1.0 - drawn)).ceil().clamp(0.0, length.max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
