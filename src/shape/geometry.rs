use crate::foundation::core::{BezPath, Point};
use kurbo::Shape as _;

/// Tolerance handed to kurbo when measuring curved path segments.
pub const PATH_LENGTH_ACCURACY: f64 = 1e-6;

/// Kinds of shapes the engine can animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Arbitrary path data.
    Path,
    /// Single straight segment.
    Line,
    /// Open chain of straight segments.
    Polyline,
}

/// Immutable geometry of an animatable shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeGeometry {
    /// Path data (moves, lines, curves).
    Path(BezPath),
    /// Straight segment between two endpoints.
    Line {
        /// First endpoint.
        from: Point,
        /// Second endpoint.
        to: Point,
    },
    /// Vertices joined in order.
    Polyline(Vec<Point>),
}

impl ShapeGeometry {
    /// Parse SVG path data into path geometry.
    pub fn from_svg_path(d: &str) -> Result<Self, kurbo::SvgParseError> {
        BezPath::from_svg(d).map(Self::Path)
    }

    /// The kind tag for this geometry.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Path(_) => ShapeKind::Path,
            Self::Line { .. } => ShapeKind::Line,
            Self::Polyline(_) => ShapeKind::Polyline,
        }
    }

    /// Total traversal length of the stroke.
    ///
    /// Non-finite coordinates propagate into the result; callers validate before animating.
    pub fn length(&self) -> f64 {
        match self {
            Self::Path(path) => path_length(path),
            Self::Line { from, to } => line_length(*from, *to),
            Self::Polyline(points) => polyline_length(points),
        }
    }
}

/// Arc length of every segment in `path`.
pub fn path_length(path: &BezPath) -> f64 {
    path.perimeter(PATH_LENGTH_ACCURACY)
}

/// Euclidean distance between the two endpoints.
pub fn line_length(from: Point, to: Point) -> f64 {
    from.distance(to)
}

/// Sum of distances between consecutive vertices; zero for fewer than two.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/shape/geometry.rs"]
mod tests;
