use std::collections::BTreeMap;

use crate::engine::events::DrawEvent;
use crate::foundation::core::{Point, ShapeId};
use crate::foundation::error::{WalkwayError, WalkwayResult};
use crate::host::surface::{EventSink, ResolvedShape, ShapeSource, StyleSink};
use crate::shape::geometry::ShapeGeometry;

/// In-memory document host.
///
/// Holds a flat list of elements tagged with the selectors of their containers, and records every
/// style write and notification so callers can inspect what an animation did.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Elements in document order.
    pub elements: Vec<Element>,
    #[serde(skip)]
    styles: BTreeMap<ShapeId, StrokeStyle>,
    #[serde(skip)]
    events: Vec<EmittedEvent>,
}

/// One element in a [`Document`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// Unique element id.
    pub id: String,
    /// Selectors of every container this element sits in (for example `"#logo"`).
    #[serde(default)]
    pub groups: Vec<String>,
    /// Element geometry.
    pub shape: Node,
}

/// Element kinds a document can hold. Only paths, lines and polylines are animatable.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// SVG path data.
    Path {
        /// Path data string.
        d: String,
    },
    /// Line segment; a missing coordinate is kept as `None`.
    Line {
        /// First endpoint x.
        #[serde(default)]
        x1: Option<f64>,
        /// First endpoint y.
        #[serde(default)]
        y1: Option<f64>,
        /// Second endpoint x.
        #[serde(default)]
        x2: Option<f64>,
        /// Second endpoint y.
        #[serde(default)]
        y2: Option<f64>,
    },
    /// Connected vertices.
    Polyline {
        /// `[x, y]` pairs.
        #[serde(default)]
        points: Vec<[f64; 2]>,
    },
    /// Rectangle (not animatable).
    Rect {
        /// Width.
        #[serde(default)]
        width: f64,
        /// Height.
        #[serde(default)]
        height: f64,
    },
    /// Circle (not animatable).
    Circle {
        /// Radius.
        #[serde(default)]
        r: f64,
    },
}

impl Node {
    /// Geometry for animatable kinds, `None` for everything else.
    ///
    /// Unparsable path data is a geometry error. Missing line coordinates become NaN so that
    /// measurement fails at construction instead of here.
    pub fn geometry(&self) -> WalkwayResult<Option<ShapeGeometry>> {
        let geometry = match self {
            Self::Path { d } => ShapeGeometry::from_svg_path(d).map_err(|err| {
                WalkwayError::geometry(format!("unparsable path data '{d}': {err}"))
            })?,
            Self::Line { x1, y1, x2, y2 } => {
                let coord = |v: &Option<f64>| v.unwrap_or(f64::NAN);
                ShapeGeometry::Line {
                    from: Point::new(coord(x1), coord(y1)),
                    to: Point::new(coord(x2), coord(y2)),
                }
            }
            Self::Polyline { points } => {
                ShapeGeometry::Polyline(points.iter().map(|&[x, y]| Point::new(x, y)).collect())
            }
            Self::Rect { .. } | Self::Circle { .. } => return Ok(None),
        };
        Ok(Some(geometry))
    }
}

/// Stroke style last written for one shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StrokeStyle {
    /// Dash pattern length (drawn and gap).
    pub dash_array: Option<f64>,
    /// Remaining undrawn length.
    pub dash_offset: Option<f64>,
    /// Number of offset writes so far.
    pub offset_writes: usize,
}

/// A notification captured by a [`Document`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EmittedEvent {
    /// Selector the notification was fired for.
    pub target: String,
    /// The notification.
    #[serde(flatten)]
    pub event: DrawEvent,
}

impl Document {
    /// Create a document from elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    /// Append an element.
    pub fn push(&mut self, id: impl Into<String>, groups: &[&str], shape: Node) -> &mut Self {
        self.elements.push(Element {
            id: id.into(),
            groups: groups.iter().map(|g| (*g).to_owned()).collect(),
            shape,
        });
        self
    }

    /// Last style written for `id`.
    pub fn style(&self, id: &str) -> Option<StrokeStyle> {
        self.styles.get(&ShapeId::new(id)).copied()
    }

    /// Last offset written for `id`.
    pub fn offset(&self, id: &str) -> Option<f64> {
        self.style(id).and_then(|s| s.dash_offset)
    }

    /// Notifications in emission order.
    pub fn events(&self) -> &[EmittedEvent] {
        &self.events
    }

    /// Names of captured notifications for `target`.
    pub fn event_names(&self, target: &str) -> Vec<&'static str> {
        self.events
            .iter()
            .filter(|e| e.target == target)
            .map(|e| e.event.name())
            .collect()
    }

    /// Drain captured notifications.
    pub fn take_events(&mut self) -> Vec<EmittedEvent> {
        std::mem::take(&mut self.events)
    }
}

impl ShapeSource for Document {
    fn resolve_shapes(&self, selector: &str) -> WalkwayResult<Vec<ResolvedShape>> {
        let mut shapes = Vec::new();
        for el in self.elements.iter().filter(|el| el.groups.iter().any(|g| g == selector)) {
            let geometry = el.shape.geometry().inspect_err(|err| {
                tracing::warn!(%err, element = %el.id, "element geometry rejected");
            })?;
            if let Some(geometry) = geometry {
                shapes.push(ResolvedShape {
                    id: ShapeId::new(el.id.clone()),
                    geometry,
                });
            }
        }
        Ok(shapes)
    }
}

impl StyleSink for Document {
    fn set_dash_array(&mut self, shape: &ShapeId, length: f64) {
        self.styles.entry(shape.clone()).or_default().dash_array = Some(length);
    }

    fn set_visual_offset(&mut self, shape: &ShapeId, offset: f64) {
        let style = self.styles.entry(shape.clone()).or_default();
        style.dash_offset = Some(offset);
        style.offset_writes += 1;
    }
}

impl EventSink for Document {
    fn emit(&mut self, target: &str, event: &DrawEvent) {
        self.events.push(EmittedEvent {
            target: target.to_owned(),
            event: *event,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/document.rs"]
mod tests;
