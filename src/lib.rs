//! Walkway animates the drawing of vector line shapes by progressively revealing their stroke.
//!
//! An [`Engine`] owns a [`Host`] (shape lookup, style writes, notifications), a [`Clock`], a
//! cooperative frame loop and the registry of live instances. Each [`AnimationInstance`] binds
//! the shapes matched by one selector and drives a per-shape state machine ([`ShapeState`]) on
//! every repaint until all of them are drawn.
//!
//! # Flow
//!
//! 1. [`Engine::create`] resolves a selector into shapes, measures them and writes their initial
//!    dash pattern.
//! 2. [`Engine::draw`] advances every shape once and queues the next tick.
//! 3. The host calls [`Engine::tick`] on each display refresh (or [`Engine::run`] with a
//!    [`FrameSource`]) until the instance completes and its callback fires.
//!
//! The engine is single-threaded by construction: nothing runs between ticks, and cancelling a
//! queued tick always prevents it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod engine;
mod foundation;
mod host;
mod schedule;
mod scene;
mod shape;

pub use animation::ease::{Ease, Easing};
pub use engine::context::Engine;
pub use engine::events::DrawEvent;
pub use engine::instance::AnimationInstance;
pub use engine::options::{CompletionCallback, DEFAULT_DURATION_MS, DrawOptions};
pub use engine::registry::{InstanceId, Registry};
pub use foundation::clock::{Clock, ManualClock, SystemClock};
pub use foundation::core::{BezPath, Direction, Point, ShapeId, stroke_offset};
pub use foundation::error::{WalkwayError, WalkwayResult};
pub use host::document::{Document, Element, EmittedEvent, Node, StrokeStyle};
pub use host::surface::{EventSink, Host, ResolvedShape, ShapeSource, StyleSink};
pub use scene::Scene;
pub use schedule::frame_loop::{FrameHandle, FrameLoop};
pub use schedule::pacing::{
    FALLBACK_FRAME_MS, FrameSource, ManualFrameSource, TimerFallback, TimerFrameSource,
};
pub use shape::geometry::{
    PATH_LENGTH_ACCURACY, ShapeGeometry, ShapeKind, line_length, path_length, polyline_length,
};
pub use shape::state::{ShapeState, Timing};
