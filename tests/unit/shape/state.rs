use super::*;
use crate::animation::ease::Ease;
use crate::host::document::Document;

fn shape(length: f64, duration_ms: f64, ease: Ease, direction: Direction) -> ShapeState {
    ShapeState::new(
        ShapeId::new("s"),
        ShapeKind::Path,
        length,
        Timing {
            duration_ms,
            easing: ease.into(),
            direction,
        },
    )
    .unwrap()
}

fn linear(length: f64) -> ShapeState {
    shape(length, 500.0, Ease::Linear, Direction::Forward)
}

#[test]
fn rejects_unmeasurable_lengths() {
    let timing = Timing {
        duration_ms: 500.0,
        easing: Easing::default(),
        direction: Direction::Forward,
    };
    let err = ShapeState::new(ShapeId::new("x"), ShapeKind::Line, f64::NAN, timing.clone())
        .unwrap_err();
    assert!(matches!(err, WalkwayError::Geometry(_)));
    assert!(ShapeState::new(ShapeId::new("x"), ShapeKind::Line, -1.0, timing).is_err());
}

#[test]
fn initial_style_is_undrawn() {
    let mut doc = Document::default();
    let mut s = linear(80.0);
    s.apply_initial_style(&mut doc);
    assert_eq!(doc.style("s").unwrap().dash_array, Some(80.0));
    assert_eq!(doc.offset("s"), Some(80.0));
    assert!(!s.is_touched());
}

#[test]
fn update_reports_done_exactly_at_duration() {
    let mut doc = Document::default();
    let mut s = linear(100.0);
    assert!(!s.update(1000.0, &mut doc));
    assert!(s.is_started());
    for now in [1100.0, 1250.0, 1499.0] {
        assert!(!s.update(now, &mut doc), "now={now}");
    }
    assert!(s.update(1500.0, &mut doc));
    assert_eq!(doc.offset("s"), Some(0.0));
}

#[test]
fn update_renders_linear_progress() {
    let mut doc = Document::default();
    let mut s = linear(100.0);
    s.update(0.0, &mut doc);
    assert_eq!(doc.offset("s"), Some(100.0));
    s.update(250.0, &mut doc);
    assert_eq!(doc.offset("s"), Some(50.0));
    assert_eq!(s.elapsed_ms(250.0), 250.0);
}

#[test]
fn overshooting_tick_never_writes_negative_offset() {
    let mut doc = Document::default();
    let mut s = shape(100.0, 500.0, Ease::InOutCubic, Direction::Forward);
    s.update(0.0, &mut doc);
    assert!(s.update(640.0, &mut doc));
    assert_eq!(doc.offset("s"), Some(0.0));
}

#[test]
fn final_tick_renders_the_end_state_for_dipping_curves() {
    for ease in [Ease::OutQuad, Ease::InOutQuad, Ease::OutQuart, Ease::InOutQuart] {
        let mut doc = Document::default();
        let mut s = shape(1000.0, 500.0, ease, Direction::Forward);
        s.update(0.0, &mut doc);
        assert!(s.update(510.0, &mut doc), "{ease:?}");
        assert_eq!(doc.offset("s"), Some(0.0), "{ease:?}");

        let mut s = shape(1000.0, 500.0, ease, Direction::Forward);
        s.time_travel(510.0, &mut doc);
        assert!(s.is_done());
        assert_eq!(doc.offset("s"), Some(0.0), "{ease:?}");
    }

    let mut doc = Document::default();
    let mut rev = shape(1000.0, 500.0, Ease::OutQuad, Direction::Reverse);
    rev.update(0.0, &mut doc);
    assert!(rev.update(510.0, &mut doc));
    assert_eq!(doc.offset("s"), Some(1000.0));
}

#[test]
fn complete_draws_reversed_shapes_fully() {
    let mut doc = Document::default();
    let mut s = shape(100.0, 500.0, Ease::Linear, Direction::Reverse);
    s.update(0.0, &mut doc);
    s.update(250.0, &mut doc);
    assert_eq!(doc.offset("s"), Some(50.0));
    s.complete(&mut doc);
    assert!(s.is_done());
    assert_eq!(s.offset(), 0.0);
    assert_eq!(doc.offset("s"), Some(0.0));
}

#[test]
fn complete_is_idempotent() {
    let mut doc = Document::default();
    let mut s = linear(100.0);
    s.update(0.0, &mut doc);
    s.complete(&mut doc);
    assert!(s.is_done());
    assert_eq!(doc.offset("s"), Some(0.0));
    let writes = doc.style("s").unwrap().offset_writes;
    s.complete(&mut doc);
    assert_eq!(doc.offset("s"), Some(0.0));
    assert_eq!(doc.style("s").unwrap().offset_writes, writes);
}

#[test]
fn reverse_flips_the_progress_axis() {
    let mut fwd_doc = Document::default();
    let mut rev_doc = Document::default();
    let mut fwd = linear(70.0);
    let mut rev = shape(70.0, 500.0, Ease::Linear, Direction::Reverse);
    fwd.fill(1.0, &mut fwd_doc);
    rev.fill(0.0, &mut rev_doc);
    assert_eq!(fwd_doc.offset("s"), rev_doc.offset("s"));

    rev.reset(&mut rev_doc);
    assert_eq!(rev_doc.offset("s"), Some(0.0));
    rev.update(0.0, &mut rev_doc);
    rev.update(250.0, &mut rev_doc);
    assert_eq!(rev_doc.offset("s"), Some(35.0));
    assert!(rev.update(500.0, &mut rev_doc));
    assert_eq!(rev_doc.offset("s"), Some(70.0));
}

#[test]
fn pause_resume_has_no_jump() {
    let mut doc = Document::default();
    let mut paused = linear(100.0);
    paused.update(0.0, &mut doc);
    paused.update(100.0, &mut doc);
    paused.pause(150.0);
    assert!(paused.is_paused());
    assert!(!paused.is_started());

    // Resume 1000ms later; the first tick continues from 150ms of elapsed time.
    paused.update(1150.0, &mut doc);
    assert!(paused.is_started());
    assert!(!paused.is_paused());
    assert_eq!(paused.elapsed_ms(1150.0), 150.0);
    paused.update(1250.0, &mut doc);
    assert_eq!(doc.offset("s"), Some(50.0));

    let mut uninterrupted = linear(100.0);
    let mut other = Document::default();
    uninterrupted.update(0.0, &mut other);
    uninterrupted.update(250.0, &mut other);
    assert_eq!(other.offset("s"), doc.offset("s"));
}

#[test]
fn pause_on_idle_shape_is_noop() {
    let mut s = linear(10.0);
    s.pause(5.0);
    assert!(!s.is_paused());
}

#[test]
fn reset_returns_to_idle() {
    let mut doc = Document::default();
    let mut s = linear(100.0);
    s.update(0.0, &mut doc);
    s.update(500.0, &mut doc);
    s.mark_done();
    s.reset(&mut doc);
    assert!(!s.is_done() && !s.is_started() && !s.is_paused());
    assert_eq!(doc.offset("s"), Some(100.0));
    // Timer restarts on the next tick.
    assert!(!s.update(2000.0, &mut doc));
    assert_eq!(doc.offset("s"), Some(100.0));
}

#[test]
fn time_travel_scrubs_without_ticking() {
    let mut doc = Document::default();
    let mut s = linear(100.0);
    s.time_travel(125.0, &mut doc);
    assert!(s.is_paused());
    assert!(!s.is_done());
    assert_eq!(doc.offset("s"), Some(75.0));

    // Resuming continues from the travelled position.
    s.update(10_000.0, &mut doc);
    assert_eq!(s.elapsed_ms(10_000.0), 125.0);

    s.time_travel(500.0, &mut doc);
    assert!(s.is_done());
    assert_eq!(doc.offset("s"), Some(0.0));
}

#[test]
fn seek_marks_paused_or_done() {
    let mut doc = Document::default();
    let mut s = linear(100.0);
    s.seek(0.5, &mut doc);
    assert!(s.is_paused());
    assert_eq!(doc.offset("s"), Some(50.0));
    s.seek(1.0, &mut doc);
    assert!(s.is_done());
    assert_eq!(doc.offset("s"), Some(0.0));
}

#[test]
fn zero_duration_finishes_on_first_tick() {
    let mut doc = Document::default();
    let mut s = shape(40.0, 0.0, Ease::InOutCubic, Direction::Forward);
    assert!(s.update(3.0, &mut doc));
    assert_eq!(doc.offset("s"), Some(0.0));
}
