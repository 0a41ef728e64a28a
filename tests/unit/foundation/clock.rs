use super::*;

#[test]
fn manual_clock_clones_share_time() {
    let a = ManualClock::new(10.0);
    let b = a.clone();
    a.advance(5.0);
    assert_eq!(b.now_ms(), 15.0);
    b.set(100.0);
    assert_eq!(a.now_ms(), 100.0);
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let t0 = clock.now_ms();
    let t1 = clock.now_ms();
    assert!(t0 >= 0.0);
    assert!(t1 >= t0);
}
