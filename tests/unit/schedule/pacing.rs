use super::*;

#[test]
fn fallback_settles_on_a_sixteen_ms_grid() {
    let mut fallback = TimerFallback::default();
    assert_eq!(fallback.next_delay_ms(0.0), 16.0);
    // Asked again 4ms after the previous frame fired: wait the remaining 12ms.
    assert_eq!(fallback.next_delay_ms(20.0), 12.0);
    // Running late never yields a negative delay.
    assert_eq!(fallback.next_delay_ms(100.0), 0.0);
    assert_eq!(fallback.next_delay_ms(100.0), 16.0);
}

#[test]
fn manual_source_steps_the_shared_clock() {
    let clock = ManualClock::new(0.0);
    let mut source = ManualFrameSource::new(clock.clone(), 10.0);
    source.wait_for_frame();
    source.wait_for_frame();
    assert_eq!(clock.now_ms(), 20.0);
    assert_eq!(ManualFrameSource::at_fps(clock, 50.0).interval_ms(), 20.0);
}
