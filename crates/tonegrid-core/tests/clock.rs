// Cycle position from elapsed playback time.

use tonegrid_core::*;

#[test]
fn eighty_bpm_half_cycle() {
    assert_eq!(cycle_ms(80.0), 3000.0);
    let r = tick(1500.0, 80.0);
    assert!((r.progress_percent - 50.0).abs() < 1e-9);
    assert_eq!(r.current_step, 8);
    assert!((r.beat - 8.0).abs() < 1e-9);
}

#[test]
fn wraps_every_cycle() {
    let a = tick(750.0, 80.0);
    let b = tick(3750.0, 80.0);
    let c = tick(30750.0, 80.0);
    assert_eq!(a.current_step, 4);
    assert_eq!(b.current_step, 4);
    assert_eq!(c.current_step, 4);
    assert!((a.progress_percent - b.progress_percent).abs() < 1e-9);
}

#[test]
fn step_stays_in_range() {
    let cycle = cycle_ms(123.0);
    let mut t = 0.0;
    while t < cycle * 3.0 {
        let r = tick(t, 123.0);
        assert!(r.current_step < STEPS, "step {} at {t}", r.current_step);
        assert!(r.progress_percent >= 0.0 && r.progress_percent < 100.0);
        t += 16.0;
    }
    assert_eq!(tick(cycle - 1e-9, 123.0).current_step, STEPS - 1);
}

#[test]
fn invalid_inputs_fall_back() {
    assert_eq!(cycle_ms(0.0), cycle_ms(DEFAULT_BPM));
    assert_eq!(cycle_ms(f64::NAN), cycle_ms(DEFAULT_BPM));
    assert_eq!(tick(-500.0, 80.0).current_step, 0);
    assert_eq!(tick(f64::INFINITY, 80.0).current_step, 0);
}

#[test]
fn playback_clock_measures_from_start() {
    let mut clock = PlaybackClock::new();
    assert!(!clock.is_running());
    assert_eq!(clock.elapsed(10_000.0), 0.0);

    clock.start(10_000.0);
    assert_eq!(clock.elapsed(11_500.0), 1500.0);
    assert_eq!(clock.reading(11_500.0, 80.0).current_step, 8);
    // Host clock going backwards never yields negative time.
    assert_eq!(clock.elapsed(9_000.0), 0.0);
}

#[test]
fn restart_does_not_accumulate_drift() {
    let mut clock = PlaybackClock::new();
    for cycle in 0..50 {
        let t0 = cycle as f64 * 4321.7;
        clock.start(t0);
        assert_eq!(clock.reading(t0, 80.0).current_step, 0);
        assert_eq!(clock.reading(t0 + 1500.0, 80.0).current_step, 8);
        clock.stop();
        assert_eq!(clock.elapsed(t0 + 2000.0), 0.0);
    }
}
