use super::*;

// =============================================================
// Throttle
// =============================================================

#[test]
fn throttle_admits_immediately_at_window_start() {
    let mut gate = Throttle::new(100.0);
    assert!(gate.admit(0.0));
}

#[test]
fn throttle_admits_once_per_window() {
    let mut gate = Throttle::new(100.0);

    // ten calls spaced 10ms apart: only the first gets through
    let admitted: Vec<bool> = (0..10).map(|i| gate.admit(f64::from(i) * 10.0)).collect();
    assert_eq!(admitted.iter().filter(|ok| **ok).count(), 1);
    assert!(admitted[0]);

    // the window reopens once 100ms have elapsed since the admitted call
    assert!(gate.admit(100.0));
    assert!(!gate.admit(150.0));
}

#[test]
fn throttle_windows_chain_from_admitted_calls() {
    let mut gate = Throttle::new(50.0);
    assert!(gate.admit(10.0));
    assert!(!gate.admit(59.9));
    assert!(gate.admit(60.0));
    assert!(gate.admit(200.0));
}

// =============================================================
// Debounce
// =============================================================

#[test]
fn debounce_fires_once_one_window_after_the_burst_ends() {
    let mut gate = Debounce::new(250.0);

    // burst of calls ending at t = 40
    for t in [0.0, 10.0, 25.0, 40.0] {
        gate.record(t);
    }

    // check-backs scheduled by earlier calls in the burst are stale
    assert!(!gate.fire_due(250.0));
    assert!(!gate.fire_due(260.0));
    assert!(!gate.fire_due(275.0));

    // the final call's check-back fires, exactly once
    assert!(gate.fire_due(290.0));
    assert!(!gate.fire_due(290.0));
}

#[test]
fn debounce_reports_the_deadline_of_the_latest_call() {
    let mut gate = Debounce::new(250.0);
    assert_eq!(gate.record(0.0), 250.0);
    assert_eq!(gate.record(100.0), 350.0);
}

#[test]
fn debounce_is_idle_until_recorded() {
    let mut gate = Debounce::new(250.0);
    assert!(!gate.fire_due(1_000.0));
}

#[test]
fn debounce_rearms_after_firing() {
    let mut gate = Debounce::new(100.0);

    gate.record(0.0);
    assert!(gate.fire_due(100.0));

    gate.record(200.0);
    assert!(!gate.fire_due(250.0));
    assert!(gate.fire_due(300.0));
}
