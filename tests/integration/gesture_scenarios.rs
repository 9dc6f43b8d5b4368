//! End-to-end gesture scenarios at a 5 ms poll rate with default timing
//! (debounce 50, double press 250, long press 450, repeat 650).

use keyswitch::{ActiveLevel, Features, Gesture, KeySwitchConfig, StateId};

use crate::mock_hw::Bench;

const POLL: u32 = 5;

fn gestures_only(events: &[(u32, Gesture)]) -> Vec<Gesture> {
    events.iter().map(|&(_, g)| g).collect()
}

// ── Reference timeline ────────────────────────────────────────

#[test]
fn reference_timeline_sparse_samples() {
    let mut bench = Bench::with_defaults();
    let results: Vec<_> = [10, 60, 460, 1110, 1760]
        .into_iter()
        .map(|t| bench.sample_at(t, true))
        .collect();
    assert_eq!(
        results,
        vec![None, None, None, Some(Gesture::Press), Some(Gesture::Press)]
    );
    assert_eq!(bench.key.state(), StateId::Repeat);
}

#[test]
fn reference_timeline_with_repeat_result() {
    let mut bench = Bench::with_defaults();
    bench.key.enable_repeat_result(true);
    let results: Vec<_> = [10, 60, 460, 1110, 1760]
        .into_iter()
        .map(|t| bench.sample_at(t, true))
        .collect();
    assert_eq!(
        results,
        vec![
            None,
            None,
            None,
            Some(Gesture::RepeatPress),
            Some(Gesture::RepeatPress)
        ]
    );
}

// ── Press ─────────────────────────────────────────────────────

#[test]
fn single_press_without_double_press() {
    let mut bench = Bench::with_defaults();
    bench.key.enable_double_press(false);

    let mut events = bench.hold(0, 200, POLL, true);
    events.extend(bench.hold(200, 1000, POLL, false));

    assert_eq!(events, vec![(200, Gesture::Press)]);
}

#[test]
fn single_press_resolves_after_double_press_window() {
    let mut bench = Bench::with_defaults();

    let mut events = bench.hold(0, 100, POLL, true);
    events.extend(bench.hold(100, 1000, POLL, false));

    // Released at 100; the window closes at 350.
    assert_eq!(events, vec![(350, Gesture::Press)]);
}

#[test]
fn bouncy_press_counts_once() {
    let mut bench = Bench::with_defaults();
    let mut events = Vec::new();
    for (i, t) in (0..30).step_by(POLL as usize).enumerate() {
        if let Some(g) = bench.sample_at(t, i % 2 == 0) {
            events.push((t, g));
        }
    }
    events.extend(bench.hold(30, 150, POLL, true));
    events.extend(bench.hold(150, 1000, POLL, false));

    assert_eq!(gestures_only(&events), vec![Gesture::Press]);
}

#[test]
fn blip_shorter_than_debounce_is_ignored() {
    let mut bench = Bench::with_defaults();
    let mut events = bench.hold(0, 30, POLL, true);
    events.extend(bench.hold(30, 3000, POLL, false));
    assert!(events.is_empty());
    assert_eq!(bench.key.state(), StateId::Idle);
}

// ── Double press ──────────────────────────────────────────────

#[test]
fn double_press_reported_once() {
    let mut bench = Bench::with_defaults();

    let mut events = bench.hold(0, 100, POLL, true);
    events.extend(bench.hold(100, 200, POLL, false));
    events.extend(bench.hold(200, 300, POLL, true));
    events.extend(bench.hold(300, 1500, POLL, false));

    assert_eq!(events, vec![(250, Gesture::DoublePress)]);
}

#[test]
fn second_press_after_window_is_two_presses() {
    let mut bench = Bench::with_defaults();

    let mut events = bench.hold(0, 100, POLL, true);
    events.extend(bench.hold(100, 600, POLL, false));
    events.extend(bench.hold(600, 700, POLL, true));
    events.extend(bench.hold(700, 1500, POLL, false));

    assert_eq!(events, vec![(350, Gesture::Press), (950, Gesture::Press)]);
}

// ── Long press ────────────────────────────────────────────────

#[test]
fn long_press_reported_once_until_release() {
    let mut bench = Bench::with_defaults();
    bench.key.enable_repeat(false);

    let mut events = bench.hold(0, 3000, POLL, true);
    assert_eq!(events, vec![(455, Gesture::LongPress)]);
    assert_eq!(bench.key.state(), StateId::Wait);

    events.extend(bench.hold(3000, 4000, POLL, false));
    assert_eq!(gestures_only(&events), vec![Gesture::LongPress]);
    assert_eq!(bench.key.state(), StateId::Idle);
}

#[test]
fn long_press_released_before_first_repeat() {
    let mut bench = Bench::with_defaults();

    let mut events = bench.hold(0, 800, POLL, true);
    events.extend(bench.hold(800, 2000, POLL, false));

    assert_eq!(events, vec![(800, Gesture::LongPress)]);
}

// ── Auto-repeat ───────────────────────────────────────────────

#[test]
fn auto_repeat_ticks_every_interval() {
    let mut bench = Bench::with_defaults();

    let events = bench.hold(0, 5000, POLL, true);

    let times: Vec<u32> = events.iter().map(|&(t, _)| t).collect();
    assert_eq!(times, vec![1100, 1750, 2400, 3050, 3700, 4350]);
    assert!(events.iter().all(|&(_, g)| g == Gesture::Press));

    // Release ends the sequence without a further result.
    assert_eq!(bench.sample_at(5000, false), None);
    assert_eq!(bench.key.state(), StateId::Idle);
}

#[test]
fn auto_repeat_with_distinct_result() {
    let mut bench = Bench::with_defaults();
    bench.key.enable_repeat_result(true);

    let events = bench.hold(0, 2500, POLL, true);
    assert_eq!(
        gestures_only(&events),
        vec![Gesture::RepeatPress, Gesture::RepeatPress, Gesture::RepeatPress]
    );
}

#[test]
fn press_only_hold_reports_single_press() {
    let mut bench = Bench::new(
        ActiveLevel::High,
        KeySwitchConfig {
            features: Features::press_only(),
            ..KeySwitchConfig::default()
        },
    );

    let mut events = bench.hold(0, 3000, POLL, true);
    events.extend(bench.hold(3000, 3500, POLL, false));

    assert_eq!(events, vec![(450, Gesture::Press)]);
}
