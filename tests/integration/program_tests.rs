//! Integration tests: AppService running each program against mock hardware.

use servoarm::app::events::AppEvent;
use servoarm::app::service::AppService;
use servoarm::config::{Program, ServoConfig};

use crate::mock_hw::{MockHardware, RecordingDelay, RecordingSink};

fn make_app(program: Program) -> (AppService, MockHardware, RecordingDelay, RecordingSink) {
    let config = ServoConfig {
        program,
        ..Default::default()
    };
    let mut app = AppService::new(config);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();
    app.start(&mut hw, &mut sink);
    (app, hw, RecordingDelay::default(), sink)
}

// ── Sweep ─────────────────────────────────────────────────────

#[test]
fn sweep_writes_one_step_per_tick_with_15ms_pause() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Sweep);
    assert!(hw.attached);
    for _ in 0..3 {
        app.tick(0, &mut hw, &mut delay, &mut sink);
    }
    assert_eq!(hw.writes, [20, 21, 22]);
    assert_eq!(delay.ms_calls, [15, 15, 15]);
}

#[test]
fn sweep_full_cycle_stays_within_20_to_160() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Sweep);
    for _ in 0..282 {
        app.tick(0, &mut hw, &mut delay, &mut sink);
    }
    let mut expected: Vec<i32> = (20..=160).collect();
    expected.extend((20..=160).rev());
    assert_eq!(hw.writes, expected);
    assert!(hw.writes.iter().all(|a| (20..=160).contains(a)));
    assert_eq!(delay.total_ms(), 282 * 15);
}

#[test]
fn sweep_ignores_serial_input() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Sweep);
    hw.send(b"170\n");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [20]);
    assert_eq!(hw.rx.len(), 4);
}

// ── Direct ────────────────────────────────────────────────────

#[test]
fn direct_writes_valid_integer() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Direct);
    hw.send(b"120\n");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [120]);
    assert!(delay.ms_calls.is_empty());
    assert!(hw.tx.is_empty(), "direct program must not echo");
}

#[test]
fn direct_non_numeric_writes_zero() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Direct);
    hw.send(b"hello\n");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [0]);
}

#[test]
fn direct_passes_out_of_range_through_unvalidated() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Direct);
    hw.send(b"-20\n999\n12abc\n");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [-20, 999, 12]);
}

#[test]
fn direct_idle_tick_writes_nothing() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Direct);
    for t in 0..10 {
        app.tick(t, &mut hw, &mut delay, &mut sink);
    }
    assert!(hw.writes.is_empty());
}

#[test]
fn direct_line_split_across_ticks() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Direct);
    hw.send(b"13");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    assert!(hw.writes.is_empty());
    hw.send(b"5\n");
    app.tick(10, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [135]);
}

#[test]
fn direct_unterminated_line_flushes_after_timeout() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Direct);
    hw.send(b"60");
    app.tick(100, &mut hw, &mut delay, &mut sink);
    app.tick(1099, &mut hw, &mut delay, &mut sink);
    assert!(hw.writes.is_empty());
    app.tick(1100, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [60]);
}

#[test]
fn direct_overlong_line_reports_overflow_once() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Direct);
    let mut line = vec![b'7'; 70];
    line.push(b'\n');
    hw.send(&line);
    app.tick(0, &mut hw, &mut delay, &mut sink);
    app.tick(1, &mut hw, &mut delay, &mut sink);
    let overflows: Vec<_> = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::LineOverflow(_)))
        .collect();
    assert_eq!(overflows, [&AppEvent::LineOverflow(6)]);
    // 64 sevens saturate.
    assert_eq!(hw.writes, [i32::MAX]);
}

// ── Echo ──────────────────────────────────────────────────────

#[test]
fn echo_holds_initial_angle_before_input() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Echo);
    app.tick(0, &mut hw, &mut delay, &mut sink);
    app.tick(1, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [90, 90]);
    assert!(hw.tx.is_empty());
}

#[test]
fn echo_returns_input_and_writes_value() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Echo);
    hw.send(b"45\n");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.tx_str(), "45\n\r\n");
    assert_eq!(hw.writes, [45]);
    assert_eq!(delay.ms_calls, [2, 2, 2], "2 ms after every byte");
    assert!(sink.events.contains(&AppEvent::Echoed { len: 3, value: 45 }));
}

#[test]
fn echo_rewrites_held_value_every_tick() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Echo);
    hw.send(b"30");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    app.tick(1, &mut hw, &mut delay, &mut sink);
    app.tick(2, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [30, 30, 30]);
    assert_eq!(hw.tx_str(), "30\r\n", "echo only when bytes arrived");
}

#[test]
fn echo_non_numeric_writes_zero() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Echo);
    hw.send(b"up\n");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [0]);
    assert_eq!(hw.tx_str(), "up\n\r\n");
}

#[test]
fn echo_overlong_burst_echoes_kept_prefix_and_reports_once() {
    let (mut app, mut hw, mut delay, mut sink) = make_app(Program::Echo);
    let mut burst = b"45".to_vec();
    burst.extend(std::iter::repeat_n(b'x', 68));
    hw.send(&burst);

    app.tick(0, &mut hw, &mut delay, &mut sink);
    app.tick(1, &mut hw, &mut delay, &mut sink);

    let mut expected = burst[..64].to_vec();
    expected.extend_from_slice(b"\r\n");
    assert_eq!(hw.tx, expected);
    assert_eq!(hw.writes, [45, 45]);
    assert_eq!(delay.ms_calls.len(), 70, "pause follows every byte, kept or not");

    let overflows: Vec<_> = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::LineOverflow(_)))
        .collect();
    assert_eq!(overflows, [&AppEvent::LineOverflow(6)]);
    assert!(sink.events.contains(&AppEvent::Echoed { len: 64, value: 45 }));
}
