//! Integration tests: AppCommand handling and telemetry.

use servoarm::adapters::button::ButtonInput;
use servoarm::app::commands::AppCommand;
use servoarm::app::events::AppEvent;
use servoarm::app::service::AppService;
use servoarm::config::{Program, ServoConfig};
use servoarm::drivers::button::ButtonDriver;

use crate::mock_hw::{MockHardware, RecordingDelay, RecordingSink};

#[test]
fn start_emits_started_with_configured_program() {
    let mut app = AppService::new(ServoConfig {
        program: Program::Direct,
        ..Default::default()
    });
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();
    app.start(&mut hw, &mut sink);
    assert!(hw.attached);
    assert_eq!(sink.events, [AppEvent::Started(Program::Direct)]);
}

#[test]
fn switch_program_starts_fresh() {
    let mut app = AppService::new(ServoConfig::default());
    let mut hw = MockHardware::new();
    let mut delay = RecordingDelay::default();
    let mut sink = RecordingSink::default();
    app.start(&mut hw, &mut sink);

    app.tick(0, &mut hw, &mut delay, &mut sink);
    app.tick(0, &mut hw, &mut delay, &mut sink);
    app.handle_command(AppCommand::SwitchProgram(Program::Echo), &mut hw, &mut sink);
    assert_eq!(app.program(), Program::Echo);
    assert!(sink.events.contains(&AppEvent::ProgramChanged {
        from: Program::Sweep,
        to: Program::Echo,
    }));

    app.tick(0, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.last_write(), Some(90), "echo holds initial angle");

    app.handle_command(AppCommand::SwitchProgram(Program::Sweep), &mut hw, &mut sink);
    app.tick(0, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.last_write(), Some(20), "sweep restarts at its lower bound");
}

#[test]
fn park_writes_initial_angle_between_lines() {
    let mut app = AppService::new(ServoConfig {
        program: Program::Direct,
        initial_angle: 70,
        ..Default::default()
    });
    let mut hw = MockHardware::new();
    let mut delay = RecordingDelay::default();
    let mut sink = RecordingSink::default();
    app.start(&mut hw, &mut sink);

    hw.send(b"1500\n");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    app.handle_command(AppCommand::Park, &mut hw, &mut sink);
    app.tick(1, &mut hw, &mut delay, &mut sink);
    assert_eq!(hw.writes, [1500, 70], "direct program leaves the parked angle alone");
    assert_eq!(app.last_value(), 70);
    assert_eq!(app.write_count(), 2);
}

#[test]
fn boot_button_cycles_programs() {
    let mut app = AppService::new(ServoConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();
    let mut button = ButtonInput::new(ButtonDriver::new(0));
    app.start(&mut hw, &mut sink);

    let mut now = 0;
    for expected in [Program::Direct, Program::Echo, Program::Sweep] {
        button.driver_mut().set_pressed(true);
        for _ in 0..10 {
            now += 15;
            assert_eq!(button.poll(now, app.program()), None);
        }
        button.driver_mut().set_pressed(false);
        now += 15;
        let cmd = button.poll(now, app.program()).expect("short press");
        app.handle_command(cmd, &mut hw, &mut sink);
        assert_eq!(app.program(), expected);
    }

    let changes = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ProgramChanged { .. }))
        .count();
    assert_eq!(changes, 3);
}

#[test]
fn telemetry_counts_writes_and_lines() {
    let mut app = AppService::new(ServoConfig {
        program: Program::Direct,
        ..Default::default()
    });
    let mut hw = MockHardware::new();
    let mut delay = RecordingDelay::default();
    let mut sink = RecordingSink::default();
    app.start(&mut hw, &mut sink);

    hw.send(b"10\n20\n");
    app.tick(0, &mut hw, &mut delay, &mut sink);
    let t = app.build_telemetry(&hw);
    assert_eq!(t.program, Program::Direct);
    assert_eq!(t.last_value, 20);
    assert_eq!(t.angle, 20);
    assert_eq!(t.writes, 2);
    assert_eq!(t.lines, 2);
}
