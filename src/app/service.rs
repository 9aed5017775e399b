//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the active [`Routine`] and runs exactly one loop
//! iteration per [`tick`](AppService::tick). All I/O flows through port
//! traits injected at call sites, making the service testable with mock
//! adapters.
//!
//! ```text
//!  SerialPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService        │
//!   ServoPort ◀── │ Sweep · Direct · Echo   │ ◀── DelayNs
//!                 └────────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::info;

use crate::config::{Program, ServoConfig};
use crate::program::Routine;

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{EventSink, SerialPort, ServoPort};

/// Counters shared by every program.
#[derive(Debug, Default)]
struct Stats {
    last_value: i32,
    writes: u64,
    lines: u64,
    overflow_reported: usize,
}

impl Stats {
    fn apply(&mut self, hw: &mut impl ServoPort, value: i32, sink: &mut impl EventSink) {
        hw.write(value);
        self.last_value = value;
        self.writes += 1;
        sink.emit(&AppEvent::AngleWritten {
            value,
            angle: hw.read(),
        });
    }

    fn report_overflow(&mut self, total: usize, sink: &mut impl EventSink) {
        if total > self.overflow_reported {
            sink.emit(&AppEvent::LineOverflow(total - self.overflow_reported));
            self.overflow_reported = total;
        }
    }
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: ServoConfig,
    routine: Routine,
    stats: Stats,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch the servo: call [`start`](Self::start) next.
    pub fn new(config: ServoConfig) -> Self {
        let routine = Routine::new(config.program, &config);
        Self {
            config,
            routine,
            stats: Stats::default(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Attach the servo and announce the active program.
    pub fn start(&mut self, hw: &mut impl ServoPort, sink: &mut impl EventSink) {
        hw.attach();
        let program = self.routine.program();
        sink.emit(&AppEvent::Started(program));
        info!("AppService started: {} program", program);
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one loop iteration of the active program.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl ServoPort + SerialPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        let stats = &mut self.stats;
        match &mut self.routine {
            Routine::Sweep(sweep) => {
                let angle = sweep.next_angle();
                stats.apply(hw, i32::from(angle), sink);
                delay.delay_ms(sweep.step_delay_ms());
            }

            Routine::Direct(direct) => {
                while hw.available() > 0 {
                    let Some(byte) = hw.read_byte() else { break };
                    if let Some(value) = direct.feed(byte, now_ms) {
                        stats.lines += 1;
                        stats.apply(hw, value, sink);
                    }
                }
                if let Some(value) = direct.poll_timeout(now_ms) {
                    stats.lines += 1;
                    stats.apply(hw, value, sink);
                }
                stats.report_overflow(direct.overflowed(), sink);
            }

            Routine::Echo(echo) => {
                echo.begin();
                while hw.available() > 0 {
                    let Some(byte) = hw.read_byte() else { break };
                    echo.feed(byte);
                    // Give the next byte time to land (~1 ms per byte at 9600 baud).
                    delay.delay_ms(echo.inter_byte_delay_ms());
                }
                if !echo.received().is_empty() {
                    stats.lines += 1;
                    hw.write_bytes(echo.received());
                    hw.write_bytes(b"\r\n");
                    sink.emit(&AppEvent::Echoed {
                        len: echo.received().len(),
                        value: echo.held(),
                    });
                }
                stats.report_overflow(echo.dropped(), sink);
                stats.apply(hw, echo.held(), sink);
            }
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command between iterations.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut impl ServoPort,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            AppCommand::SwitchProgram(to) => {
                let from = self.routine.program();
                self.routine = Routine::new(to, &self.config);
                self.stats.overflow_reported = 0;
                sink.emit(&AppEvent::ProgramChanged { from, to });
                info!("Program switched: {} -> {}", from, to);
            }
            AppCommand::Park => {
                let value = i32::from(self.config.initial_angle);
                self.stats.apply(hw, value, sink);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self, hw: &impl ServoPort) -> TelemetryData {
        TelemetryData {
            program: self.routine.program(),
            last_value: self.stats.last_value,
            angle: hw.read(),
            pulse_us: hw.pulse_us(),
            writes: self.stats.writes,
            lines: self.stats.lines,
        }
    }

    /// Active program.
    pub fn program(&self) -> Program {
        self.routine.program()
    }

    /// Servo writes issued since startup.
    pub fn write_count(&self) -> u64 {
        self.stats.writes
    }

    /// Last raw command applied to the servo.
    pub fn last_value(&self) -> i32 {
        self.stats.last_value
    }
}
