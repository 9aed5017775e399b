//! Servo end-effector firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter          LogEventSink     Esp32Clock    │
//! │  (ServoPort+SerialPort)   (EventSink)      (uptime)      │
//! │  ButtonInput (boot button → AppCommand)                  │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ────────────────    │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │           AppService (pure logic)                  │  │
//! │  │  Sweep · DirectCommand · EchoCommand               │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  Watchdog · telemetry Interval                           │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::{Delay, FreeRtos};
use log::{info, warn};

use servoarm::adapters::button::ButtonInput;
use servoarm::adapters::hardware::HardwareAdapter;
use servoarm::adapters::log_sink::LogEventSink;
use servoarm::adapters::time::{Esp32Clock, Interval};
use servoarm::app::events::AppEvent;
use servoarm::app::ports::EventSink;
use servoarm::app::service::AppService;
use servoarm::config::{Program, ServoConfig};
use servoarm::drivers::button::ButtonDriver;
use servoarm::drivers::ledc::LedcChannel;
use servoarm::drivers::servo::ServoDriver;
use servoarm::drivers::uart::CommandUart;
use servoarm::drivers::{hw_init, watchdog::Watchdog};
use servoarm::pins;

/// Configuration baked in at build time, e.g.
/// `SERVOARM_CONFIG='{"program":"echo"}' cargo build --release`.
fn load_config() -> ServoConfig {
    let Some(json) = option_env!("SERVOARM_CONFIG") else {
        return ServoConfig::default();
    };
    match ServoConfig::from_json(json) {
        Ok(cfg) => {
            info!("Config: build-time override applied");
            cfg
        }
        Err(e) => {
            warn!("Config override rejected ({}), using defaults", e);
            ServoConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("servoarm v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config();
    info!(
        "Config: program={} sweep={}..={}@{}ms baud={}",
        config.program,
        config.sweep_min_deg,
        config.sweep_max_deg,
        config.sweep_step_delay_ms,
        config.baud_rate
    );

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals(config.baud_rate) {
        // Watchdog is not armed yet.
        log::error!("HAL init failed: {}, restarting", e);
        FreeRtos::delay_ms(1000);
        esp_idf_hal::reset::restart();
    }
    let watchdog = Watchdog::new(config.watchdog_timeout_ms);

    let pwm = LedcChannel::new(pins::SERVO_LEDC_CHANNEL, pins::SERVO_PWM_RESOLUTION_BITS);
    let servo = ServoDriver::new(pwm, config.min_pulse_us, config.max_pulse_us);
    let uart = CommandUart::new(pins::COMMAND_UART_NUM);
    let mut hw = HardwareAdapter::new(servo, uart);
    let mut button = ButtonInput::new(ButtonDriver::new(pins::BOOT_BUTTON_GPIO));

    let mut delay = Delay::new_default();
    let mut log_sink = LogEventSink::new();
    let clock = Esp32Clock::new();
    let mut telemetry = Interval::new(
        u64::from(config.telemetry_interval_secs) * 1000,
        clock.uptime_ms(),
    );

    // ── 4. App service ────────────────────────────────────────
    let mut app = AppService::new(config);
    app.start(&mut hw, &mut log_sink);

    info!(
        "System ready (watchdog {} ms). Entering control loop.",
        watchdog.timeout_ms()
    );

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        let now_ms = clock.uptime_ms();
        app.tick(now_ms, &mut hw, &mut delay, &mut log_sink);

        if let Some(cmd) = button.poll(now_ms, app.program()) {
            app.handle_command(cmd, &mut hw, &mut log_sink);
        }

        if telemetry.poll(now_ms) {
            log_sink.emit(&AppEvent::Telemetry(app.build_telemetry(&hw)));
        }

        watchdog.feed();

        // Serial programs have no built-in pause; give the idle task a tick.
        // The UART driver keeps buffering meanwhile.
        if app.program() != Program::Sweep {
            FreeRtos::delay_ms(1);
        }
    }
}
