//! One-shot hardware peripheral initialization.
//!
//! Configures the servo LEDC timer/channel, installs the command UART
//! driver and sets up the boot button input using raw ESP-IDF sys calls. Called once from `main()` before the
//! control loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during peripheral initialization or register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
    LedcDutyFailed(i32),
    UartInstallFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LedcTimerFailed(rc) => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
            Self::LedcDutyFailed(rc) => write!(f, "LEDC duty update failed (rc={})", rc),
            Self::UartInstallFailed(rc) => write!(f, "UART driver install failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl From<HwInitError> for crate::error::Error {
    fn from(e: HwInitError) -> Self {
        match e {
            HwInitError::UartInstallFailed(rc) => {
                crate::error::SerialError::DriverInstallFailed(rc).into()
            }
            HwInitError::LedcDutyFailed(_) => crate::error::ServoError::PwmWriteFailed.into(),
            HwInitError::LedcTimerFailed(_) => Self::Init("LEDC timer"),
            HwInitError::LedcChannelFailed(_) => Self::Init("LEDC channel"),
            HwInitError::GpioConfigFailed(_) => Self::Init("button GPIO"),
        }
    }
}

/// Configure every peripheral the firmware uses.
#[cfg(target_os = "espidf")]
pub fn init_peripherals(baud_rate: u32) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_servo_pwm()?;
        init_command_uart(baud_rate)?;
        init_boot_button()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(_baud_rate: u32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── LEDC PWM (servo) ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_servo_pwm() -> Result<(), HwInitError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: pins::SERVO_LEDC_TIMER,
        duty_resolution: pins::SERVO_PWM_RESOLUTION_BITS,
        freq_hz: pins::SERVO_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as esp_err_t {
        return Err(HwInitError::LedcTimerFailed(ret));
    }

    // Duty 0 keeps the line low until the servo is attached.
    let channel = ledc_channel_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        channel: pins::SERVO_LEDC_CHANNEL,
        timer_sel: pins::SERVO_LEDC_TIMER,
        gpio_num: pins::SERVO_PWM_GPIO,
        duty: 0,
        hpoint: 0,
        ..Default::default()
    };
    let ret = unsafe { ledc_channel_config(&channel) };
    if ret != ESP_OK as esp_err_t {
        return Err(HwInitError::LedcChannelFailed(ret));
    }

    info!(
        "hw_init: servo PWM on GPIO{} ({} Hz, {}-bit)",
        pins::SERVO_PWM_GPIO,
        pins::SERVO_PWM_FREQ_HZ,
        pins::SERVO_PWM_RESOLUTION_BITS
    );
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn set_ledc_duty(channel: u32, duty: u16) -> Result<(), HwInitError> {
    // SAFETY: the channel was configured in init_servo_pwm(); only the main
    // loop writes duty registers.
    unsafe {
        let ret = ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, u32::from(duty));
        if ret != ESP_OK as esp_err_t {
            return Err(HwInitError::LedcDutyFailed(ret));
        }
        let ret = ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
        if ret != ESP_OK as esp_err_t {
            return Err(HwInitError::LedcDutyFailed(ret));
        }
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn set_ledc_duty(_channel: u32, _duty: u16) -> Result<(), HwInitError> {
    Ok(())
}

// ── Command UART ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_command_uart(baud_rate: u32) -> Result<(), HwInitError> {
    let cfg = uart_config_t {
        baud_rate: baud_rate as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };
    let ret = unsafe { uart_param_config(pins::COMMAND_UART_NUM, &cfg) };
    if ret != ESP_OK as esp_err_t {
        return Err(HwInitError::UartInstallFailed(ret));
    }

    // -1 = UART_PIN_NO_CHANGE for RTS/CTS.
    let ret = unsafe {
        uart_set_pin(
            pins::COMMAND_UART_NUM,
            pins::COMMAND_UART_TX_GPIO,
            pins::COMMAND_UART_RX_GPIO,
            -1,
            -1,
        )
    };
    if ret != ESP_OK as esp_err_t {
        return Err(HwInitError::UartInstallFailed(ret));
    }

    let ret = unsafe {
        uart_driver_install(
            pins::COMMAND_UART_NUM,
            pins::COMMAND_UART_RX_BUF,
            0,
            0,
            core::ptr::null_mut(),
            0,
        )
    };
    if ret != ESP_OK as esp_err_t {
        return Err(HwInitError::UartInstallFailed(ret));
    }

    info!(
        "hw_init: command UART{} at {} baud (tx={}, rx={})",
        pins::COMMAND_UART_NUM,
        baud_rate,
        pins::COMMAND_UART_TX_GPIO,
        pins::COMMAND_UART_RX_GPIO
    );
    Ok(())
}

// ── Boot button ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_boot_button() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::BOOT_BUTTON_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        ..Default::default()
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as esp_err_t {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    info!("hw_init: boot button on GPIO{}", pins::BOOT_BUTTON_GPIO);
    Ok(())
}

/// Raw input level of a configured GPIO.
#[cfg(target_os = "espidf")]
pub fn gpio_read(gpio: i32) -> bool {
    // SAFETY: read-only register access on a pin configured as input.
    unsafe { gpio_get_level(gpio) != 0 }
}
