//! Task Watchdog Timer (TWDT) driver.
//!
//! Resets the device if the control loop stops feeding it within the
//! configured timeout. The loop feeds it once per iteration; the longest
//! iteration is one sweep step or one burst of echo input.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

pub struct Watchdog {
    timeout_ms: u32,
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Watchdog {
    /// Reconfigure the TWDT and subscribe the calling task.
    #[cfg(target_os = "espidf")]
    pub fn new(timeout_ms: u32) -> Self {
        // SAFETY: called once from the main task before the control loop.
        unsafe {
            let cfg = esp_task_wdt_config_t {
                timeout_ms,
                idle_core_mask: 0,
                trigger_panic: true,
            };
            let ret = esp_task_wdt_reconfigure(&cfg);
            if ret != ESP_OK as esp_err_t {
                log::warn!("Watchdog: reconfigure returned {} (keeping sdkconfig timeout)", ret);
            }

            let subscribed = esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK as esp_err_t;
            if subscribed {
                info!("Watchdog: main task subscribed ({} ms)", timeout_ms);
            } else {
                log::warn!("Watchdog: subscribe failed, running unguarded");
            }

            Self {
                timeout_ms,
                subscribed,
            }
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new(timeout_ms: u32) -> Self {
        info!("Watchdog(sim): {} ms, no-op", timeout_ms);
        Self { timeout_ms }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: only the subscribed main task calls feed().
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }
}
