//! ESP32 time adapter.
//!
//! Monotonic uptime for line timeouts and telemetry pacing.
//!
//! - **`target_os = "espidf"`**: wraps `esp_timer_get_time()` (microsecond
//!   precision, monotonic since boot).
//! - **`not(target_os = "espidf")`**: uses `std::time::Instant` for
//!   host-side testing and simulation.

pub struct Esp32Clock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for Esp32Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32Clock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Milliseconds since boot.
    #[cfg(target_os = "espidf")]
    pub fn uptime_ms(&self) -> u64 {
        // SAFETY: esp_timer_get_time reads the RTC counter; no shared state.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64 / 1_000
    }

    /// Milliseconds since construction.
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Fires once every `interval_ms`, driven by a caller-supplied clock.
#[derive(Debug, Clone)]
pub struct Interval {
    interval_ms: u64,
    /// `None` once the next deadline would lie past `u64::MAX`.
    next_ms: Option<u64>,
}

impl Interval {
    /// `interval_ms == 0` never fires.
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms,
            next_ms: now_ms.checked_add(interval_ms),
        }
    }

    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(next_ms) = self.next_ms else {
            return false;
        };
        if self.interval_ms == 0 || now_ms < next_ms {
            return false;
        }
        // Skip missed periods instead of firing in a burst.
        let periods = (now_ms - next_ms) / self.interval_ms + 1;
        self.next_ms = periods
            .checked_mul(self.interval_ms)
            .and_then(|step| next_ms.checked_add(step));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let clock = Esp32Clock::new();
        let a = clock.uptime_ms();
        let b = clock.uptime_ms();
        assert!(b >= a);
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut iv = Interval::new(1000, 0);
        assert!(!iv.poll(999));
        assert!(iv.poll(1000));
        assert!(!iv.poll(1500));
        assert!(iv.poll(2000));
    }

    #[test]
    fn interval_skips_missed_periods() {
        let mut iv = Interval::new(100, 0);
        assert!(iv.poll(550));
        assert!(!iv.poll(599));
        assert!(iv.poll(600));
    }

    #[test]
    fn deadline_past_u64_max_never_fires() {
        let mut iv = Interval::new(1000, u64::MAX - 10);
        assert!(!iv.poll(u64::MAX));
    }

    #[test]
    fn last_representable_period_fires_once() {
        let mut iv = Interval::new(1000, u64::MAX - 1500);
        assert!(iv.poll(u64::MAX));
        assert!(!iv.poll(u64::MAX));
    }

    #[test]
    fn zero_interval_is_disabled() {
        let mut iv = Interval::new(0, 0);
        assert!(!iv.poll(u64::MAX));
    }
}
