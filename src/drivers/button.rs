//! Polled push-button driver with debounce and short/long press detection.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up (the board's BOOT button). The
//! level is sampled from the main loop; [`ButtonDriver::tick`] runs the
//! debounce and gesture state machine on each sample.
//!
//! ## Gesture detection
//!
//! | Gesture     | Condition                       | Event        |
//! |-------------|---------------------------------|--------------|
//! | Short press | Released before 2 s             | `ShortPress` |
//! | Long press  | Held for 2 s (fires while held) | `LongPress`  |
//!
//! A press shorter than the debounce window is ignored.

const DEBOUNCE_MS: u64 = 50;
const LONG_PRESS_MS: u64 = 2000;

/// Button events emitted after gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    ShortPress,
    LongPress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    DebounceWait { since_ms: u64 },
    Pressed { since_ms: u64 },
    /// Long press already reported; wait for release.
    WaitRelease,
}

pub struct ButtonDriver {
    gpio: i32,
    state: GestureState,
    #[cfg(not(target_os = "espidf"))]
    sim_pressed: bool,
}

impl ButtonDriver {
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            state: GestureState::Idle,
            #[cfg(not(target_os = "espidf"))]
            sim_pressed: false,
        }
    }

    /// GPIO pin this button is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Sample the button and advance the gesture state machine.
    pub fn tick(&mut self, now_ms: u64) -> Option<ButtonEvent> {
        let pressed = self.is_pressed();

        match self.state {
            GestureState::Idle => {
                if pressed {
                    self.state = GestureState::DebounceWait { since_ms: now_ms };
                }
                None
            }

            GestureState::DebounceWait { since_ms } => {
                if !pressed {
                    // Bounce.
                    self.state = GestureState::Idle;
                } else if now_ms.saturating_sub(since_ms) >= DEBOUNCE_MS {
                    self.state = GestureState::Pressed { since_ms };
                }
                None
            }

            GestureState::Pressed { since_ms } => {
                if !pressed {
                    self.state = GestureState::Idle;
                    return Some(ButtonEvent::ShortPress);
                }
                if now_ms.saturating_sub(since_ms) >= LONG_PRESS_MS {
                    self.state = GestureState::WaitRelease;
                    return Some(ButtonEvent::LongPress);
                }
                None
            }

            GestureState::WaitRelease => {
                if !pressed {
                    self.state = GestureState::Idle;
                }
                None
            }
        }
    }

    #[cfg(target_os = "espidf")]
    fn is_pressed(&self) -> bool {
        !crate::drivers::hw_init::gpio_read(self.gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn is_pressed(&self) -> bool {
        self.sim_pressed
    }

    /// Simulate the switch being held down or released.
    #[cfg(not(target_os = "espidf"))]
    pub fn set_pressed(&mut self, pressed: bool) {
        self.sim_pressed = pressed;
    }
}
