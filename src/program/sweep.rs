//! Automatic back-and-forth sweep.
//!
//! Reproduces an up-loop `min..=max` followed by a down-loop `max..=min`,
//! repeated forever. Both endpoints are therefore emitted twice at each
//! reversal, and one cycle is `2 * (max - min + 1)` steps.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct Sweep {
    min: u8,
    max: u8,
    pos: u8,
    dir: Direction,
    step_delay_ms: u32,
}

impl Sweep {
    /// Bounds given in reverse order are swapped.
    pub fn new(min: u8, max: u8, step_delay_ms: u32) -> Self {
        let (min, max) = (min.min(max), min.max(max));
        Self {
            min,
            max,
            pos: min,
            dir: Direction::Up,
            step_delay_ms,
        }
    }

    /// Next position of the ramp.
    pub fn next_angle(&mut self) -> u8 {
        let angle = self.pos;
        match self.dir {
            Direction::Up if self.pos >= self.max => self.dir = Direction::Down,
            Direction::Up => self.pos += 1,
            Direction::Down if self.pos <= self.min => self.dir = Direction::Up,
            Direction::Down => self.pos -= 1,
        }
        angle
    }

    /// Pause after each written step.
    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    /// Steps in one full up-and-down cycle.
    pub fn cycle_len(&self) -> usize {
        2 * (usize::from(self.max - self.min) + 1)
    }
}

impl Iterator for Sweep {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_angle())
    }
}
