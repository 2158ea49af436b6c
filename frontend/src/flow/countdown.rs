pub const REDIRECT_SECONDS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Seconds left after this tick.
    Remaining(u32),
    /// Reached zero on this tick; redirect now.
    Redirect,
    /// Already redirected; the timer should stop.
    Finished,
}

/// Seconds-to-redirect counter. Yields [`Tick::Redirect`] exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    fired: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(REDIRECT_SECONDS)
    }
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            fired: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) -> Tick {
        if self.fired {
            return Tick::Finished;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.fired = true;
            return Tick::Redirect;
        }
        self.remaining -= 1;
        Tick::Remaining(self.remaining)
    }
}
