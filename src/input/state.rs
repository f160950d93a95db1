//! Per-button and per-key state records

/// One row of the tracker's button/key tables
///
/// `held` is steady state and survives across updates. `went_down` and
/// `went_up` are transient: they are cleared at the start of every update
/// and only reflect events drained by that update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonRecord {
    /// Timestamp of the most recent press
    pub down_time: u32,
    /// Timestamp of the most recent release
    pub up_time: u32,
    pub went_down: bool,
    pub went_up: bool,
    pub held: bool,
}

impl ButtonRecord {
    pub(crate) fn press(&mut self, timestamp: u32) {
        self.held = true;
        self.down_time = timestamp;
        self.went_down = true;
    }

    pub(crate) fn release(&mut self, timestamp: u32) {
        self.held = false;
        self.up_time = timestamp;
        self.went_up = true;
    }

    pub(crate) fn begin_frame(&mut self) {
        self.went_down = false;
        self.went_up = false;
    }

    /// Single-value view of this record
    ///
    /// A press and release inside the same update collapse to
    /// `JustReleased`; read the flags directly to see both edges.
    pub fn state(&self) -> ButtonState {
        match (self.held, self.went_down, self.went_up) {
            (true, true, _) => ButtonState::JustPressed,
            (true, false, _) => ButtonState::Pressed,
            (false, _, true) => ButtonState::JustReleased,
            (false, _, false) => ButtonState::Released,
        }
    }

    /// Milliseconds held as of `now`, or `None` when not held
    pub fn held_for(&self, now: u32) -> Option<u32> {
        self.held.then(|| now.wrapping_sub(self.down_time))
    }
}

/// Button press state with edge detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    /// Pressed during the last update
    JustPressed,
    /// Held down across updates
    Pressed,
    /// Released during the last update
    JustReleased,
}

impl ButtonState {
    /// Returns true if button is currently down (just pressed or held)
    pub fn is_down(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    pub fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    pub fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased)
    }
}
