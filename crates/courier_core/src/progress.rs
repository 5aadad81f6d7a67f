/// Tick period the host is expected to drive `Msg::Tick` at, in milliseconds.
pub const TICK_MS: u64 = 50;

/// Auto-increment stops here; the gap to 100 signals "waiting for server".
pub const AUTO_INCREMENT_CAP: u8 = 90;

/// Ticks the bar holds at 100 % before hiding (500 ms at the tick period).
pub const SETTLE_TICKS: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Hidden,
    Running,
    Settling {
        ticks_left: u8,
    },
}

/// Synthetic progress indicator for one in-flight submission.
///
/// This is a UX affordance, not a measurement: the bar climbs at a fixed
/// cadence, deliberately stalls short of completion until the request
/// settles, then snaps to 100 and hides. It carries no byte-level signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressState {
    percent: u8,
    phase: Phase,
}

impl ProgressState {
    /// Show the indicator and begin the fixed-cadence climb from 0.
    pub fn start(&mut self) {
        self.percent = 0;
        self.phase = Phase::Running;
    }

    /// Stop the climb, snap to 100 and schedule the hide.
    ///
    /// Safe to call in any phase; repeated calls while settling are no-ops,
    /// and finishing an indicator that never started stays hidden.
    pub fn finish(&mut self) {
        if self.phase == Phase::Running {
            self.percent = 100;
            self.phase = Phase::Settling {
                ticks_left: SETTLE_TICKS,
            };
        }
    }

    /// Advance one tick. Returns true when the visible state changed.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            Phase::Hidden => false,
            Phase::Running => {
                if self.percent < AUTO_INCREMENT_CAP {
                    self.percent += 1;
                    true
                } else {
                    false
                }
            }
            Phase::Settling { ticks_left } => {
                if ticks_left > 1 {
                    self.phase = Phase::Settling {
                        ticks_left: ticks_left - 1,
                    };
                    false
                } else {
                    self.percent = 0;
                    self.phase = Phase::Hidden;
                    true
                }
            }
        }
    }

    pub fn visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}
