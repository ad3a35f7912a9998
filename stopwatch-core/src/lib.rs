//! Pure stopwatch logic with no platform dependencies.
//! Testable on host, driven by whatever ticker and UI the host provides.

mod ticker;

pub use ticker::{ManualTicker, Stopwatch, Ticker, DEFAULT_TICK_MS};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Stopped,
    Running,
}

/// Borrowed snapshot of the engine, handed to renderers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StopwatchState<'a> {
    pub elapsed_ms: u64,
    pub running: bool,
    pub laps: &'a [u64],
}

/// Elapsed time, running flag and lap list.
///
/// Every command is total: calls that make no sense in the current state
/// (lap or tick while stopped) are no-ops. Mutating commands return whether
/// anything observable changed so the host knows when to redraw.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StopwatchEngine {
    elapsed_ms: u64,
    running: bool,
    laps: Vec<u64>,
}

impl StopwatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        true
    }

    pub fn reset(&mut self) -> bool {
        let changed = self.running || self.elapsed_ms != 0 || !self.laps.is_empty();
        self.running = false;
        self.elapsed_ms = 0;
        self.laps.clear();
        changed
    }

    /// Captures the current elapsed time. Ignored while stopped.
    pub fn lap(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.laps.push(self.elapsed_ms);
        true
    }

    /// Advances elapsed time by the delta the ticker actually observed.
    pub fn tick(&mut self, delta_ms: u64) -> bool {
        if !self.running || delta_ms == 0 {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        true
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run_state(&self) -> RunState {
        if self.running {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    /// Cumulative lap snapshots, oldest first.
    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Time between lap `index` and the one before it (or the start).
    pub fn lap_split_ms(&self, index: usize) -> Option<u64> {
        let lap = *self.laps.get(index)?;
        let prev = match index {
            0 => 0,
            i => self.laps[i - 1],
        };
        Some(lap.saturating_sub(prev))
    }

    pub fn state(&self) -> StopwatchState<'_> {
        StopwatchState {
            elapsed_ms: self.elapsed_ms,
            running: self.running,
            laps: &self.laps,
        }
    }
}

/// Format milliseconds as "MM:SS.cs" (centiseconds). Minutes never roll over
/// into hours, so long runs simply grow the minute field.
pub fn format_time(ms: u64) -> String {
    let m = ms / 60_000;
    let s = (ms % 60_000) / 1000;
    let cs = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", m, s, cs)
}
