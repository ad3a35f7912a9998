use crate::{RunState, StopwatchEngine, StopwatchState};

/// Nominal tick period used when the host doesn't pick one.
pub const DEFAULT_TICK_MS: u64 = 10;

/// A periodic scheduler the host provides.
///
/// While armed it should deliver the real elapsed delta since the previous
/// delivery to [`Stopwatch::tick`]. Arming an already armed ticker must not
/// start a second stream; disarming twice is harmless.
pub trait Ticker {
    fn arm(&mut self, period_ms: u64);
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;
}

/// Ticker that only records what it was told. Hosts that drive `tick`
/// themselves (tests, frame loops) use it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualTicker {
    armed: Option<u64>,
    pub arm_count: usize,
    pub disarm_count: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period of the current arming, if armed.
    pub fn period_ms(&self) -> Option<u64> {
        self.armed
    }
}

impl Ticker for ManualTicker {
    fn arm(&mut self, period_ms: u64) {
        if self.armed.is_none() {
            self.armed = Some(period_ms);
            self.arm_count += 1;
        }
    }

    fn disarm(&mut self) {
        if self.armed.take().is_some() {
            self.disarm_count += 1;
        }
    }

    fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

/// Engine plus the ticker that feeds it, kept in step: the ticker is armed
/// exactly while the engine is running.
pub struct Stopwatch<T: Ticker> {
    engine: StopwatchEngine,
    ticker: T,
    period_ms: u64,
}

impl<T: Ticker> Stopwatch<T> {
    pub fn new(ticker: T, period_ms: u64) -> Self {
        let period_ms = if period_ms == 0 { DEFAULT_TICK_MS } else { period_ms };
        Self {
            engine: StopwatchEngine::new(),
            ticker,
            period_ms,
        }
    }

    pub fn start(&mut self) -> bool {
        let changed = self.engine.start();
        self.resync();
        changed
    }

    pub fn stop(&mut self) -> bool {
        let changed = self.engine.stop();
        self.resync();
        changed
    }

    pub fn toggle(&mut self) -> bool {
        let changed = self.engine.toggle();
        self.resync();
        changed
    }

    pub fn reset(&mut self) -> bool {
        let changed = self.engine.reset();
        self.resync();
        changed
    }

    pub fn lap(&mut self) -> bool {
        self.engine.lap()
    }

    pub fn tick(&mut self, delta_ms: u64) -> bool {
        self.engine.tick(delta_ms)
    }

    /// Arms or disarms the ticker to match the engine.
    pub fn resync(&mut self) {
        match self.engine.run_state() {
            RunState::Running => {
                if !self.ticker.is_armed() {
                    log::debug!("arming ticker at {} ms", self.period_ms);
                    self.ticker.arm(self.period_ms);
                }
            }
            RunState::Stopped => {
                if self.ticker.is_armed() {
                    log::debug!("disarming ticker");
                    self.ticker.disarm();
                }
            }
        }
    }

    pub fn engine(&self) -> &StopwatchEngine {
        &self.engine
    }

    pub fn state(&self) -> StopwatchState<'_> {
        self.engine.state()
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }
}
