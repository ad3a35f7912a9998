use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use stopwatch_core::{Ticker, DEFAULT_TICK_MS};

use crate::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PumpOp {
    Start(u64),
    Stop,
    Quit,
}

/// Ticker backed by a dedicated thread that posts `AppEvent::Tick` to the
/// main loop while armed.
pub struct Pump {
    ctl: Sender<PumpOp>,
    running: bool,
    handle: Option<JoinHandle<()>>,
}

impl Pump {
    pub fn spawn(events: Sender<AppEvent>) -> std::io::Result<Self> {
        let (ctl, ctl_rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("pump".into())
            .spawn(move || pump_thread(ctl_rx, events))?;
        Ok(Self {
            ctl,
            running: false,
            handle: Some(handle),
        })
    }
}

impl Ticker for Pump {
    fn arm(&mut self, period_ms: u64) {
        if !self.running {
            self.running = true;
            self.ctl.send(PumpOp::Start(period_ms)).ok();
        }
    }

    fn disarm(&mut self) {
        if self.running {
            self.running = false;
            self.ctl.send(PumpOp::Stop).ok();
        }
    }

    fn is_armed(&self) -> bool {
        self.running
    }
}

impl Drop for Pump {
    fn drop(&mut self) {
        self.ctl.send(PumpOp::Quit).ok();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("pump thread panicked");
            }
        }
    }
}

fn pump_thread(ctl: Receiver<PumpOp>, events: Sender<AppEvent>) {
    let mut interval: Option<Duration> = None;
    // Only whole milliseconds are reported; `last` advances by exactly what
    // was sent so the remainder carries into the next tick.
    let mut last = Instant::now();

    loop {
        // Block-wait when stopped, wake every period when running
        let op = match interval {
            Some(period) => match ctl.recv_timeout(period) {
                Ok(op) => Some(op),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            },
            None => match ctl.recv() {
                Ok(op) => Some(op),
                Err(_) => break,
            },
        };

        match op {
            Some(PumpOp::Start(period_ms)) => {
                let period_ms = if period_ms == 0 { DEFAULT_TICK_MS } else { period_ms };
                if interval.is_none() {
                    last = Instant::now();
                }
                interval = Some(Duration::from_millis(period_ms));
                log::debug!("pump started, period {} ms", period_ms);
            }
            Some(PumpOp::Stop) => {
                interval = None;
                log::debug!("pump stopped");
            }
            Some(PumpOp::Quit) => break,
            None => {
                let delta_ms = last.elapsed().as_millis() as u64;
                if delta_ms == 0 {
                    continue;
                }
                last += Duration::from_millis(delta_ms);
                if events.send(AppEvent::Tick { delta_ms }).is_err() {
                    break;
                }
            }
        }
    }
    log::debug!("pump thread exiting");
}
