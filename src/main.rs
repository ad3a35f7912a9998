mod config;
mod logging;
mod pump;
mod stopwatch;
mod ui;

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::config::Args;
use crate::pump::Pump;
use crate::stopwatch::{KeyOutcome, StopwatchScreen};

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Redraw,
    Key(KeyEvent),
    Tick { delta_ms: u64 },
}

struct StopwatchApp {
    terminal: DefaultTerminal,
    screen: StopwatchScreen<Pump>,
}

impl StopwatchApp {
    fn new(terminal: DefaultTerminal, pump: Pump, tick_ms: u64) -> Self {
        Self {
            terminal,
            screen: StopwatchScreen::new(pump, tick_ms),
        }
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let screen = &self.screen;
        self.terminal
            .draw(|frame| ui::draw(frame, screen))
            .context("can't draw")?;
        Ok(())
    }

    fn run(&mut self, events: Receiver<AppEvent>) -> anyhow::Result<()> {
        self.redraw()?;
        while let Ok(event) = events.recv() {
            let redraw = match event {
                AppEvent::Redraw => true,
                AppEvent::Tick { delta_ms } => self.screen.timer.tick(delta_ms),
                AppEvent::Key(key) => match self.screen.handle_key(key) {
                    KeyOutcome::Redraw => true,
                    KeyOutcome::Ignored => false,
                    KeyOutcome::Quit => break,
                },
            };
            if redraw {
                self.redraw()?;
            }
        }

        // Clean up
        self.screen.timer.stop();
        Ok(())
    }
}

fn input_thread(events: Sender<AppEvent>) {
    loop {
        let forwarded = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                events.send(AppEvent::Key(key))
            }
            Ok(Event::Resize(_, _)) => events.send(AppEvent::Redraw),
            Ok(_) => continue,
            Err(e) => {
                log::error!("terminal input failed: {}", e);
                break;
            }
        };
        if forwarded.is_err() {
            break;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.logging())?;
    log::info!("stopwatch starting, tick period {} ms", args.tick_ms);

    let (tx, rx) = mpsc::channel();
    let pump = Pump::spawn(tx.clone()).context("can't spawn pump thread")?;
    thread::Builder::new()
        .name("input".into())
        .spawn(move || input_thread(tx))
        .context("can't spawn input thread")?;

    let terminal = ratatui::try_init().context("can't set up terminal")?;
    let mut app = StopwatchApp::new(terminal, pump, args.tick_ms);
    let result = app.run(rx);
    ratatui::restore();

    if let Err(e) = &result {
        log::error!("stopwatch failed: {:#}", e);
    }
    log::info!("stopwatch exiting");
    result
}
