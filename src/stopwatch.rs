use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stopwatch_core::{Stopwatch, Ticker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Redraw,
    Ignored,
    Quit,
}

/// Everything the stopwatch screen shows: the timer itself plus view state
/// that never reaches the engine.
pub struct StopwatchScreen<T: Ticker> {
    pub timer: Stopwatch<T>,
    /// Number of most recent laps scrolled past.
    pub lap_scroll_offset: usize,
    pub help_visible: bool,
}

impl<T: Ticker> StopwatchScreen<T> {
    pub fn new(ticker: T, tick_ms: u64) -> Self {
        Self {
            timer: Stopwatch::new(ticker, tick_ms),
            lap_scroll_offset: 0,
            help_visible: false,
        }
    }

    pub fn record_lap(&mut self) -> bool {
        if !self.timer.lap() {
            return false;
        }
        self.lap_scroll_offset = 0;
        log::debug!("lap {} recorded", self.timer.engine().laps().len());
        true
    }

    pub fn reset(&mut self) -> bool {
        self.lap_scroll_offset = 0;
        self.timer.reset()
    }

    fn scroll_laps(&mut self, older: bool) -> bool {
        let max = self.timer.engine().laps().len().saturating_sub(1);
        let next = if older {
            (self.lap_scroll_offset + 1).min(max)
        } else {
            self.lap_scroll_offset.saturating_sub(1)
        };
        let changed = next != self.lap_scroll_offset;
        self.lap_scroll_offset = next;
        changed
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        if self.help_visible {
            return match key.code {
                KeyCode::Char('q') => KeyOutcome::Quit,
                _ => {
                    self.help_visible = false;
                    KeyOutcome::Redraw
                }
            };
        }

        let changed = match key.code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::F(2) => self.timer.toggle(),
            KeyCode::Char('l') => self.record_lap(),
            KeyCode::Char('r') | KeyCode::F(3) => self.reset(),
            KeyCode::Up => self.scroll_laps(false),
            KeyCode::Down => self.scroll_laps(true),
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.help_visible = true;
                true
            }
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            _ => false,
        };

        if changed {
            KeyOutcome::Redraw
        } else {
            KeyOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stopwatch_core::{ManualTicker, StopwatchState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> StopwatchScreen<ManualTicker> {
        StopwatchScreen::new(ManualTicker::new(), 10)
    }

    #[test]
    fn space_toggles_and_arms() {
        let mut s = screen();
        assert_eq!(s.handle_key(key(KeyCode::Char(' '))), KeyOutcome::Redraw);
        assert!(s.timer.ticker().is_armed());
        assert_eq!(s.handle_key(key(KeyCode::Enter)), KeyOutcome::Redraw);
        assert!(!s.timer.ticker().is_armed());
        assert_eq!(s.handle_key(key(KeyCode::F(2))), KeyOutcome::Redraw);
        assert!(s.timer.engine().is_running());
    }

    #[test]
    fn lap_key_ignored_while_stopped() {
        let mut s = screen();
        assert_eq!(s.handle_key(key(KeyCode::Char('l'))), KeyOutcome::Ignored);
        assert!(s.timer.engine().laps().is_empty());
    }

    #[test]
    fn lap_recording_scrolls_to_newest() {
        let mut s = screen();
        s.timer.start();
        for delta in [100, 200, 300] {
            s.timer.tick(delta);
            s.handle_key(key(KeyCode::Char('l')));
        }
        assert_eq!(s.timer.engine().laps(), &[100, 300, 600]);

        assert_eq!(s.handle_key(key(KeyCode::Down)), KeyOutcome::Redraw);
        assert_eq!(s.handle_key(key(KeyCode::Down)), KeyOutcome::Redraw);
        assert_eq!(s.handle_key(key(KeyCode::Down)), KeyOutcome::Ignored);
        assert_eq!(s.lap_scroll_offset, 2);

        s.handle_key(key(KeyCode::Char('l')));
        assert_eq!(s.lap_scroll_offset, 0);
        assert_eq!(s.handle_key(key(KeyCode::Up)), KeyOutcome::Ignored);
    }

    #[test]
    fn reset_works_while_running() {
        let mut s = screen();
        s.timer.start();
        s.timer.tick(1234);
        s.record_lap();
        assert_eq!(s.handle_key(key(KeyCode::Char('r'))), KeyOutcome::Redraw);
        assert_eq!(
            s.timer.state(),
            StopwatchState { elapsed_ms: 0, running: false, laps: &[] }
        );
        assert!(!s.timer.ticker().is_armed());
        assert_eq!(s.handle_key(key(KeyCode::F(3))), KeyOutcome::Ignored);
    }

    #[test]
    fn help_overlay_swallows_next_key() {
        let mut s = screen();
        assert_eq!(s.handle_key(key(KeyCode::Char('?'))), KeyOutcome::Redraw);
        assert!(s.help_visible);
        assert_eq!(s.handle_key(key(KeyCode::Char(' '))), KeyOutcome::Redraw);
        assert!(!s.help_visible);
        assert!(!s.timer.engine().is_running());
    }

    #[test]
    fn quit_keys() {
        let mut s = screen();
        assert_eq!(s.handle_key(key(KeyCode::Char('q'))), KeyOutcome::Quit);
        assert_eq!(s.handle_key(key(KeyCode::Esc)), KeyOutcome::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(s.handle_key(ctrl_c), KeyOutcome::Quit);
    }
}
