use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use stopwatch_core::{format_time, StopwatchEngine, Ticker};

use crate::stopwatch::StopwatchScreen;

const HELP_TEXT: &str = "\
Space/Enter/F2  start or stop
l               record a lap (while running)
r/F3            reset time and laps
Up/Down         scroll lap list
?/F1            toggle this help
q/Esc           quit";

pub fn draw<T: Ticker>(frame: &mut Frame<'_>, screen: &StopwatchScreen<T>) {
    let [title_area, time_area, controls_area, laps_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new("STOPWATCH".bold()).alignment(Alignment::Center),
        title_area,
    );

    let engine = screen.timer.engine();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format_time(engine.elapsed_ms()),
            Style::new().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        time_area,
    );

    frame.render_widget(
        Paragraph::new(control_line(engine.is_running())).alignment(Alignment::Center),
        controls_area,
    );

    if !engine.laps().is_empty() {
        draw_laps(frame, laps_area, engine, screen.lap_scroll_offset);
    }

    frame.render_widget(
        Paragraph::new("space=start/stop  l=lap  r=reset  ?=help  q=quit".dim())
            .alignment(Alignment::Center),
        footer_area,
    );

    if screen.help_visible {
        draw_help(frame);
    }
}

fn control_line(running: bool) -> Line<'static> {
    let toggle = if running {
        Span::styled(" Stop ", Style::new().fg(Color::Black).bg(Color::Red))
    } else {
        Span::styled(" Start ", Style::new().fg(Color::Black).bg(Color::Green))
    };
    // lap is only meaningful while running
    let lap_style = if running {
        Style::new().fg(Color::Black).bg(Color::Blue)
    } else {
        Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    Line::from(vec![
        toggle,
        Span::raw("  "),
        Span::styled(" Reset ", Style::new().fg(Color::White).bg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(" Lap ", lap_style),
    ])
}

/// Lap list, most recent first, starting `scroll` laps down.
fn draw_laps(frame: &mut Frame<'_>, area: Rect, engine: &StopwatchEngine, scroll: usize) {
    let laps = engine.laps();
    let block = Block::bordered().title(" Lap Times ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line<'_>> = (0..laps.len())
        .rev()
        .skip(scroll)
        .take(inner.height as usize)
        .map(|idx| {
            let split = engine.lap_split_ms(idx).unwrap_or(0);
            Line::from(vec![
                Span::raw(format!("Lap {:>2}", idx + 1)),
                Span::raw("   "),
                Span::styled(
                    format!("+{}", format_time(split)),
                    Style::new().add_modifier(Modifier::DIM),
                ),
                Span::raw("   "),
                Span::raw(format_time(laps[idx])),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn draw_help(frame: &mut Frame<'_>) {
    let [area] = Layout::horizontal([Constraint::Length(52)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::vertical([Constraint::Length(8)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(HELP_TEXT).block(Block::bordered().title(" Help ")),
        area,
    );
}
