//! Interactive visualizer application
//!
//! Single view: algorithm list on the left, bar chart on the right.
//! Comparison view: two charts side by side. Playback runs while the event
//! loop keeps polling, so keys stay responsive during an animation.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::status_footer::{render_footer, render_status_line, StatusLevel};
use super::app::App;
use super::ui::{modal_rect, screen_layout};
use super::visualizer::{Mode, View, VisualizerState};
use crate::algorithm::Algorithm;
use crate::playback::{Panel, PlaybackPhase};
use crate::render::{BarChart, ChartState};
use crate::theme::Theme;

/// Upper bound on how long the loop waits for input.
const TICK_RATE: Duration = Duration::from_millis(20);

pub struct VisualizerApp {
    app: App,
    state: VisualizerState,
    theme: Theme,
}

impl VisualizerApp {
    pub fn new(state: VisualizerState, theme: Theme) -> Result<Self> {
        let app = App::new(TICK_RATE)?;
        Ok(Self { app, state, theme })
    }

    /// Run until the user quits. Running sessions are stopped first.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.state.tick();
            if self.state.should_quit() {
                self.app.quit();
            }
            if self.app.should_quit() {
                break;
            }

            let state = &self.state;
            let theme = &self.theme;
            self.app.draw(|frame| render(frame, state, theme))?;

            let timeout = self.state.next_due().unwrap_or(TICK_RATE);
            if let Some(Event::Key(key)) = self.app.next_event(timeout)? {
                if key.kind == KeyEventKind::Press {
                    self.state.handle_key(key);
                }
            }
        }
        tracing::info!("visualizer closed");
        Ok(())
    }
}

/// Draw the whole screen for `state`.
pub fn render(frame: &mut Frame, state: &VisualizerState, theme: &Theme) {
    let area = frame.area();
    let [main, status, footer] = screen_layout(area);

    match state.view() {
        View::Single => render_single(frame, main, state, theme),
        View::Compare => render_compare(frame, main, state, theme),
    }

    let (text, level) = match state.status() {
        Some(message) => (message.text.clone(), message.level),
        None => (summary_text(state), StatusLevel::Info),
    };
    render_status_line(frame, status, &text, level, theme);
    render_footer(frame, footer, footer_keys(state.mode(), state.view()), theme);

    match state.mode() {
        Mode::Help => render_help_modal(frame, area, theme),
        Mode::ComparePicker => render_picker_modal(frame, area, state, theme),
        Mode::Normal => {}
    }
}

fn render_single(frame: &mut Frame, area: Rect, state: &VisualizerState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(10)])
        .split(area);

    let items: Vec<ListItem> = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let selected = algorithm == state.selected();
            let (marker, style) = if selected {
                ("(\u{2022}) ", theme.accent_bold_style())
            } else {
                ("( ) ", theme.text_style())
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(algorithm.display_name(), style),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(" Algorithms "),
    );
    frame.render_widget(list, chunks[0]);

    if let Some(panel) = state.panels().first() {
        render_panel(frame, chunks[1], panel, theme);
    }
}

fn render_compare(frame: &mut Frame, area: Rect, state: &VisualizerState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    for (panel, chunk) in state.panels().iter().zip(chunks.iter()) {
        render_panel(frame, *chunk, panel, theme);
    }
}

/// Chart with its title, plus the complexity line below.
fn render_panel(frame: &mut Frame, area: Rect, panel: &Panel<ChartState>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let title = format!(" {} ", panel.algorithm().display_name());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(title);
    frame.render_widget(
        BarChart::new(panel.renderer(), theme).block(block),
        chunks[0],
    );

    let info = match panel.report() {
        Some(report) => Span::styled(report.summary(), theme.success_style()),
        None => Span::styled(progress_text(panel), theme.text_style()),
    };
    frame.render_widget(Paragraph::new(Line::from(info)), chunks[1]);
}

/// Complexity plus the current step while running.
fn progress_text(panel: &Panel<ChartState>) -> String {
    let complexity = format!("Time complexity: {}", panel.algorithm().complexity());
    match (panel.phase(), panel.sequence()) {
        (PlaybackPhase::Running, Some(sequence)) => {
            let step = panel.last_step().map(|s| s + 1).unwrap_or(0);
            format!("{} - step {}/{}", complexity, step, sequence.len())
        }
        (PlaybackPhase::Cancelled, _) => format!("{} - cancelled", complexity),
        _ => complexity,
    }
}

/// Status line text when no message is pending.
fn summary_text(state: &VisualizerState) -> String {
    match state.view() {
        View::Single => format!("Data directory: {}", state.data_dir().display()),
        View::Compare => "Comparing".to_string(),
    }
}

fn footer_keys(mode: Mode, view: View) -> &'static [(&'static str, &'static str)] {
    match (mode, view) {
        (Mode::Help, _) => &[("any key", "close help")],
        (Mode::ComparePicker, _) => &[
            ("\u{2191}\u{2193}", "choose"),
            ("tab", "switch slot"),
            ("enter", "compare"),
            ("esc", "cancel"),
        ],
        (Mode::Normal, View::Single) => &[
            ("\u{2191}\u{2193}", "select"),
            ("enter", "visualize"),
            ("r", "reset"),
            ("c", "compare"),
            ("?", "help"),
            ("q", "quit"),
        ],
        (Mode::Normal, View::Compare) => &[
            ("enter", "visualize"),
            ("r", "reset"),
            ("esc", "back"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_area = modal_rect(48, 18, area);
    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), theme.accent_style()),
            Span::raw(desc),
        ])
    };
    vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key("\u{2191}/\u{2193} j/k", "Select algorithm"),
        key("Enter/Space", "Start visualization"),
        key("r", "Reset to the first frame"),
        key("c", "Compare two algorithms"),
        key("Esc", "Leave comparison"),
        key("?", "This help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled("Colors", theme.text_secondary_style())),
        Line::from(Span::styled("  changed this step", Style::default().fg(theme.bar_active))),
        Line::from(Span::styled("  changed earlier", Style::default().fg(theme.bar_settled))),
        Line::from(Span::styled("  untouched", Style::default().fg(theme.bar_baseline))),
        Line::from(Span::styled("  sorted", Style::default().fg(theme.bar_complete))),
    ]
}

fn render_picker_modal(frame: &mut Frame, area: Rect, state: &VisualizerState, theme: &Theme) {
    let modal_area = modal_rect(44, 7, area);
    frame.render_widget(Clear, modal_area);

    let picker = state.picker();
    let lines: Vec<Line> = picker
        .slots
        .iter()
        .enumerate()
        .map(|(i, algorithm)| {
            let style = if i == picker.active {
                theme.accent_bold_style()
            } else {
                theme.text_style()
            };
            let marker = if i == picker.active { "> " } else { "  " };
            Line::from(Span::styled(
                format!("{}{}: {}", marker, i + 1, algorithm.display_name()),
                style,
            ))
        })
        .collect();

    let mut content = vec![Line::from("")];
    content.extend(lines);
    let modal = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" Compare "),
    );
    frame.render_widget(modal, modal_area);
}
