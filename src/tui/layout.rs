//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

use super::runtime::{App, Field};
use super::style;
use crate::chart;
use crate::dispatch::{Allocation, DispatchResult, Source};
use crate::report;

/// Bar values are sent to the widget in hundredths of a MW.
const CENTS: f64 = 100.0;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // inputs + chart
            Constraint::Length(5), // summary
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(30)])
        .split(chunks[1]);

    render_header(frame, app, chunks[0]);
    render_inputs(frame, app, body[0]);
    match &app.result {
        DispatchResult::Success(a) => render_chart(frame, app, a, body[1]),
        DispatchResult::Failure { reason } => render_failure(frame, reason, body[1]),
    }
    render_summary(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Header bar: tool name and active preset.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " Renewable Integration Optimization Assistant ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" preset: "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Input form with the selected field highlighted.
fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| {
            let text = format!(" {:<24}{:>8.2}", field.label(), app.value(field));
            if field == app.selected {
                Line::from(Span::styled(
                    format!(">{text}"),
                    Style::default()
                        .fg(style::SELECTED_FG)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!(" {text}"))
            }
        })
        .collect();

    let block = Block::default().title(" Inputs ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Bar chart of the allocation, scaled like the SVG chart.
fn render_chart(frame: &mut Frame, app: &App, allocation: &Allocation, area: Rect) {
    let bars: Vec<Bar> = allocation
        .entries()
        .iter()
        .map(|&(source, mw)| {
            Bar::default()
                .value(to_cents(mw))
                .text_value(format!("{mw:.2}"))
                .label(Line::from(short_label(source)))
                .style(Style::default().fg(style::source_color(source)))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / 4).clamp(3, 16);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Optimized Power Dispatch (MW) ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .max(to_cents(chart::y_axis_max(&app.request)));

    frame.render_widget(chart, area);
}

/// Replaces the chart when there is no allocation to plot.
fn render_failure(frame: &mut Frame, reason: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            report::FAILURE_MESSAGE,
            Style::default()
                .fg(style::FAILURE_FG)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("({reason})")),
    ];
    let block = Block::default()
        .title(" Optimized Power Dispatch (MW) ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Text summary identical to the CLI output.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = report::summary(&app.result)
        .lines()
        .map(|l| Line::from(format!("  {l}")))
        .collect();
    let block = Block::default().title(" Dispatch ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Up/Down:Field  Left/Right:±1  PgUp/PgDn:±10  1-4:Preset  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}

fn short_label(source: Source) -> &'static str {
    match source {
        Source::Solar => "Solar",
        Source::Wind => "Wind",
        Source::Grid => "Grid",
    }
}

fn to_cents(mw: f64) -> u64 {
    (mw.max(0.0) * CENTS).round() as u64
}
