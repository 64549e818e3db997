//! Color constants for the TUI.

use ratatui::style::Color;

use crate::dispatch::Source;

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Highlight for the selected input.
pub const SELECTED_FG: Color = Color::Cyan;
/// Failure message color.
pub const FAILURE_FG: Color = Color::Red;

/// Bar color per source, matching the SVG chart.
pub fn source_color(source: Source) -> Color {
    match source {
        Source::Solar => Color::Rgb(255, 165, 0),
        Source::Wind => Color::Green,
        Source::Grid => Color::Blue,
    }
}
