//! SVG bar chart of a dispatch allocation.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::dispatch::{Allocation, DispatchRequest, Source};

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 40.0;
/// Fraction of each slot occupied by its bar.
const BAR_FILL: f64 = 0.6;
/// Headroom above the tallest of capacities and load.
const Y_HEADROOM: f64 = 1.1;

/// Chart size and text.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Title drawn above the plot area.
    pub title: String,
    /// Y-axis label.
    pub y_label: String,
    /// Number of horizontal grid intervals.
    pub grid_lines: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            title: "Optimized Power Dispatch (MW)".to_string(),
            y_label: "Power (MW)".to_string(),
            grid_lines: 5,
        }
    }
}

/// Fill colour for a source's bar.
pub fn bar_color(source: Source) -> &'static str {
    match source {
        Source::Solar => "orange",
        Source::Wind => "green",
        Source::Grid => "blue",
    }
}

/// Upper end of the y-axis: the largest capacity or load plus 10%.
///
/// Falls back to 1.0 so an all-zero request still yields a drawable axis.
pub fn y_axis_max(request: &DispatchRequest) -> f64 {
    let top = request.peak_mw() * Y_HEADROOM;
    if top.is_finite() && top > 0.0 { top } else { 1.0 }
}

/// Renders the allocation as a standalone SVG document.
pub fn render_svg(
    allocation: &Allocation,
    request: &DispatchRequest,
    options: &ChartOptions,
) -> String {
    let width = f64::from(options.width);
    let height = f64::from(options.height);
    let plot_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let base_y = MARGIN_TOP + plot_h;
    let y_max = y_axis_max(request);
    let n_grid = options.grid_lines.max(1);

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
        w = options.width,
        h = options.height,
    );
    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="white"/>"#,
        w = options.width,
        h = options.height,
    );
    let _ = writeln!(
        svg,
        r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-size="16">{t}</text>"#,
        x = width / 2.0,
        y = MARGIN_TOP / 2.0 + 6.0,
        t = escape(&options.title),
    );

    // Horizontal grid with tick labels.
    for k in 0..=n_grid {
        let frac = f64::from(k) / f64::from(n_grid);
        let y = base_y - plot_h * frac;
        let _ = writeln!(
            svg,
            r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#cccccc" stroke-width="1"/>"##,
            x1 = MARGIN_LEFT,
            x2 = MARGIN_LEFT + plot_w,
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{ty:.1}" text-anchor="end">{v:.1}</text>"#,
            x = MARGIN_LEFT - 6.0,
            ty = y + 4.0,
            v = y_max * frac,
        );
    }

    let slot_w = plot_w / Source::ALL.len() as f64;
    let bar_w = slot_w * BAR_FILL;
    for (i, (source, mw)) in allocation.entries().into_iter().enumerate() {
        let bar_h = (mw / y_max).clamp(0.0, 1.0) * plot_h;
        let x = MARGIN_LEFT + slot_w * i as f64 + (slot_w - bar_w) / 2.0;
        let cx = x + bar_w / 2.0;
        let _ = writeln!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{bar_h:.1}" fill="{fill}"/>"#,
            y = base_y - bar_h,
            fill = bar_color(source),
        );
        let _ = writeln!(
            svg,
            r#"<text x="{cx:.1}" y="{y:.1}" text-anchor="middle">{mw:.2}</text>"#,
            y = base_y - bar_h - 4.0,
        );
        let _ = writeln!(
            svg,
            r#"<text x="{cx:.1}" y="{y:.1}" text-anchor="middle">{label}</text>"#,
            y = base_y + 18.0,
            label = source.label(),
        );
    }

    let _ = writeln!(
        svg,
        r#"<line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{base_y:.1}" stroke="black"/>"#,
        x = MARGIN_LEFT,
        top = MARGIN_TOP,
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{x1:.1}" y1="{base_y:.1}" x2="{x2:.1}" y2="{base_y:.1}" stroke="black"/>"#,
        x1 = MARGIN_LEFT,
        x2 = MARGIN_LEFT + plot_w,
    );
    let ly = MARGIN_TOP + plot_h / 2.0;
    let _ = writeln!(
        svg,
        r#"<text x="16" y="{ly:.1}" text-anchor="middle" transform="rotate(-90 16 {ly:.1})">{t}</text>"#,
        t = escape(&options.y_label),
    );
    svg.push_str("</svg>\n");
    svg
}

/// Renders and writes the chart to `path`.
///
/// # Errors
///
/// Returns an `io::Error` if the file cannot be written.
pub fn write_chart(
    path: &Path,
    allocation: &Allocation,
    request: &DispatchRequest,
    options: &ChartOptions,
) -> io::Result<()> {
    fs::write(path, render_svg(allocation, request, options))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
