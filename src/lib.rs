//! Minimum-grid-cost dispatch of solar, wind, and grid power.

#[cfg(feature = "api")]
pub mod api;
/// SVG bar chart output.
pub mod chart;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(feature = "tui")]
pub mod tui;
