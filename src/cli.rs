//! Command-line arguments and config resolution.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, ToolConfig};

/// Renewable integration optimization assistant.
///
/// Splits a load across solar, wind, and grid supply at minimum grid usage,
/// then prints the allocation and writes a bar chart.
#[derive(Debug, Parser)]
#[command(name = "renewable-dispatch", version, about, long_about = None)]
pub struct Cli {
    /// Load settings from a TOML config file.
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Use a built-in preset (default, renewable_surplus, capacity_shortfall, zero_load).
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Solar max capacity in MW.
    #[arg(long, value_name = "MW", allow_negative_numbers = true)]
    pub solar_max: Option<f64>,

    /// Wind max capacity in MW.
    #[arg(long, value_name = "MW", allow_negative_numbers = true)]
    pub wind_max: Option<f64>,

    /// Grid max capacity in MW.
    #[arg(long, value_name = "MW", allow_negative_numbers = true)]
    pub grid_max: Option<f64>,

    /// Load demand in MW.
    #[arg(long, value_name = "MW", allow_negative_numbers = true)]
    pub load: Option<f64>,

    /// Write the bar chart here instead of the configured path.
    #[arg(long, value_name = "PATH", conflicts_with = "no_chart")]
    pub chart_out: Option<PathBuf>,

    /// Skip writing the bar chart.
    #[arg(long)]
    pub no_chart: bool,

    /// Export the allocation as CSV.
    #[arg(long, value_name = "PATH")]
    pub csv_out: Option<PathBuf>,

    /// Serve the HTTP API after solving (requires the `api` feature).
    #[arg(long)]
    pub serve: bool,

    /// HTTP API port.
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Open the interactive terminal UI (requires the `tui` feature).
    #[arg(long, conflicts_with = "serve")]
    pub tui: bool,
}

impl Cli {
    /// Resolves the effective configuration.
    ///
    /// `--config` takes priority, then `--preset`, then the `default` preset.
    /// Per-field flags override whatever was loaded. The result is not
    /// validated here.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file or preset cannot be loaded.
    pub fn resolve_config(&self) -> Result<ToolConfig, ConfigError> {
        let mut cfg = if let Some(ref path) = self.config {
            ToolConfig::from_toml_file(path)?
        } else if let Some(ref name) = self.preset {
            ToolConfig::from_preset(name)?
        } else {
            ToolConfig::default_preset()
        };

        let inputs = &mut cfg.inputs;
        if let Some(v) = self.solar_max {
            inputs.solar_max_mw = v;
        }
        if let Some(v) = self.wind_max {
            inputs.wind_max_mw = v;
        }
        if let Some(v) = self.grid_max {
            inputs.grid_max_mw = v;
        }
        if let Some(v) = self.load {
            inputs.load_mw = v;
        }
        if let Some(ref path) = self.chart_out {
            cfg.output.chart_path = path.clone();
        }

        Ok(cfg)
    }
}
