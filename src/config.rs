//! TOML-based tool configuration and preset definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::chart::ChartOptions;
use crate::dispatch::DispatchRequest;

/// Top-level configuration parsed from TOML.
///
/// All fields have defaults matching the `default` preset. Load from TOML
/// with [`ToolConfig::from_toml_file`] or use [`ToolConfig::default_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Capacities and load fed to the optimizer.
    #[serde(default)]
    pub inputs: InputsConfig,
    /// Chart output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Capacities and load (MW).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputsConfig {
    /// Solar max capacity (MW, >= 0).
    pub solar_max_mw: f64,
    /// Wind max capacity (MW, >= 0).
    pub wind_max_mw: f64,
    /// Grid max capacity (MW, >= 0).
    pub grid_max_mw: f64,
    /// Load demand (MW, >= 0).
    pub load_mw: f64,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            solar_max_mw: 50.0,
            wind_max_mw: 60.0,
            grid_max_mw: 100.0,
            load_mw: 120.0,
        }
    }
}

impl InputsConfig {
    /// Converts to the optimizer's request type.
    pub fn to_request(&self) -> DispatchRequest {
        DispatchRequest::new(
            self.solar_max_mw,
            self.wind_max_mw,
            self.grid_max_mw,
            self.load_mw,
        )
    }
}

/// Chart output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Where the SVG bar chart is written.
    pub chart_path: PathBuf,
    /// Chart width in pixels (> 0).
    pub chart_width: u32,
    /// Chart height in pixels (> 0).
    pub chart_height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart_path: PathBuf::from("dispatch_plot.svg"),
            chart_width: 600,
            chart_height: 400,
        }
    }
}

impl OutputConfig {
    /// Chart rendering options derived from this section.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.chart_width,
            height: self.chart_height,
            ..ChartOptions::default()
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"inputs.load_mw"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ToolConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &[
        "default",
        "renewable_surplus",
        "capacity_shortfall",
        "zero_load",
    ];

    /// Starting values of the interactive tool: renewables short, grid tops up.
    pub fn default_preset() -> Self {
        Self {
            inputs: InputsConfig::default(),
            output: OutputConfig::default(),
        }
    }

    /// Load fits inside solar and wind; the grid stays idle.
    pub fn renewable_surplus() -> Self {
        Self {
            inputs: InputsConfig {
                load_mw: 50.0,
                ..InputsConfig::default()
            },
            output: OutputConfig::default(),
        }
    }

    /// Total capacity below load; the solve is infeasible.
    pub fn capacity_shortfall() -> Self {
        Self {
            inputs: InputsConfig {
                solar_max_mw: 10.0,
                wind_max_mw: 10.0,
                grid_max_mw: 10.0,
                load_mw: 50.0,
            },
            output: OutputConfig::default(),
        }
    }

    /// No demand at all.
    pub fn zero_load() -> Self {
        Self {
            inputs: InputsConfig {
                load_mw: 0.0,
                ..InputsConfig::default()
            },
            output: OutputConfig::default(),
        }
    }

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::default_preset()),
            "renewable_surplus" => Ok(Self::renewable_surplus()),
            "capacity_shortfall" => Ok(Self::capacity_shortfall()),
            "zero_load" => Ok(Self::zero_load()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let i = &self.inputs;

        for (field, value) in [
            ("inputs.solar_max_mw", i.solar_max_mw),
            ("inputs.wind_max_mw", i.wind_max_mw),
            ("inputs.grid_max_mw", i.grid_max_mw),
            ("inputs.load_mw", i.load_mw),
        ] {
            if !value.is_finite() {
                errors.push(ConfigError {
                    field: field.into(),
                    message: format!("must be a finite number, got {value}"),
                });
            } else if value < 0.0 {
                errors.push(ConfigError {
                    field: field.into(),
                    message: format!("must be >= 0, got {value}"),
                });
            }
        }

        let o = &self.output;
        if o.chart_path.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "output.chart_path".into(),
                message: "must not be empty".into(),
            });
        }
        if o.chart_width == 0 {
            errors.push(ConfigError {
                field: "output.chart_width".into(),
                message: "must be > 0".into(),
            });
        }
        if o.chart_height == 0 {
            errors.push(ConfigError {
                field: "output.chart_height".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_valid() {
        let cfg = ToolConfig::default_preset();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "default should be valid: {errors:?}");
    }

    #[test]
    fn default_inputs_match_tool_defaults() {
        let req = ToolConfig::default_preset().inputs.to_request();
        assert_eq!(req, DispatchRequest::new(50.0, 60.0, 100.0, 120.0));
    }

    #[test]
    fn from_preset_unknown() {
        let err = ToolConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
        assert_eq!(e.field, "preset");
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ToolConfig::PRESETS {
            let cfg = ToolConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn shortfall_preset_is_under_capacity() {
        let req = ToolConfig::capacity_shortfall().inputs.to_request();
        assert!(req.total_capacity_mw() < req.load_mw);
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[inputs]
solar_max_mw = 80.0
wind_max_mw = 20.5
grid_max_mw = 40.0
load_mw = 90.0

[output]
chart_path = "out/plot.svg"
chart_width = 800
chart_height = 500
"#;
        let cfg = ToolConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.inputs.wind_max_mw), Some(20.5));
        assert_eq!(cfg.as_ref().map(|c| c.output.chart_width), Some(800));
        assert_eq!(
            cfg.as_ref().map(|c| c.output.chart_path.clone()),
            Some(PathBuf::from("out/plot.svg"))
        );
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[inputs]
load_mw = 30.0
"#;
        let cfg = ToolConfig::from_toml_str(toml).ok();
        assert_eq!(cfg.as_ref().map(|c| c.inputs.load_mw), Some(30.0));
        assert_eq!(cfg.as_ref().map(|c| c.inputs.solar_max_mw), Some(50.0));
        assert_eq!(cfg.as_ref().map(|c| c.output.chart_height), Some(400));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[inputs]
nuclear_max_mw = 10.0
"#;
        assert!(ToolConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn validation_collects_every_negative_input() {
        let mut cfg = ToolConfig::default_preset();
        cfg.inputs.solar_max_mw = -1.0;
        cfg.inputs.load_mw = -2.0;
        let errors = cfg.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "inputs.solar_max_mw"));
        assert!(errors.iter().any(|e| e.field == "inputs.load_mw"));
    }

    #[test]
    fn validation_catches_non_finite_input() {
        let mut cfg = ToolConfig::default_preset();
        cfg.inputs.grid_max_mw = f64::INFINITY;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "inputs.grid_max_mw"));
    }

    #[test]
    fn validation_catches_zero_chart_size() {
        let mut cfg = ToolConfig::default_preset();
        cfg.output.chart_width = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "output.chart_width"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ToolConfig::from_toml_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert_eq!(err.field, "config");
        assert!(err.message.contains("exist.toml"));
    }
}
