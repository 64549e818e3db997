//! Interactive form state for the TUI.

use crate::config::ToolConfig;
use crate::dispatch::{self, DispatchRequest, DispatchResult};

/// One editable input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Solar max capacity.
    SolarMax,
    /// Wind max capacity.
    WindMax,
    /// Grid max capacity.
    GridMax,
    /// Load demand.
    Load,
}

impl Field {
    /// Fields in display order.
    pub const ALL: [Field; 4] = [Field::SolarMax, Field::WindMax, Field::GridMax, Field::Load];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::SolarMax => "Solar Max Capacity (MW)",
            Self::WindMax => "Wind Max Capacity (MW)",
            Self::GridMax => "Grid Max Capacity (MW)",
            Self::Load => "Load Demand (MW)",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::SolarMax => 0,
            Self::WindMax => 1,
            Self::GridMax => 2,
            Self::Load => 3,
        }
    }
}

/// TUI application state.
///
/// The result is recomputed on every edit, so it always matches `request`.
pub struct App {
    /// Current inputs.
    pub request: DispatchRequest,
    /// Latest optimizer outcome for `request`.
    pub result: DispatchResult,
    /// Field receiving adjustments.
    pub selected: Field,
    /// Name of the preset the inputs were last reset from.
    pub preset_name: String,
    /// Whether the user has requested quit.
    pub quit: bool,
    initial: DispatchRequest,
}

impl App {
    /// Creates the form from an already-resolved configuration.
    pub fn new(preset_name: &str, config: &ToolConfig) -> Self {
        let request = config.inputs.to_request();
        Self {
            request,
            result: dispatch::optimize(&request),
            selected: Field::SolarMax,
            preset_name: preset_name.to_string(),
            quit: false,
            initial: request,
        }
    }

    /// Current value of a field.
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::SolarMax => self.request.solar_max_mw,
            Field::WindMax => self.request.wind_max_mw,
            Field::GridMax => self.request.grid_max_mw,
            Field::Load => self.request.load_mw,
        }
    }

    /// Moves the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        let i = (self.selected.index() + 1) % Field::ALL.len();
        self.selected = Field::ALL[i];
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn select_prev(&mut self) {
        let n = Field::ALL.len();
        let i = (self.selected.index() + n - 1) % n;
        self.selected = Field::ALL[i];
    }

    /// Adds `delta` MW to the selected field, clamped at zero, and re-solves.
    pub fn adjust(&mut self, delta: f64) {
        let v = (self.value(self.selected) + delta).max(0.0);
        match self.selected {
            Field::SolarMax => self.request.solar_max_mw = v,
            Field::WindMax => self.request.wind_max_mw = v,
            Field::GridMax => self.request.grid_max_mw = v,
            Field::Load => self.request.load_mw = v,
        }
        self.resolve();
    }

    /// Loads a preset's inputs. Unknown names are ignored.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(cfg) = ToolConfig::from_preset(name) else {
            return;
        };
        self.request = cfg.inputs.to_request();
        self.initial = self.request;
        self.preset_name = name.to_string();
        self.resolve();
    }

    /// Restores the inputs the form started with (or last preset loaded).
    pub fn reset(&mut self) {
        self.request = self.initial;
        self.resolve();
    }

    fn resolve(&mut self) {
        self.result = dispatch::optimize(&self.request);
    }
}
