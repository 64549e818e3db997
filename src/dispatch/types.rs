//! Request, allocation, and result types for power dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A dispatchable power source, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Solar generation (zero marginal cost).
    Solar,
    /// Wind generation (zero marginal cost).
    Wind,
    /// Grid import (positive unit cost).
    Grid,
}

impl Source {
    /// All sources in the order they are reported and charted.
    pub const ALL: [Source; 3] = [Source::Solar, Source::Wind, Source::Grid];

    /// Human-readable label used in summaries and charts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Solar => "Solar Power",
            Self::Wind => "Wind Power",
            Self::Grid => "Grid Power",
        }
    }

    /// Objective coefficient per MW dispatched.
    pub fn unit_cost(self) -> f64 {
        match self {
            Self::Solar | Self::Wind => 0.0,
            Self::Grid => 5.0,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Solar => "solar",
            Self::Wind => "wind",
            Self::Grid => "grid",
        })
    }
}

/// Capacities and demand for one dispatch problem (all MW).
///
/// # Examples
///
/// ```
/// use renewable_dispatch::dispatch::{DispatchRequest, Source};
///
/// let req = DispatchRequest::new(50.0, 60.0, 100.0, 120.0);
/// assert_eq!(req.total_capacity_mw(), 210.0);
/// assert_eq!(req.capacity_mw(Source::Wind), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Maximum solar output (MW).
    pub solar_max_mw: f64,
    /// Maximum wind output (MW).
    pub wind_max_mw: f64,
    /// Maximum grid import (MW).
    pub grid_max_mw: f64,
    /// Load demand to be met exactly (MW).
    pub load_mw: f64,
}

impl DispatchRequest {
    /// Creates a request from the four scalar inputs.
    pub fn new(solar_max_mw: f64, wind_max_mw: f64, grid_max_mw: f64, load_mw: f64) -> Self {
        Self {
            solar_max_mw,
            wind_max_mw,
            grid_max_mw,
            load_mw,
        }
    }

    /// Upper bound for the given source.
    pub fn capacity_mw(&self, source: Source) -> f64 {
        match source {
            Source::Solar => self.solar_max_mw,
            Source::Wind => self.wind_max_mw,
            Source::Grid => self.grid_max_mw,
        }
    }

    /// Sum of all three capacities.
    pub fn total_capacity_mw(&self) -> f64 {
        self.solar_max_mw + self.wind_max_mw + self.grid_max_mw
    }

    /// Largest of the capacities and the load; used to scale charts.
    pub fn peak_mw(&self) -> f64 {
        self.solar_max_mw
            .max(self.wind_max_mw)
            .max(self.grid_max_mw)
            .max(self.load_mw)
    }

    /// Checks the minimum-zero input rule applied by every input surface.
    ///
    /// The optimizer does not call this; negative bounds reaching the solver
    /// simply come back infeasible.
    ///
    /// # Errors
    ///
    /// Returns the first field that is non-finite or negative.
    pub fn validate(&self) -> Result<(), InputError> {
        let fields = [
            ("solar_max_mw", self.solar_max_mw),
            ("wind_max_mw", self.wind_max_mw),
            ("grid_max_mw", self.grid_max_mw),
            ("load_mw", self.load_mw),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// Rejected input value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Value is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Value is below zero.
    #[error("{field} must be >= 0, got {value}")]
    Negative {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl InputError {
    /// Name of the rejected field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotFinite { field, .. } | Self::Negative { field, .. } => field,
        }
    }
}

/// Optimal power split, rounded to 2 decimal places (MW).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Solar dispatch (MW).
    pub solar_mw: f64,
    /// Wind dispatch (MW).
    pub wind_mw: f64,
    /// Grid import (MW).
    pub grid_mw: f64,
}

impl Allocation {
    /// Dispatch assigned to the given source.
    pub fn get(&self, source: Source) -> f64 {
        match source {
            Source::Solar => self.solar_mw,
            Source::Wind => self.wind_mw,
            Source::Grid => self.grid_mw,
        }
    }

    /// `(source, MW)` pairs in reporting order.
    pub fn entries(&self) -> [(Source, f64); 3] {
        Source::ALL.map(|s| (s, self.get(s)))
    }

    /// Total supplied power.
    pub fn total_mw(&self) -> f64 {
        self.solar_mw + self.wind_mw + self.grid_mw
    }

    /// Objective value of this allocation.
    pub fn cost(&self) -> f64 {
        self.entries()
            .iter()
            .map(|&(s, mw)| s.unit_cost() * mw)
            .sum()
    }
}

/// Outcome of one optimizer call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchResult {
    /// An optimal allocation was found.
    Success(Allocation),
    /// No allocation could be produced.
    Failure {
        /// Short description of why the solve failed.
        reason: String,
    },
}

impl DispatchResult {
    /// Returns the allocation on success.
    pub fn allocation(&self) -> Option<&Allocation> {
        match self {
            Self::Success(a) => Some(a),
            Self::Failure { .. } => None,
        }
    }

    /// Returns `true` for [`DispatchResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<DispatchError> for DispatchResult {
    fn from(err: DispatchError) -> Self {
        Self::Failure {
            reason: err.to_string(),
        }
    }
}

/// Solver-side failure, folded into [`DispatchResult::Failure`] by the optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No point satisfies every bound and the load balance.
    #[error("no feasible dispatch: capacities cannot meet the load")]
    Infeasible,
    /// Any other solver outcome (unbounded, numerical trouble).
    #[error("solver error: {0}")]
    Solver(String),
}
