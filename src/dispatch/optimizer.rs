//! Minimum-grid-cost dispatch as a three-variable linear program.
//!
//! The problem is fixed:
//!
//! ```text
//! minimise   0*solar + 0*wind + 5*grid
//! subject to solar <= solar_max
//!            wind  <= wind_max
//!            grid  <= grid_max
//!            solar + wind + grid == load
//!            solar, wind, grid >= 0
//! ```

use good_lp::solvers::minilp::minilp;
use good_lp::{ProblemVariables, ResolutionError, Solution, SolverModel, constraint, variable};
use tracing::{debug, warn};

use super::types::{Allocation, DispatchError, DispatchRequest, DispatchResult, Source};

/// Stateless entry point for dispatch solves.
///
/// Holds no data between calls, so one value can be shared freely across
/// threads or request handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct DispatchOptimizer;

impl DispatchOptimizer {
    /// Solves for the given capacities and load.
    ///
    /// Inputs are passed to the solver as given. Negative bounds are not
    /// rejected here; they produce an infeasible problem.
    pub fn optimize(
        &self,
        solar_max_mw: f64,
        wind_max_mw: f64,
        grid_max_mw: f64,
        load_mw: f64,
    ) -> DispatchResult {
        optimize(&DispatchRequest::new(
            solar_max_mw,
            wind_max_mw,
            grid_max_mw,
            load_mw,
        ))
    }
}

/// Solves one dispatch request and never panics.
///
/// # Examples
///
/// ```
/// use renewable_dispatch::dispatch::{DispatchRequest, optimize};
///
/// let result = optimize(&DispatchRequest::new(50.0, 60.0, 100.0, 120.0));
/// let a = result.allocation().copied().unwrap();
/// assert_eq!((a.solar_mw, a.wind_mw, a.grid_mw), (50.0, 60.0, 10.0));
/// ```
pub fn optimize(request: &DispatchRequest) -> DispatchResult {
    debug!(?request, "solving dispatch");
    match solve_lp(request) {
        Ok(raw) => {
            let allocation = Allocation {
                solar_mw: round2(raw.solar_mw),
                wind_mw: round2(raw.wind_mw),
                grid_mw: round2(raw.grid_mw),
            };
            debug!(?allocation, cost = allocation.cost(), "dispatch solved");
            DispatchResult::Success(allocation)
        }
        Err(err) => {
            warn!(?request, %err, "dispatch failed");
            DispatchResult::from(err)
        }
    }
}

/// Builds and solves the LP, returning unrounded values.
fn solve_lp(request: &DispatchRequest) -> Result<Allocation, DispatchError> {
    let solar_max = request.solar_max_mw;
    let wind_max = request.wind_max_mw;
    let grid_max = request.grid_max_mw;
    let load = request.load_mw;

    let mut vars = ProblemVariables::new();
    let solar = vars.add(variable().min(0.0));
    let wind = vars.add(variable().min(0.0));
    let grid = vars.add(variable().min(0.0));

    let objective = Source::Solar.unit_cost() * solar
        + Source::Wind.unit_cost() * wind
        + Source::Grid.unit_cost() * grid;

    let solution = vars
        .minimise(objective)
        .using(minilp)
        .with(constraint!(solar <= solar_max))
        .with(constraint!(wind <= wind_max))
        .with(constraint!(grid <= grid_max))
        .with(constraint!(solar + wind + grid == load))
        .solve()
        .map_err(|err| match err {
            ResolutionError::Infeasible => DispatchError::Infeasible,
            other => DispatchError::Solver(other.to_string()),
        })?;

    Ok(Allocation {
        solar_mw: solution.value(solar),
        wind_mw: solution.value(wind),
        grid_mw: solution.value(grid),
    })
}

/// Rounds to 2 decimal places and folds `-0.0` into `0.0`.
fn round2(x: f64) -> f64 {
    let r = (x * 100.0).round() / 100.0;
    if r == 0.0 { 0.0 } else { r }
}
