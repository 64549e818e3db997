//! Shared fixtures for integration tests.

#![allow(dead_code)]

use renewable_dispatch::dispatch::{Allocation, DispatchRequest};

/// Absolute tolerance for balance and bound checks.
pub const TOL: f64 = 1e-6;

/// The interactive tool's starting inputs (50/60/100/120 MW).
pub fn default_request() -> DispatchRequest {
    DispatchRequest::new(50.0, 60.0, 100.0, 120.0)
}

/// Asserts the balance and per-source bounds of a successful allocation.
pub fn assert_respects_constraints(req: &DispatchRequest, a: &Allocation) {
    assert!(
        (a.total_mw() - req.load_mw).abs() < TOL,
        "supply {} != load {} for {req:?}",
        a.total_mw(),
        req.load_mw
    );
    for (source, mw) in a.entries() {
        assert!(mw >= 0.0, "{source} negative ({mw}) for {req:?}");
        assert!(
            mw <= req.capacity_mw(source) + TOL,
            "{source} {mw} exceeds capacity {} for {req:?}",
            req.capacity_mw(source)
        );
    }
}

/// Minimum grid import any feasible allocation can achieve.
pub fn min_grid_mw(req: &DispatchRequest) -> f64 {
    (req.load_mw - req.solar_max_mw - req.wind_max_mw).max(0.0)
}
