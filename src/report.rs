//! Plain-text rendering of dispatch results.

use crate::dispatch::{Allocation, DispatchResult};

/// Message shown in place of the summary when the solve fails.
pub const FAILURE_MESSAGE: &str = "Error: Optimization failed. Please check inputs.";

/// Formats one `"<label>: <value> MW"` line per source, Solar, Wind, Grid.
pub fn allocation_lines(allocation: &Allocation) -> Vec<String> {
    allocation
        .entries()
        .iter()
        .map(|(source, mw)| format!("{}: {mw:.2} MW", source.label()))
        .collect()
}

/// Summary text for any result: allocation lines, or [`FAILURE_MESSAGE`].
pub fn summary(result: &DispatchResult) -> String {
    match result {
        DispatchResult::Success(a) => allocation_lines(a).join("\n"),
        DispatchResult::Failure { .. } => FAILURE_MESSAGE.to_string(),
    }
}
