//! API response types.

use serde::Serialize;

use crate::dispatch::DispatchResult;
use crate::report;

/// Body returned by `POST /optimize`, for both success and infeasible solves.
#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    /// Tagged solver outcome (`status` is `success` or `failure`).
    pub result: DispatchResult,
    /// Text summary as printed by the CLI.
    pub summary: String,
}

impl From<DispatchResult> for OptimizeResponse {
    fn from(result: DispatchResult) -> Self {
        let summary = report::summary(&result);
        Self { result, summary }
    }
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Allocation;

    #[test]
    fn success_response_serializes_tagged_result() {
        let resp = OptimizeResponse::from(DispatchResult::Success(Allocation {
            solar_mw: 50.0,
            wind_mw: 60.0,
            grid_mw: 10.0,
        }));
        let json = serde_json::to_value(&resp).expect("serializable");
        assert_eq!(json["result"]["status"], "success");
        assert_eq!(json["result"]["grid_mw"], 10.0);
        assert!(
            json["summary"]
                .as_str()
                .is_some_and(|s| s.starts_with("Solar Power: 50.00 MW"))
        );
    }

    #[test]
    fn failure_response_carries_reason_and_message() {
        let resp = OptimizeResponse::from(DispatchResult::Failure {
            reason: "no feasible dispatch".to_string(),
        });
        let json = serde_json::to_value(&resp).expect("serializable");
        assert_eq!(json["result"]["status"], "failure");
        assert_eq!(json["result"]["reason"], "no feasible dispatch");
        assert_eq!(json["summary"], report::FAILURE_MESSAGE);
    }
}
