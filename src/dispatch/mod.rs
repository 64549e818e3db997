/// Linear-program construction and solve for a single dispatch request.
pub mod optimizer;
pub mod types;

pub use optimizer::{DispatchOptimizer, optimize};
pub use types::{Allocation, DispatchError, DispatchRequest, DispatchResult, InputError, Source};
