/// CSV export of dispatch allocations.
pub mod export;
