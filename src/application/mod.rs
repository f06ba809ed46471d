//! Use cases: one struct per operation, composed by the caller.
//!
//! Each use case takes its repository collaborators as `Arc<dyn Trait>` at
//! construction and exposes a single async `execute(input)`. Use cases are
//! stateless and request-scoped; they never call each other. Failure
//! ordering is uniform: existence checks before permission checks, and both
//! before any mutating repository call.

pub mod dashboard;
pub mod memo;
pub mod pagination;
pub mod ticker;
pub mod watchlist;

pub use dashboard::{DashboardOutput, GetDashboard, GetDashboardInput, MemoSummary};
pub use pagination::Pagination;
