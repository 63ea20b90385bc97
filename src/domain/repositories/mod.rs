//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access behind the Repository pattern and are
//! implemented by concrete stores in the infrastructure layer.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage (relational)
//! - [`MetricsRepository`] - Click totals (sorted-set score store)
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod link_repository;
pub mod metrics_repository;

pub use link_repository::LinkRepository;
pub use metrics_repository::MetricsRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use metrics_repository::MockMetricsRepository;
