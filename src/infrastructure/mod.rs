//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for the two backing stores.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`metrics`] - Redis sorted-set click counters

pub mod metrics;
pub mod persistence;
