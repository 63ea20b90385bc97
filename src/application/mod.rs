//! Application layer services implementing business logic.
//!
//! Services consume repository traits from the domain layer and provide a
//! clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, listing, resolution
//! - [`services::metrics_service::MetricsService`] - Click recording and totals

pub mod services;
