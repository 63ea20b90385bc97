//! Domain layer containing business entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation
//! concerns; repository traits define contracts that the infrastructure
//! layer implements.

pub mod entities;
pub mod repositories;
