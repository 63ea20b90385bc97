//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A stored code-to-URL mapping
//! - [`LinkTarget`] - Redirect projection of a link (id and destination only)
//! - [`LinkMetric`] - Cumulative click total for one link
//!
//! Creation uses a separate input struct ([`NewShortLink`]) so that
//! store-generated fields never appear half-initialized.

pub mod metric;
pub mod short_link;

pub use metric::LinkMetric;
pub use short_link::{LinkTarget, NewShortLink, ShortLink};
