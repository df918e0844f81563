//! pt-core: stable foundation for pipetree.
//!
//! Contains:
//! - ids (compact identifiers for host elements and ports)
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI types + constructors used for exported quantities)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PtError, PtResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
