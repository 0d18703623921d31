//! Rent index (Mietspiegel) calculator core.
//!
//! Resolves a location tier from an address, a rent band from construction year and
//! size, a feature score from the selected Merkmale, and the resulting per-m² discount.

pub mod config;
pub mod error;
pub mod estimate;
pub mod tables;
pub mod telemetry;
