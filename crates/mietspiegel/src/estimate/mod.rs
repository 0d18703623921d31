//! Estimate record, the four resolvers, and the session that keeps them consistent.

mod band;
mod discount;
mod input;
mod location;
mod scoring;
mod session;

#[cfg(test)]
mod tests;

pub use band::{effective_year, resolve_band, RentBand, SIMPLE_LOCATION_REDUCTION};
pub use discount::compute_discount;
pub use input::{EstimateField, EstimateInput, FieldInput, PickerSelection, UnknownField};
pub use location::resolve_location;
pub use scoring::{score_features, POINT_LIMIT};
pub use session::{Estimate, EstimateSession, EstimateStatus, EstimateSummary};
