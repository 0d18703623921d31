use super::band::{effective_year, resolve_band, RentBand, SIMPLE_LOCATION_REDUCTION};
use super::discount::compute_discount;
use super::input::{
    parse_decimal, parse_integer, parse_text, parse_year_band, EstimateField, EstimateInput,
    FieldInput, PickerSelection,
};
use super::location::resolve_location;
use super::scoring::score_features;
use crate::tables::{LocationTier, ReferenceTables, YearBand};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// The single record behind one estimate: user inputs plus the fields derived from them.
///
/// Derived fields are only ever written by [`Estimate::recompute`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Estimate {
    street: Option<String>,
    house_number: Option<u32>,
    construction_year: Option<i32>,
    fallback_year_band: Option<YearBand>,
    size: Option<f64>,
    selected_features: Vec<String>,
    location_tier: Option<LocationTier>,
    band: Option<RentBand>,
    point_total: i32,
    discount_per_sqm: Option<f64>,
}

impl Estimate {
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn house_number(&self) -> Option<u32> {
        self.house_number
    }

    pub fn construction_year(&self) -> Option<i32> {
        self.construction_year
    }

    pub fn fallback_year_band(&self) -> Option<YearBand> {
        self.fallback_year_band
    }

    pub fn size(&self) -> Option<f64> {
        self.size
    }

    /// Selected feature ids in the order they were selected.
    pub fn selected_features(&self) -> &[String] {
        &self.selected_features
    }

    pub fn effective_year(&self) -> Option<i32> {
        effective_year(self.construction_year, self.fallback_year_band)
    }

    pub fn location_tier(&self) -> Option<LocationTier> {
        self.location_tier
    }

    pub fn band(&self) -> Option<RentBand> {
        self.band
    }

    pub fn lower(&self) -> Option<f64> {
        self.band.map(|band| band.lower)
    }

    pub fn mid(&self) -> Option<f64> {
        self.band.map(|band| band.mid)
    }

    pub fn upper(&self) -> Option<f64> {
        self.band.map(|band| band.upper)
    }

    pub fn point_total(&self) -> i32 {
        self.point_total
    }

    pub fn discount_per_sqm(&self) -> Option<f64> {
        self.discount_per_sqm
    }

    /// Mid value plus discount, in €/m².
    pub fn per_sqm_total(&self) -> Option<f64> {
        Some(self.mid()? + self.discount_per_sqm?)
    }

    /// Individual monthly rent for the whole living area.
    pub fn grand_total(&self) -> Option<f64> {
        Some(self.per_sqm_total()? * self.size?)
    }

    /// Lower, mid and upper band values for the whole living area.
    pub fn band_totals(&self) -> Option<RentBand> {
        Some(self.band?.scaled(self.size?))
    }

    /// Full recompute pass in dependency order: location, band, score, discount.
    pub fn recompute(&mut self, tables: &ReferenceTables) {
        self.location_tier =
            resolve_location(&tables.streets, self.street.as_deref(), self.house_number);
        self.band = resolve_band(
            &tables.rent_classes,
            self.effective_year(),
            self.size,
            self.location_tier,
        );
        self.point_total =
            score_features(&tables.features, self.selected_features.as_slice());
        self.discount_per_sqm = compute_discount(self.point_total, self.band.as_ref());

        debug!(
            location_tier = ?self.location_tier,
            band = ?self.band,
            point_total = self.point_total,
            discount_per_sqm = ?self.discount_per_sqm,
            "estimate recomputed"
        );
    }

    pub fn status(&self) -> EstimateStatus {
        let address_given = self.street.is_some() && self.house_number.is_some();
        if address_given && self.location_tier.is_none() {
            return EstimateStatus::AddressNotFound;
        }
        if !address_given || self.size.is_none() || self.effective_year().is_none() {
            return EstimateStatus::Incomplete;
        }
        match self.summary() {
            Some(summary) => EstimateStatus::Ready(summary),
            None => EstimateStatus::NoMatchingBracket,
        }
    }

    /// Result block; present only when the address resolved and a bracket matched.
    pub fn summary(&self) -> Option<EstimateSummary> {
        let location_tier = self.location_tier?;
        let size = self.size?;
        let per_sqm = self.band?;
        let discount_per_sqm = self.discount_per_sqm?;
        let per_sqm_total = per_sqm.mid + discount_per_sqm;

        Some(EstimateSummary {
            location_tier,
            size,
            per_sqm,
            totals: per_sqm.scaled(size),
            point_total: self.point_total,
            discount_per_sqm,
            per_sqm_total,
            grand_total: per_sqm_total * size,
            location_reduction: (location_tier == LocationTier::Simple)
                .then_some(SIMPLE_LOCATION_REDUCTION),
        })
    }
}

/// Outcome shown in place of the result block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EstimateStatus {
    /// Address, size or construction year still missing.
    Incomplete,
    AddressNotFound,
    /// Year or size at or below every rent class threshold.
    NoMatchingBracket,
    Ready(EstimateSummary),
}

impl EstimateStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Display values of a resolved estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateSummary {
    pub location_tier: LocationTier,
    pub size: f64,
    pub per_sqm: RentBand,
    pub totals: RentBand,
    pub point_total: i32,
    pub discount_per_sqm: f64,
    pub per_sqm_total: f64,
    pub grand_total: f64,
    /// Set when the band was reduced because of a simple location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_reduction: Option<f64>,
}

/// One user's estimate bound to the shared reference tables.
///
/// Every mutating call runs a complete recompute before returning, so readers
/// never observe a partially updated record.
#[derive(Debug, Clone)]
pub struct EstimateSession {
    tables: Arc<ReferenceTables>,
    estimate: Estimate,
}

impl EstimateSession {
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        let mut session = Self {
            tables,
            estimate: Estimate::default(),
        };
        session.recompute();
        session
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    pub fn status(&self) -> EstimateStatus {
        self.estimate.status()
    }

    pub fn set_street(&mut self, street: Option<String>) {
        self.estimate.street = street.and_then(|value| parse_text(&value));
        self.recompute();
    }

    pub fn set_house_number(&mut self, house_number: Option<u32>) {
        self.estimate.house_number = house_number;
        self.recompute();
    }

    pub fn set_construction_year(&mut self, year: Option<i32>) {
        self.estimate.construction_year = year;
        self.recompute();
    }

    pub fn set_fallback_year_band(&mut self, band: Option<YearBand>) {
        self.estimate.fallback_year_band = band;
        self.recompute();
    }

    pub fn set_size(&mut self, size: Option<f64>) {
        self.estimate.size = size;
        self.recompute();
    }

    /// Selecting appends in selection order; deselecting removes. Repeats are no-ops.
    pub fn toggle_feature(&mut self, feature_id: &str, selected: bool) {
        let features = &mut self.estimate.selected_features;
        let position = features.iter().position(|id| id == feature_id);
        match (selected, position) {
            (true, None) => features.push(feature_id.to_string()),
            (false, Some(index)) => {
                features.remove(index);
            }
            _ => return,
        }
        self.recompute();
    }

    pub fn reset_features(&mut self) {
        self.estimate.selected_features.clear();
        self.recompute();
    }

    pub fn apply_field(&mut self, input: FieldInput) {
        self.apply(EstimateInput::Field(input));
    }

    pub fn apply_picker(&mut self, selection: PickerSelection) {
        self.apply(EstimateInput::Picker(selection));
    }

    /// Assigns a raw value to its field; empty or unparsable text clears the field.
    pub fn apply(&mut self, input: impl Into<EstimateInput>) {
        let input = input.into();
        let raw = input.raw_value();
        let estimate = &mut self.estimate;
        match input.field() {
            EstimateField::Street => estimate.street = parse_text(raw),
            EstimateField::HouseNumber => estimate.house_number = parse_integer(raw),
            EstimateField::ConstructionYear => estimate.construction_year = parse_integer(raw),
            EstimateField::FallbackYearBand => estimate.fallback_year_band = parse_year_band(raw),
            EstimateField::Size => estimate.size = parse_decimal(raw),
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.estimate.recompute(&self.tables);
    }
}
