use crate::tables::{LocationTier, RentClassEntry, YearBand};
use serde::{Deserialize, Serialize};

/// Per-m² reduction applied to every band value in a simple location.
pub const SIMPLE_LOCATION_REDUCTION: f64 = 0.195;

/// Resolved rent span in €/m².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentBand {
    pub lower: f64,
    pub mid: f64,
    pub upper: f64,
}

impl RentBand {
    fn from_class(class: &RentClassEntry) -> Self {
        Self {
            lower: class.lower,
            mid: class.mid,
            upper: class.upper,
        }
    }

    fn reduced_by(self, amount: f64) -> Self {
        Self {
            lower: self.lower - amount,
            mid: self.mid - amount,
            upper: self.upper - amount,
        }
    }

    /// Band values multiplied by the living area.
    pub fn scaled(self, size: f64) -> Self {
        Self {
            lower: self.lower * size,
            mid: self.mid * size,
            upper: self.upper * size,
        }
    }
}

/// Exact year when given, otherwise the fallback band's representative year.
pub fn effective_year(construction_year: Option<i32>, fallback: Option<YearBand>) -> Option<i32> {
    construction_year.or_else(|| fallback.map(YearBand::representative_year))
}

/// Last rent class (in table order) whose year and size thresholds both lie strictly
/// below the input, reduced for simple locations.
///
/// The scan is linear over the table as given: an unsorted table silently changes
/// which class wins. Inputs at or below every threshold resolve to `None`.
pub fn resolve_band(
    classes: &[RentClassEntry],
    year: Option<i32>,
    size: Option<f64>,
    tier: Option<LocationTier>,
) -> Option<RentBand> {
    let (year, size) = (year?, size?);
    let class = classes
        .iter()
        .rev()
        .find(|class| class.year_threshold < year && class.size_threshold < size)?;

    let band = RentBand::from_class(class);
    match tier {
        Some(LocationTier::Simple) => Some(band.reduced_by(SIMPLE_LOCATION_REDUCTION)),
        _ => Some(band),
    }
}
