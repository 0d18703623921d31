//! Static reference tables for the published rent index year.

pub mod domain;
mod loader;

pub use domain::{
    FeatureCategory, FeatureEntry, LocationTier, RentClassEntry, StreetEntry, UnknownYearBand,
    YearBand,
};
pub use loader::{TableLoadError, FEATURES_FILE, RENT_CLASSES_FILE, STREETS_FILE};

use std::collections::BTreeSet;

/// Feature catalog split into the two published groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureCatalog {
    pub reducing: Vec<FeatureEntry>,
    pub increasing: Vec<FeatureEntry>,
}

impl FeatureCatalog {
    /// Reducing entries first, then increasing ones.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureEntry> {
        self.reducing.iter().chain(self.increasing.iter())
    }

    pub fn find(&self, id: &str) -> Option<&FeatureEntry> {
        self.iter().find(|feature| feature.id == id)
    }

    pub fn group(&self, category: FeatureCategory) -> &[FeatureEntry] {
        match category {
            FeatureCategory::Reducing => &self.reducing,
            FeatureCategory::Increasing => &self.increasing,
        }
    }

    pub fn len(&self) -> usize {
        self.reducing.len() + self.increasing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The three immutable tables shared by every estimate session.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub streets: Vec<StreetEntry>,
    /// Ascending by year threshold, then size threshold. Resolution depends on this order.
    pub rent_classes: Vec<RentClassEntry>,
    pub features: FeatureCatalog,
}

impl ReferenceTables {
    pub fn new(
        streets: Vec<StreetEntry>,
        rent_classes: Vec<RentClassEntry>,
        features: FeatureCatalog,
    ) -> Self {
        Self {
            streets,
            rent_classes,
            features,
        }
    }

    /// Unique street names in sorted order, as offered by the address picker.
    pub fn street_names(&self) -> Vec<&str> {
        self.streets
            .iter()
            .map(|entry| entry.street.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// House numbers listed for a street, in table order.
    pub fn house_numbers(&self, street: &str) -> Vec<u32> {
        self.streets
            .iter()
            .filter(|entry| entry.street == street)
            .map(|entry| entry.house_number)
            .collect()
    }
}
