use std::sync::Arc;

use crate::estimate::EstimateSession;
use crate::tables::{
    FeatureCatalog, FeatureCategory, FeatureEntry, LocationTier, ReferenceTables, RentClassEntry,
    StreetEntry,
};

pub(super) fn street(name: &str, house_number: u32, tier: LocationTier) -> StreetEntry {
    StreetEntry {
        street: name.to_string(),
        house_number,
        location_tier: tier,
    }
}

pub(super) fn class(year: i32, size: f64, lower: f64, mid: f64, upper: f64) -> RentClassEntry {
    RentClassEntry {
        year_threshold: year,
        size_threshold: size,
        lower,
        mid,
        upper,
    }
}

fn feature(id: &str, points: i32, category: FeatureCategory) -> FeatureEntry {
    FeatureEntry {
        id: id.to_string(),
        label: id.replace('-', " "),
        points,
        category,
    }
}

pub(super) fn streets() -> Vec<StreetEntry> {
    vec![
        street("Altstadt", 1, LocationTier::Good),
        street("Marienstraße", 38, LocationTier::Simple),
        street("Ludwigstraße", 61, LocationTier::Average),
        street("Ludwigstraße", 61, LocationTier::Good),
    ]
}

/// Sorted by year threshold, then size threshold.
pub(super) fn rent_classes() -> Vec<RentClassEntry> {
    vec![
        class(1900, 0.0, 4.90, 5.85, 7.20),
        class(1977, 0.0, 5.45, 6.40, 7.80),
        class(1977, 40.0, 5.00, 6.00, 7.50),
        class(1977, 60.0, 4.80, 5.80, 7.10),
        class(1999, 40.0, 6.00, 6.90, 8.20),
    ]
}

pub(super) fn catalog() -> FeatureCatalog {
    FeatureCatalog {
        reducing: vec![
            feature("feuchtigkeit", -50, FeatureCategory::Reducing),
            feature("kein-bad", -30, FeatureCategory::Reducing),
            feature("einzelofen", -20, FeatureCategory::Reducing),
            feature("laerm", -10, FeatureCategory::Reducing),
        ],
        increasing: vec![
            feature("aufzug", 10, FeatureCategory::Increasing),
            feature("einbaukueche", 10, FeatureCategory::Increasing),
            feature("penthouse", 50, FeatureCategory::Increasing),
            feature("modernisiert", 60, FeatureCategory::Increasing),
        ],
    }
}

pub(super) fn tables() -> ReferenceTables {
    ReferenceTables::new(streets(), rent_classes(), catalog())
}

pub(super) fn session() -> EstimateSession {
    EstimateSession::new(Arc::new(tables()))
}

/// Session at Ludwigstraße 61 (average), built 1990, 60 m².
pub(super) fn average_session() -> EstimateSession {
    let mut session = session();
    session.set_street(Some("Ludwigstraße".to_string()));
    session.set_house_number(Some(61));
    session.set_construction_year(Some(1990));
    session.set_size(Some(60.0));
    session
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
