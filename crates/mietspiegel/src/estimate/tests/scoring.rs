use super::common::*;
use crate::estimate::score_features;
use crate::tables::{FeatureCatalog, FeatureCategory, FeatureEntry};

#[test]
fn sums_points_across_both_groups() {
    let catalog = catalog();

    assert_eq!(score_features(&catalog, &["aufzug", "einbaukueche"]), 20);
    assert_eq!(score_features(&catalog, &["aufzug", "kein-bad"]), -20);
    assert_eq!(score_features::<&str>(&catalog, &[]), 0);
}

#[test]
fn unknown_ids_contribute_nothing() {
    let catalog = catalog();

    assert_eq!(score_features(&catalog, &["aufzug", "schwimmbad"]), 10);
}

#[test]
fn stops_accumulating_once_the_limit_is_reached() {
    let catalog = catalog();

    // 60 -> 110 is accepted because 60 was inside the limit; 110 blocks the rest.
    assert_eq!(
        score_features(&catalog, &["modernisiert", "penthouse", "aufzug"]),
        110
    );
    assert_eq!(
        score_features(&catalog, &["feuchtigkeit", "kein-bad", "einzelofen", "laerm"]),
        -100
    );
}

#[test]
fn result_depends_on_selection_order() {
    let catalog = catalog();

    let with_reduction_last = score_features(&catalog, &["modernisiert", "penthouse", "kein-bad"]);
    let with_reduction_first = score_features(&catalog, &["kein-bad", "modernisiert", "penthouse"]);

    assert_eq!(with_reduction_last, 110);
    assert_eq!(with_reduction_first, 80);
}

#[test]
fn oversized_table_points_saturate_instead_of_overflowing() {
    let catalog = FeatureCatalog {
        reducing: Vec::new(),
        increasing: vec![
            FeatureEntry {
                id: "fast-voll".to_string(),
                label: "fast voll".to_string(),
                points: 99,
                category: FeatureCategory::Increasing,
            },
            FeatureEntry {
                id: "riesig".to_string(),
                label: "riesig".to_string(),
                points: i32::MAX,
                category: FeatureCategory::Increasing,
            },
        ],
    };

    assert_eq!(score_features(&catalog, &["fast-voll", "riesig"]), i32::MAX);
}
