use super::domain::{FeatureCategory, FeatureEntry, RentClassEntry, StreetEntry};
use super::{FeatureCatalog, ReferenceTables};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const STREETS_FILE: &str = "strassen.json";
pub const RENT_CLASSES_FILE: &str = "klassen.json";
pub const FEATURES_FILE: &str = "merkmale.json";

/// Startup failures while reading the reference tables.
#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed table {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "rent class #{index} in {} is not ordered (lower {lower} / mid {mid} / upper {upper})",
        .path.display()
    )]
    InvalidRentClass {
        path: PathBuf,
        index: usize,
        lower: f64,
        mid: f64,
        upper: f64,
    },
}

#[derive(Debug, Deserialize)]
struct RawFeatureGroups {
    #[serde(rename = "mindernd", alias = "reducing", default)]
    reducing: Vec<RawFeature>,
    #[serde(rename = "erhoehend", alias = "increasing", default)]
    increasing: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(rename = "value", alias = "id")]
    id: String,
    #[serde(rename = "merkmal", alias = "label")]
    label: String,
    #[serde(rename = "punkte", alias = "points")]
    points: i32,
}

impl RawFeature {
    fn into_entry(self, category: FeatureCategory) -> FeatureEntry {
        FeatureEntry {
            id: self.id,
            label: self.label,
            points: self.points,
            category,
        }
    }
}

impl ReferenceTables {
    /// Reads `strassen.json`, `klassen.json` and `merkmale.json` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, TableLoadError> {
        let dir = dir.as_ref();
        let streets_path = dir.join(STREETS_FILE);
        let classes_path = dir.join(RENT_CLASSES_FILE);
        let features_path = dir.join(FEATURES_FILE);

        let streets = read_file(&streets_path)?;
        let classes = read_file(&classes_path)?;
        let features = read_file(&features_path)?;

        let tables = Self::from_sources(
            (streets_path.as_path(), streets.as_str()),
            (classes_path.as_path(), classes.as_str()),
            (features_path.as_path(), features.as_str()),
        )?;
        info!(
            dir = %dir.display(),
            streets = tables.streets.len(),
            rent_classes = tables.rent_classes.len(),
            features = tables.features.len(),
            "reference tables loaded"
        );
        Ok(tables)
    }

    /// Parses the three tables from in-memory JSON documents.
    pub fn from_json(
        streets: &str,
        rent_classes: &str,
        features: &str,
    ) -> Result<Self, TableLoadError> {
        Self::from_sources(
            (Path::new(STREETS_FILE), streets),
            (Path::new(RENT_CLASSES_FILE), rent_classes),
            (Path::new(FEATURES_FILE), features),
        )
    }

    fn from_sources(
        streets: (&Path, &str),
        rent_classes: (&Path, &str),
        features: (&Path, &str),
    ) -> Result<Self, TableLoadError> {
        let street_entries: Vec<StreetEntry> = parse(streets.0, streets.1)?;
        let class_entries: Vec<RentClassEntry> = parse(rent_classes.0, rent_classes.1)?;
        let groups: RawFeatureGroups = parse(features.0, features.1)?;

        for (index, class) in class_entries.iter().enumerate() {
            if !class.is_ordered() {
                return Err(TableLoadError::InvalidRentClass {
                    path: rent_classes.0.to_path_buf(),
                    index,
                    lower: class.lower,
                    mid: class.mid,
                    upper: class.upper,
                });
            }
        }

        let catalog = FeatureCatalog {
            reducing: groups
                .reducing
                .into_iter()
                .map(|raw| raw.into_entry(FeatureCategory::Reducing))
                .collect(),
            increasing: groups
                .increasing
                .into_iter()
                .map(|raw| raw.into_entry(FeatureCategory::Increasing))
                .collect(),
        };

        let tables = ReferenceTables::new(street_entries, class_entries, catalog);
        report_data_quality(&tables);
        Ok(tables)
    }
}

fn read_file(path: &Path) -> Result<String, TableLoadError> {
    std::fs::read_to_string(path).map_err(|source| TableLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T, TableLoadError> {
    serde_json::from_str(raw).map_err(|source| TableLoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

// First match wins at resolution time, so duplicates are reported rather than rejected.
fn report_data_quality(tables: &ReferenceTables) {
    let mut addresses = HashSet::new();
    for entry in &tables.streets {
        if !addresses.insert((entry.street.as_str(), entry.house_number)) {
            warn!(
                street = %entry.street,
                house_number = entry.house_number,
                "duplicate address in street table"
            );
        }
    }

    let mut feature_ids = HashSet::new();
    for feature in tables.features.iter() {
        if !feature_ids.insert(feature.id.as_str()) {
            warn!(feature = %feature.id, "duplicate feature id in catalog");
        }
    }

    let sorted = tables.rent_classes.windows(2).all(|pair| {
        (pair[0].year_threshold, pair[0].size_threshold)
            <= (pair[1].year_threshold, pair[1].size_threshold)
    });
    if !sorted {
        warn!("rent classes are not sorted by year and size threshold");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::LocationTier;

    const STREETS: &str = r#"[
        {"strasse": "Altstadt", "hausnummer": 1, "lage": "gut"},
        {"street": "Marienstraße", "house_number": 38, "location_tier": "simple"}
    ]"#;
    const CLASSES: &str = r#"[
        {"jahr": 1977, "groesse": 40, "unter": 5.0, "mittel": 6.0, "ober": 7.5}
    ]"#;
    const FEATURES: &str = r#"{
        "mindernd": [{"value": "kein-bad", "merkmal": "Kein Bad", "punkte": -30}],
        "erhoehend": [{"value": "aufzug", "merkmal": "Aufzug", "punkte": 10}]
    }"#;

    #[test]
    fn parses_published_and_english_field_names() {
        let tables = ReferenceTables::from_json(STREETS, CLASSES, FEATURES).expect("tables parse");

        assert_eq!(tables.streets.len(), 2);
        assert_eq!(tables.streets[0].location_tier, LocationTier::Good);
        assert_eq!(tables.streets[1].location_tier, LocationTier::Simple);
        assert_eq!(tables.rent_classes[0].mid, 6.0);

        let reducing = tables.features.find("kein-bad").expect("reducing feature present");
        assert_eq!(reducing.category, FeatureCategory::Reducing);
        assert_eq!(reducing.points, -30);
        let increasing = tables.features.find("aufzug").expect("increasing feature present");
        assert_eq!(increasing.category, FeatureCategory::Increasing);
    }

    #[test]
    fn rejects_unordered_rent_class() {
        let classes = r#"[
            {"jahr": 1900, "groesse": 0, "unter": 5.0, "mittel": 6.0, "ober": 7.0},
            {"jahr": 1949, "groesse": 0, "unter": 6.5, "mittel": 6.0, "ober": 7.0}
        ]"#;

        let err = ReferenceTables::from_json(STREETS, classes, FEATURES).expect_err("must fail");

        match err {
            TableLoadError::InvalidRentClass { index, .. } => assert_eq!(index, 1),
            other => panic!("expected invalid rent class, got {other:?}"),
        }
    }

    #[test]
    fn reports_malformed_json_with_file_name() {
        let err = ReferenceTables::from_json("{not json", CLASSES, FEATURES).expect_err("must fail");

        assert!(matches!(err, TableLoadError::Json { .. }));
        assert!(err.to_string().contains(STREETS_FILE));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = ReferenceTables::load_dir("/nonexistent/mietspiegel-data").expect_err("must fail");

        assert!(matches!(err, TableLoadError::Io { .. }));
    }
}
