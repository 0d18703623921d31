use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Location classification ("Lage") of a street segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationTier {
    #[serde(rename = "einfach", alias = "simple")]
    Simple,
    #[serde(rename = "mittel", alias = "average")]
    Average,
    #[serde(rename = "gut", alias = "good")]
    Good,
}

impl LocationTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "einfach",
            Self::Average => "mittel",
            Self::Good => "gut",
        }
    }
}

impl fmt::Display for LocationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One known address and its location tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetEntry {
    #[serde(rename = "strasse", alias = "street")]
    pub street: String,
    #[serde(rename = "hausnummer", alias = "house_number")]
    pub house_number: u32,
    #[serde(rename = "lage", alias = "location_tier")]
    pub location_tier: LocationTier,
}

/// Rent bracket reached once both thresholds are exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentClassEntry {
    #[serde(rename = "jahr", alias = "year_threshold")]
    pub year_threshold: i32,
    #[serde(rename = "groesse", alias = "size_threshold")]
    pub size_threshold: f64,
    #[serde(rename = "unter", alias = "lower")]
    pub lower: f64,
    #[serde(rename = "mittel", alias = "mid")]
    pub mid: f64,
    #[serde(rename = "ober", alias = "upper")]
    pub upper: f64,
}

impl RentClassEntry {
    pub fn is_ordered(&self) -> bool {
        self.lower <= self.mid && self.mid <= self.upper
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    /// Wohnwertmindernd.
    Reducing,
    /// Wohnwerterhöhend.
    Increasing,
}

impl FeatureCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reducing => "Wohnwertmindernd",
            Self::Increasing => "Wohnwerterhöhend",
        }
    }
}

/// A qualitative property feature ("Merkmal") and its point value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    pub id: String,
    pub label: String,
    pub points: i32,
    pub category: FeatureCategory,
}

/// Coarse construction-period choice used when no exact year is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearBand {
    Pre1949,
    From1950To1960,
    From1961To1977,
    From1978To1999,
    From2000,
}

impl YearBand {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Pre1949,
            Self::From1950To1960,
            Self::From1961To1977,
            Self::From1978To1999,
            Self::From2000,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pre1949 => "bis 1949",
            Self::From1950To1960 => "1950-1960",
            Self::From1961To1977 => "1961-1977",
            Self::From1978To1999 => "1978-1999",
            Self::From2000 => "ab 2000",
        }
    }

    /// Year compared against the rent class thresholds in place of an exact year.
    pub const fn representative_year(self) -> i32 {
        match self {
            Self::Pre1949 => 1901,
            Self::From1950To1960 => 1960,
            Self::From1961To1977 => 1977,
            Self::From1978To1999 => 1999,
            Self::From2000 => 2000,
        }
    }

    pub fn from_representative_year(year: i32) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|band| band.representative_year() == year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown year band '{0}' (expected one of: bis-1949, 1950-1960, 1961-1977, 1978-1999, ab-2000)"
)]
pub struct UnknownYearBand(pub String);

impl FromStr for YearBand {
    type Err = UnknownYearBand;

    /// Accepts the display label, a slug of it, or the representative year.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw
            .trim()
            .to_lowercase()
            .replace(|c: char| c == ' ' || c == '_', "-");
        let band = match normalized.as_str() {
            "bis-1949" | "pre-1949" | "pre1949" => Some(Self::Pre1949),
            "1950-1960" => Some(Self::From1950To1960),
            "1961-1977" => Some(Self::From1961To1977),
            "1978-1999" => Some(Self::From1978To1999),
            "ab-2000" | "from-2000" | "2000+" => Some(Self::From2000),
            other => other
                .parse::<i32>()
                .ok()
                .and_then(Self::from_representative_year),
        };
        band.ok_or_else(|| UnknownYearBand(raw.to_string()))
    }
}

impl fmt::Display for YearBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
