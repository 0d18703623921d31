use crate::tables::YearBand;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-editable fields of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateField {
    Street,
    HouseNumber,
    ConstructionYear,
    FallbackYearBand,
    Size,
}

impl EstimateField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Street => "street",
            Self::HouseNumber => "house_number",
            Self::ConstructionYear => "construction_year",
            Self::FallbackYearBand => "fallback_year_band",
            Self::Size => "size",
        }
    }
}

impl fmt::Display for EstimateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown estimate field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for EstimateField {
    type Err = UnknownField;

    /// Understands the form field names of the published page as well as the English ones.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().replace('-', "_").as_str() {
            "strasse" | "straße" | "street" => Ok(Self::Street),
            "hausnummer" | "house_number" | "house" => Ok(Self::HouseNumber),
            "baujahr" | "construction_year" | "year" => Ok(Self::ConstructionYear),
            "alternativ" | "fallback_year_band" | "year_band" => Ok(Self::FallbackYearBand),
            "groesse" | "größe" | "size" => Ok(Self::Size),
            _ => Err(UnknownField(raw.to_string())),
        }
    }
}

/// Plain form edit: the field name and its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInput {
    pub field: EstimateField,
    pub value: String,
}

impl FieldInput {
    pub fn new(field: EstimateField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Selection reported by a picker widget as a label/value/field triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSelection {
    pub label: String,
    pub value: String,
    #[serde(rename = "type", alias = "field")]
    pub field: EstimateField,
}

/// Either shape of input event, routed through the same field assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimateInput {
    Field(FieldInput),
    Picker(PickerSelection),
}

impl EstimateInput {
    pub fn field(&self) -> EstimateField {
        match self {
            Self::Field(input) => input.field,
            Self::Picker(selection) => selection.field,
        }
    }

    pub fn raw_value(&self) -> &str {
        match self {
            Self::Field(input) => &input.value,
            Self::Picker(selection) => &selection.value,
        }
    }
}

impl From<FieldInput> for EstimateInput {
    fn from(value: FieldInput) -> Self {
        Self::Field(value)
    }
}

impl From<PickerSelection> for EstimateInput {
    fn from(value: PickerSelection) -> Self {
        Self::Picker(value)
    }
}

/// Empty text clears a field, as does numeric text that does not parse.
pub(crate) fn parse_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn parse_integer<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

/// Accepts both decimal separators.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub(crate) fn parse_year_band(raw: &str) -> Option<YearBand> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
