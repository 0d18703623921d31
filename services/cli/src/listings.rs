use mietspiegel::error::AppError;
use mietspiegel::tables::{FeatureCategory, ReferenceTables, YearBand};

pub(crate) fn print_streets(tables: &ReferenceTables) -> Result<(), AppError> {
    for name in tables.street_names() {
        let numbers = tables
            .house_numbers(name)
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{name} ({numbers})");
    }
    Ok(())
}

pub(crate) fn print_features(tables: &ReferenceTables) -> Result<(), AppError> {
    for category in [FeatureCategory::Reducing, FeatureCategory::Increasing] {
        println!("{}", category.label());
        for feature in tables.features.group(category) {
            println!("- {:<20} {:>4}  {}", feature.id, feature.points, feature.label);
        }
    }
    Ok(())
}

pub(crate) fn print_year_bands() -> Result<(), AppError> {
    for band in YearBand::ordered() {
        println!("{:<10} -> {}", band.label(), band.representative_year());
    }
    Ok(())
}
