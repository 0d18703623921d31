use crate::tables::{LocationTier, StreetEntry};

/// First table entry matching both street and house number exactly.
///
/// `None` covers both missing input and an unknown address; neither is an error.
pub fn resolve_location(
    streets: &[StreetEntry],
    street: Option<&str>,
    house_number: Option<u32>,
) -> Option<LocationTier> {
    let (street, house_number) = (street?, house_number?);
    streets
        .iter()
        .find(|entry| entry.street == street && entry.house_number == house_number)
        .map(|entry| entry.location_tier)
}
