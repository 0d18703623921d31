use super::band::RentBand;

/// Per-m² adjustment ("Rabatt") derived from the feature score.
///
/// Positive scores move towards the upper bound, negative ones towards the lower
/// bound, proportional to the score in percent. A zero score yields zero even
/// without a band; any other score needs a resolved band.
pub fn compute_discount(point_total: i32, band: Option<&RentBand>) -> Option<f64> {
    if point_total == 0 {
        return Some(0.0);
    }
    let band = band?;
    let share = f64::from(point_total) / 100.0;
    if point_total > 0 {
        Some((band.upper - band.mid) * share)
    } else {
        Some((band.mid - band.lower) * share)
    }
}
