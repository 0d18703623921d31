use crate::tables::FeatureCatalog;
use tracing::debug;

/// Running totals at or beyond this magnitude stop further accumulation.
pub const POINT_LIMIT: i32 = 100;

/// Sums feature points in selection order.
///
/// Each term is only added while the running total is strictly inside
/// (-100, 100); terms that would already have been added stay, so the result
/// can overshoot the limit by the last accepted term (saturating at the `i32`
/// bounds). Unknown ids count as zero.
pub fn score_features<S: AsRef<str>>(catalog: &FeatureCatalog, selected: &[S]) -> i32 {
    let mut total = 0;
    for id in selected {
        let id = id.as_ref();
        let points = match catalog.find(id) {
            Some(feature) => feature.points,
            None => {
                debug!(feature = id, "unknown feature id ignored");
                0
            }
        };

        if total > -POINT_LIMIT && total < POINT_LIMIT {
            total = total.saturating_add(points);
        }
    }
    total
}
