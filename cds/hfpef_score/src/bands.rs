// Threshold tables shared by the scorers.
// Bands are listed from the most to the least severe; the first match wins.

/// Points of the first band whose floor `value` strictly exceeds.
pub(crate) fn points_above(value: f64, bands: &[(f64, f64)]) -> f64 {
    bands
        .iter()
        .find(|(floor, _)| value > *floor)
        .map_or(0.0, |(_, points)| *points)
}

/// Points of the first band whose ceiling `value` is strictly below.
pub(crate) fn points_below(value: f64, bands: &[(f64, f64)]) -> f64 {
    bands
        .iter()
        .find(|(ceiling, _)| value < *ceiling)
        .map_or(0.0, |(_, points)| *points)
}
