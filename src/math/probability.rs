/// Map a uniform sample in `[0, 1)` onto an index of `weights`
///
/// Walks the cumulative distribution so each index is chosen with
/// probability proportional to its weight. Zero-weight entries are never
/// chosen unless every weight is zero, in which case index 0 is returned.
pub fn weighted_index(weights: &[f64], unit_sample: f64) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0;
    }

    let mut remaining = unit_sample * total;
    let mut last_positive = 0;
    for (i, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        last_positive = i;
        if remaining < weight {
            return i;
        }
        remaining -= weight;
    }
    // Floating-point drift can run past the final bucket
    last_positive
}
