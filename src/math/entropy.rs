/// Weight contribution `w * ln(w)` of a pattern, zero for non-positive weights
pub fn weight_log_weight(weight: f64) -> f64 {
    if weight > 0.0 {
        weight * weight.ln()
    } else {
        0.0
    }
}

/// Weighted Shannon entropy from cached sums over a possibility set
///
/// Computes `ln(Σw) - Σ(w·ln w) / Σw`. A set with a single pattern has
/// entropy 0 and an empty set (or a zero total) is also reported as 0, since
/// neither has a choice left to make.
pub fn weighted_entropy(sum_weight: f64, sum_weight_log_weight: f64) -> f64 {
    if sum_weight <= 0.0 {
        return 0.0;
    }
    let entropy = sum_weight.ln() - sum_weight_log_weight / sum_weight;
    // Rounding can leave a singleton a hair below zero
    entropy.max(0.0)
}
