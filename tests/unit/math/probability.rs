//! Tests for mapping uniform samples onto weighted indices

#[cfg(test)]
mod tests {
    use wavetile::math::probability::weighted_index;

    // Tests each bucket covers a share proportional to its weight
    // Verified by comparing against the bucket start instead of its end
    #[test]
    fn test_weighted_index_buckets() {
        let weights = [1.0, 3.0];
        assert_eq!(weighted_index(&weights, 0.0), 0);
        assert_eq!(weighted_index(&weights, 0.2), 0);
        assert_eq!(weighted_index(&weights, 0.3), 1);
        assert_eq!(weighted_index(&weights, 0.99), 1);
    }

    // Tests zero weights are never picked
    // Verified by removing the zero-weight skip
    #[test]
    fn test_zero_weights_skipped() {
        let weights = [0.0, 2.0, 0.0];
        for sample in [0.0, 0.5, 0.999] {
            assert_eq!(weighted_index(&weights, sample), 1);
        }
    }

    // Tests samples at or past one fall into the last positive bucket
    // Verified by returning the final index unconditionally
    #[test]
    fn test_overflow_falls_back() {
        assert_eq!(weighted_index(&[1.0, 1.0, 0.0], 1.0), 1);
        assert_eq!(weighted_index(&[0.0, 0.0], 0.5), 0);
        assert_eq!(weighted_index(&[], 0.5), 0);
    }
}
