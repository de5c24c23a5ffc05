//! Tests for adjacency rule construction between overlapping patterns

#[cfg(test)]
mod tests {
    use wavetile::algorithm::bitset::PatternBitset;
    use wavetile::algorithm::compatibility::{CompatibilityTable, overlaps_agree};
    use wavetile::spatial::direction::Direction;
    use wavetile::spatial::tiles::PatternCatalog;

    fn palette(colours: usize) -> Vec<[u8; 4]> {
        (0..colours).map(|i| [i as u8 * 40, 0, 0, 255]).collect()
    }

    // Vertical stripes: 0 1 | 1 2 | 2 0, each repeated down the rows
    fn stripe_catalog() -> PatternCatalog {
        PatternCatalog::from_blocks(
            vec![
                (vec![0, 1, 0, 1], 1),
                (vec![1, 2, 1, 2], 1),
                (vec![2, 0, 2, 0], 1),
            ],
            2,
            palette(3),
        )
        .expect("valid blocks")
    }

    // Tests overlapping columns must agree for a right neighbour
    // Verified by comparing against the wrong column of the neighbour
    #[test]
    fn test_overlaps_agree_horizontal() {
        let catalog = stripe_catalog();
        let patterns = catalog.patterns();
        assert!(overlaps_agree(&patterns[0], &patterns[1], Direction::Right));
        assert!(!overlaps_agree(&patterns[0], &patterns[2], Direction::Right));
        assert!(overlaps_agree(&patterns[0], &patterns[2], Direction::Left));
    }

    // Tests vertical stripes only stack on themselves
    // Verified by skipping the row offset in the overlap comparison
    #[test]
    fn test_overlaps_agree_vertical() {
        let catalog = stripe_catalog();
        let patterns = catalog.patterns();
        assert!(overlaps_agree(&patterns[1], &patterns[1], Direction::Down));
        assert!(!overlaps_agree(&patterns[1], &patterns[2], Direction::Down));
    }

    // Tests the table answers membership for every direction
    // Verified by filling only the forward direction during build
    #[test]
    fn test_build_fills_opposite_directions() {
        let catalog = stripe_catalog();
        let table = CompatibilityTable::build(catalog.patterns());

        assert_eq!(table.pattern_count(), 3);
        assert!(table.is_compatible(0, Direction::Right, 1));
        assert!(table.is_compatible(1, Direction::Left, 0));
        assert!(table.is_compatible(2, Direction::Up, 2));
        assert!(!table.is_compatible(0, Direction::Right, 0));
        assert!(!table.is_compatible(7, Direction::Right, 0));
    }

    // Tests a in b's set for d exactly when b in a's set for the opposite of d
    // Verified by inserting only the forward rule
    #[test]
    fn test_table_is_symmetric() {
        let catalog = stripe_catalog();
        let table = CompatibilityTable::build(catalog.patterns());

        for a in 0..3 {
            for b in 0..3 {
                for direction in Direction::ALL {
                    assert_eq!(
                        table.is_compatible(a, direction, b),
                        table.is_compatible(b, direction.opposite(), a),
                        "pair ({a}, {b}) in {direction:?}"
                    );
                }
            }
        }
    }

    // Tests allowed neighbours are the union over every possible pattern
    // Verified by intersecting instead of uniting the per-pattern sets
    #[test]
    fn test_allowed_neighbors_union() {
        let catalog = stripe_catalog();
        let table = CompatibilityTable::build(catalog.patterns());

        let mut possible = PatternBitset::new(3);
        possible.insert(0);
        possible.insert(1);
        let allowed = table.allowed_neighbors(&possible, Direction::Right);
        assert_eq!(allowed.to_vec(), vec![1, 2]);

        let none = table.allowed_neighbors(&PatternBitset::new(3), Direction::Right);
        assert!(none.is_empty());
    }
}
