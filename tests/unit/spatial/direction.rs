//! Tests for neighbour directions

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use wavetile::spatial::direction::Direction;

    // Tests opposite directions undo each other's offsets
    // Verified by mapping Up to Left in opposite
    #[test]
    fn test_opposite_offsets_cancel() {
        for direction in Direction::ALL {
            let [a_row, a_col] = direction.offset();
            let [b_row, b_col] = direction.opposite().offset();
            assert_eq!((a_row + b_row, a_col + b_col), (0, 0));
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    // Tests the table indices are dense and distinct
    // Verified by giving two directions the same index
    #[test]
    fn test_indices_dense() {
        let indices: HashSet<usize> = Direction::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(indices, (0..4).collect());
    }

    // Tests offsets are unit steps along one axis
    // Verified by giving Down a diagonal offset
    #[test]
    fn test_offsets_are_unit_steps() {
        assert_eq!(Direction::Up.offset(), [-1, 0]);
        assert_eq!(Direction::Right.offset(), [0, 1]);
        for direction in Direction::ALL {
            let [row, col] = direction.offset();
            assert_eq!(row.abs() + col.abs(), 1);
        }
    }
}
