use crate::{
    algorithm::bitset::PatternBitset, spatial::direction::Direction, spatial::tiles::Pattern,
};

/// Adjacency rules between every pair of patterns
///
/// Dense `P×4` table of bitsets: entry `(a, d)` holds every pattern that may
/// sit one cell away from `a` in direction `d`. Built once per catalog and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompatibilityTable {
    pattern_count: usize,
    rules: Vec<PatternBitset>,
}

impl CompatibilityTable {
    /// Build the table by comparing the overlapping pixels of every pair
    ///
    /// Only `Down` and `Right` are compared directly; the opposite directions
    /// are filled from the same comparison, which keeps the table symmetric.
    pub fn build(patterns: &[Pattern]) -> Self {
        let pattern_count = patterns.len();
        let mut rules =
            vec![PatternBitset::new(pattern_count); pattern_count * Direction::ALL.len()];

        for (a, pattern_a) in patterns.iter().enumerate() {
            for (b, pattern_b) in patterns.iter().enumerate() {
                for direction in [Direction::Down, Direction::Right] {
                    if !overlaps_agree(pattern_a, pattern_b, direction) {
                        continue;
                    }
                    if let Some(forward) = rules.get_mut(Self::slot(a, direction)) {
                        forward.insert(b);
                    }
                    if let Some(backward) = rules.get_mut(Self::slot(b, direction.opposite())) {
                        backward.insert(a);
                    }
                }
            }
        }

        Self {
            pattern_count,
            rules,
        }
    }

    const fn slot(pattern: usize, direction: Direction) -> usize {
        pattern * 4 + direction.index()
    }

    /// Number of patterns the table covers
    pub const fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Patterns allowed one cell away from `pattern` in `direction`
    pub fn compatible_set(&self, pattern: usize, direction: Direction) -> Option<&PatternBitset> {
        self.rules.get(Self::slot(pattern, direction))
    }

    /// Whether `other` may sit one cell away from `pattern` in `direction`
    pub fn is_compatible(&self, pattern: usize, direction: Direction, other: usize) -> bool {
        self.compatible_set(pattern, direction)
            .is_some_and(|set| set.contains(other))
    }

    /// Union of the patterns allowed next to any member of `possible`
    pub fn allowed_neighbors(
        &self,
        possible: &PatternBitset,
        direction: Direction,
    ) -> PatternBitset {
        let mut allowed = PatternBitset::new(self.pattern_count);
        for pattern in possible.iter() {
            if let Some(set) = self.compatible_set(pattern, direction) {
                allowed.union_with(set);
            }
        }
        allowed
    }
}

/// Compare the region where `b`, shifted one cell in `direction`, overlaps `a`
pub fn overlaps_agree(a: &Pattern, b: &Pattern, direction: Direction) -> bool {
    let size = a.size() as i32;
    let [d_row, d_col] = direction.offset();

    for row in 0..size {
        for col in 0..size {
            let (b_row, b_col) = (row - d_row, col - d_col);
            if b_row < 0 || b_row >= size || b_col < 0 || b_col >= size {
                continue;
            }
            let label_a = a.label_at(row as usize, col as usize);
            let label_b = b.label_at(b_row as usize, b_col as usize);
            if label_a != label_b {
                return false;
            }
        }
    }
    true
}
