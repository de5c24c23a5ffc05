//! Superposition state of a single output cell

use crate::algorithm::bitset::PatternBitset;
use crate::math::entropy::weighted_entropy;
use crate::spatial::tiles::PatternCatalog;

/// Possibility set of one cell with cached entropy sums
///
/// The sums always describe the current possibility set, so entropy is O(1).
/// A cell with one pattern left counts as collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    possible: PatternBitset,
    sum_weight: f64,
    sum_weight_log_weight: f64,
    collapsed: bool,
}

impl Cell {
    /// A cell where every pattern of the catalog is still possible
    pub fn full(catalog: &PatternCatalog) -> Self {
        let mut cell = Self {
            possible: PatternBitset::all(catalog.len()),
            sum_weight: 0.0,
            sum_weight_log_weight: 0.0,
            collapsed: false,
        };
        cell.refresh(catalog);
        cell
    }

    /// Patterns still possible here
    pub const fn possible(&self) -> &PatternBitset {
        &self.possible
    }

    /// Whether exactly one pattern remains
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether no pattern remains
    pub fn is_contradiction(&self) -> bool {
        self.possible.is_empty()
    }

    /// The pattern this cell settled on, once collapsed
    pub fn chosen_pattern(&self) -> Option<usize> {
        if self.collapsed {
            self.possible.single()
        } else {
            None
        }
    }

    /// Cached sum of weights over the possibility set
    pub const fn sum_weight(&self) -> f64 {
        self.sum_weight
    }

    /// Cached sum of `w * ln(w)` over the possibility set
    pub const fn sum_weight_log_weight(&self) -> f64 {
        self.sum_weight_log_weight
    }

    /// Weighted entropy of the possibility set
    pub fn entropy(&self) -> f64 {
        weighted_entropy(self.sum_weight, self.sum_weight_log_weight)
    }

    /// Commit the cell to a single pattern
    pub fn collapse_to(&mut self, pattern: usize, catalog: &PatternCatalog) {
        self.possible = PatternBitset::singleton(catalog.len(), pattern);
        self.refresh(catalog);
    }

    /// Intersect the possibility set with `allowed`
    ///
    /// Returns whether the set strictly shrank. Sums are recomputed from the
    /// remaining members rather than decremented, so no rounding drift builds
    /// up over a long run.
    pub fn restrict(&mut self, allowed: &PatternBitset, catalog: &PatternCatalog) -> bool {
        let before = self.possible.count();
        self.possible.intersect_with(allowed);
        if self.possible.count() == before {
            return false;
        }
        self.refresh(catalog);
        true
    }

    fn refresh(&mut self, catalog: &PatternCatalog) {
        let mut sum_weight = 0.0;
        let mut sum_weight_log_weight = 0.0;
        for pattern in self.possible.iter().filter_map(|index| catalog.get(index)) {
            sum_weight += pattern.weight();
            sum_weight_log_weight += pattern.weight_log_weight();
        }
        self.sum_weight = sum_weight;
        self.sum_weight_log_weight = sum_weight_log_weight;
        self.collapsed = self.possible.count() == 1;
    }
}
