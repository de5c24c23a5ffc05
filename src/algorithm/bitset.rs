use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over pattern indices
///
/// Uses the dense 0-based pattern indices assigned by the catalog.
/// Provides O(1) membership testing and word-wide set operations, which is
/// what keeps propagation cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternBitset {
    bits: BitVec,
}

impl PatternBitset {
    /// Create a bitset with no patterns present
    pub fn new(pattern_count: usize) -> Self {
        Self {
            bits: bitvec![0; pattern_count],
        }
    }

    /// Create a bitset containing every pattern
    pub fn all(pattern_count: usize) -> Self {
        Self {
            bits: bitvec![1; pattern_count],
        }
    }

    /// Create a bitset holding exactly one pattern
    pub fn singleton(pattern_count: usize, pattern: usize) -> Self {
        let mut bitset = Self::new(pattern_count);
        bitset.insert(pattern);
        bitset
    }

    /// Number of patterns the set can address
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a pattern index, ignoring indices past the capacity
    pub fn insert(&mut self, pattern: usize) {
        if pattern < self.bits.len() {
            self.bits.set(pattern, true);
        }
    }

    /// Remove a pattern index
    pub fn remove(&mut self, pattern: usize) {
        if pattern < self.bits.len() {
            self.bits.set(pattern, false);
        }
    }

    /// Test pattern membership
    pub fn contains(&self, pattern: usize) -> bool {
        self.bits.get(pattern).is_some_and(|bit| *bit)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= other.bits.as_bitslice();
    }

    /// Add every member of another bitset in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= other.bits.as_bitslice();
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test whether every member of this set is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|pattern| other.contains(pattern))
    }

    /// Test if no patterns are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count patterns in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The only member, if the set holds exactly one pattern
    pub fn single(&self) -> Option<usize> {
        let mut members = self.bits.iter_ones();
        let first = members.next()?;
        members.next().is_none().then_some(first)
    }

    /// Iterate member pattern indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all pattern indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for PatternBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PatternBitset({} patterns: {:?})",
            self.count(),
            self.to_vec()
        )
    }
}
