use crate::{
    algorithm::compatibility::CompatibilityTable,
    analysis::Exemplar,
    io::error::Result,
    spatial::tiles::PatternCatalog,
};
use log::info;

/// Pattern catalog together with its adjacency rules
///
/// Both halves are immutable once built, so one model can be shared through
/// an `Arc` by any number of output grids.
#[derive(Debug, Clone)]
pub struct SynthesisModel {
    catalog: PatternCatalog,
    rules: CompatibilityTable,
}

impl SynthesisModel {
    /// Build the adjacency rules for an existing catalog
    pub fn new(catalog: PatternCatalog) -> Self {
        let rules = CompatibilityTable::build(catalog.patterns());
        info!(
            "built {} patterns of {}x{} pixels with adjacency rules",
            catalog.len(),
            catalog.pattern_size(),
            catalog.pattern_size()
        );
        Self { catalog, rules }
    }

    /// Extract patterns from an exemplar and build their rules
    ///
    /// # Errors
    ///
    /// Returns an error if pattern extraction fails (see [`PatternCatalog::extract`])
    pub fn from_exemplar(
        exemplar: &Exemplar,
        pattern_size: usize,
        include_rotations: bool,
        include_reflections: bool,
    ) -> Result<Self> {
        let catalog = PatternCatalog::extract(
            exemplar,
            pattern_size,
            include_rotations,
            include_reflections,
        )?;
        Ok(Self::new(catalog))
    }

    /// The deduplicated patterns
    pub const fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Adjacency rules between patterns
    pub const fn rules(&self) -> &CompatibilityTable {
        &self.rules
    }

    /// Number of distinct patterns
    pub fn pattern_count(&self) -> usize {
        self.catalog.len()
    }
}
