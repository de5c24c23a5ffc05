//! Pattern extraction from exemplars
//!
//! Slides an N×N window over every pixel offset of the exemplar, wrapping at
//! the borders so the exemplar behaves as a torus and patterns tile
//! seamlessly. Optional rotations and reflections add variety and reduce
//! directional bias. Identical blocks are merged into one pattern whose
//! frequency counts every occurrence.

use crate::analysis::Exemplar;
use crate::io::configuration::MAX_PATTERN_SIZE;
use crate::io::error::{Result, SynthesisError, invalid_parameter};
use crate::math::entropy::weight_log_weight;
use std::collections::HashMap;

/// Row-major N×N block of colour labels
pub type Block = Vec<usize>;

/// An immutable square pattern with its sampling weight
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    labels: Block,
    size: usize,
    frequency: u32,
    weight_log_weight: f64,
}

impl Pattern {
    fn new(labels: Block, size: usize, frequency: u32) -> Self {
        Self {
            labels,
            size,
            frequency,
            weight_log_weight: weight_log_weight(f64::from(frequency)),
        }
    }

    /// Row-major colour labels of the block
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Side length of the block
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Occurrence count in the exemplar
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Sampling weight (the frequency as a float)
    pub fn weight(&self) -> f64 {
        f64::from(self.frequency)
    }

    /// Precomputed `w * ln(w)` used for entropy
    pub const fn weight_log_weight(&self) -> f64 {
        self.weight_log_weight
    }

    /// Label at a position inside the block
    pub fn label_at(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.labels.get(row * self.size + col).copied()
    }

    /// Label of the top-left pixel, which stands for the pattern when rendered
    pub fn representative_label(&self) -> usize {
        self.labels.first().copied().unwrap_or(0)
    }
}

/// Deduplicated set of patterns indexed by dense ids
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
    pattern_size: usize,
    palette: Vec<[u8; 4]>,
}

impl PatternCatalog {
    /// Extract patterns from an exemplar with optional transformations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `pattern_size` is zero or larger than the supported maximum
    /// - The exemplar is smaller than `pattern_size` in either dimension
    /// - No patterns were extracted
    pub fn extract(
        exemplar: &Exemplar,
        pattern_size: usize,
        include_rotations: bool,
        include_reflections: bool,
    ) -> Result<Self> {
        validate_pattern_size(pattern_size)?;

        let (width, height) = (exemplar.width(), exemplar.height());
        if width < pattern_size || height < pattern_size {
            return Err(SynthesisError::ExemplarTooSmall {
                width,
                height,
                pattern_size,
            });
        }

        let mut builder = CatalogBuilder::new(pattern_size);
        for row in 0..height {
            for col in 0..width {
                let mut window = Vec::with_capacity(pattern_size * pattern_size);
                for dr in 0..pattern_size {
                    for dc in 0..pattern_size {
                        window.push(exemplar.label_wrapped(row + dr, col + dc));
                    }
                }

                let blocks =
                    orientations(window, pattern_size, include_rotations, include_reflections);
                for block in blocks {
                    builder.add(block, 1);
                }
            }
        }

        builder.finish(exemplar.palette().to_vec())
    }

    /// Build a catalog from explicit blocks and frequencies
    ///
    /// Blocks that are identical are merged and their frequencies summed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `pattern_size` is invalid
    /// - A block does not hold exactly `pattern_size²` labels
    /// - A block uses a label with no palette entry, or has zero frequency
    /// - No blocks were supplied
    pub fn from_blocks(
        blocks: Vec<(Block, u32)>,
        pattern_size: usize,
        palette: Vec<[u8; 4]>,
    ) -> Result<Self> {
        validate_pattern_size(pattern_size)?;

        let mut builder = CatalogBuilder::new(pattern_size);
        for (block, frequency) in blocks {
            if block.len() != pattern_size * pattern_size {
                return Err(invalid_parameter(
                    "block",
                    &block.len(),
                    &format!("expected {} labels", pattern_size * pattern_size),
                ));
            }
            if frequency == 0 {
                return Err(invalid_parameter("frequency", &0, &"must be positive"));
            }
            if let Some(&label) = block.iter().find(|&&label| label >= palette.len()) {
                return Err(invalid_parameter(
                    "block",
                    &label,
                    &format!("palette only has {} colours", palette.len()),
                ));
            }
            builder.add(block, frequency);
        }

        builder.finish(palette)
    }

    /// Number of distinct patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the catalog holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// All patterns in index order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Pattern by index
    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    /// Side length shared by every pattern
    pub const fn pattern_size(&self) -> usize {
        self.pattern_size
    }

    /// RGBA colour of each label
    pub fn palette(&self) -> &[[u8; 4]] {
        &self.palette
    }

    /// Colour that represents a pattern when it is drawn as a single cell
    pub fn representative_color(&self, index: usize) -> Option<[u8; 4]> {
        let pattern = self.patterns.get(index)?;
        self.palette.get(pattern.representative_label()).copied()
    }

    /// Sum of every pattern's weight
    pub fn total_weight(&self) -> f64 {
        self.patterns.iter().map(Pattern::weight).sum()
    }
}

struct CatalogBuilder {
    pattern_size: usize,
    index_of: HashMap<Block, usize>,
    blocks: Vec<(Block, u32)>,
}

impl CatalogBuilder {
    fn new(pattern_size: usize) -> Self {
        Self {
            pattern_size,
            index_of: HashMap::new(),
            blocks: Vec::new(),
        }
    }

    // First occurrence fixes the index, so ids follow scan order
    fn add(&mut self, block: Block, frequency: u32) {
        if let Some(&index) = self.index_of.get(&block) {
            if let Some(entry) = self.blocks.get_mut(index) {
                entry.1 += frequency;
            }
        } else {
            self.index_of.insert(block.clone(), self.blocks.len());
            self.blocks.push((block, frequency));
        }
    }

    fn finish(self, palette: Vec<[u8; 4]>) -> Result<PatternCatalog> {
        if self.blocks.is_empty() {
            return Err(SynthesisError::EmptyCatalog);
        }
        let pattern_size = self.pattern_size;
        let patterns = self
            .blocks
            .into_iter()
            .map(|(block, frequency)| Pattern::new(block, pattern_size, frequency))
            .collect();
        Ok(PatternCatalog {
            patterns,
            pattern_size,
            palette,
        })
    }
}

fn validate_pattern_size(pattern_size: usize) -> Result<()> {
    if pattern_size == 0 || pattern_size > MAX_PATTERN_SIZE {
        return Err(invalid_parameter(
            "pattern_size",
            &pattern_size,
            &format!("must be between 1 and {MAX_PATTERN_SIZE}"),
        ));
    }
    Ok(())
}

/// Every requested orientation of a block, the original first
pub fn orientations(
    block: Block,
    size: usize,
    include_rotations: bool,
    include_reflections: bool,
) -> Vec<Block> {
    let mut transforms = vec![block];

    if include_rotations {
        for _ in 0..3 {
            if let Some(last) = transforms.last() {
                let rotated = rotate_90(last, size);
                transforms.push(rotated);
            }
        }
    }

    if include_reflections {
        let current_len = transforms.len();
        for i in 0..current_len {
            if let Some(transform) = transforms.get(i) {
                let reflected = reflect(transform, size);
                transforms.push(reflected);
            }
        }
    }

    transforms
}

/// Rotate a block a quarter turn clockwise
pub fn rotate_90(block: &[usize], size: usize) -> Block {
    let mut rotated = vec![0; size * size];
    for i in 0..size {
        for j in 0..size {
            if let (Some(cell), Some(&val)) = (
                rotated.get_mut(i * size + j),
                block.get((size - 1 - j) * size + i),
            ) {
                *cell = val;
            }
        }
    }
    rotated
}

/// Mirror a block left to right
pub fn reflect(block: &[usize], size: usize) -> Block {
    let mut reflected = vec![0; size * size];
    for i in 0..size {
        for j in 0..size {
            if let (Some(cell), Some(&val)) = (
                reflected.get_mut(i * size + j),
                block.get(i * size + (size - 1 - j)),
            ) {
                *cell = val;
            }
        }
    }
    reflected
}
