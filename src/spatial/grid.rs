//! Output grid of superposed cells
//!
//! Holds one [`Cell`] per output position, the seeded random stream used for
//! every choice made on the grid, and the shared model the cells refer to.
//! The grid is rebuilt wholesale on [`OutputGrid::initialize`]; cells are
//! never recycled piecemeal.

use crate::{
    algorithm::bitset::PatternBitset,
    algorithm::model::SynthesisModel,
    algorithm::propagation::{Contradiction, PropagationOrder, PropagationReport, propagate},
    algorithm::selection::{choose_pattern, select_min_entropy_cell},
    io::configuration::MAX_GRID_DIMENSION,
    io::error::{Result, SynthesisError},
    spatial::cell::Cell,
    spatial::direction::Direction,
};
use ndarray::Array2;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::sync::Arc;

/// Whether neighbours wrap around the grid edges
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Wrap {
    /// Edge cells have fewer than four neighbours
    None,
    /// Both axes wrap, so the output tiles seamlessly
    #[default]
    Both,
}

/// Grid dimensions plus edge behaviour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topology {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Edge behaviour
    pub wrap: Wrap,
}

impl Topology {
    /// Neighbouring position of `coord` in `direction`, if one exists
    pub fn neighbor(&self, coord: [usize; 2], direction: Direction) -> Option<[usize; 2]> {
        let [d_row, d_col] = direction.offset();
        let row = coord[0] as i64 + i64::from(d_row);
        let col = coord[1] as i64 + i64::from(d_col);
        let (height, width) = (self.height as i64, self.width as i64);

        match self.wrap {
            Wrap::Both => Some([
                row.rem_euclid(height) as usize,
                col.rem_euclid(width) as usize,
            ]),
            Wrap::None => ((0..height).contains(&row) && (0..width).contains(&col))
                .then_some([row as usize, col as usize]),
        }
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// A chosen cell and the pattern it was committed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollapseEvent {
    /// Grid position as `[row, col]`
    pub coord: [usize; 2],
    /// Pattern index the cell now holds
    pub pattern: usize,
}

/// Width × height array of cells with its random stream
#[derive(Debug, Clone)]
pub struct OutputGrid {
    model: Arc<SynthesisModel>,
    topology: Topology,
    cells: Array2<Cell>,
    rng: XorShiftRng,
}

impl OutputGrid {
    /// Create a grid with every pattern possible in every cell
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(
        model: Arc<SynthesisModel>,
        width: usize,
        height: usize,
        wrap: Wrap,
        seed: u32,
    ) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION
        {
            return Err(SynthesisError::InvalidGridSize { width, height });
        }

        let topology = Topology {
            width,
            height,
            wrap,
        };
        let cells = Self::fresh_cells(&model, topology);
        Ok(Self {
            model,
            topology,
            cells,
            rng: XorShiftRng::seed_from_u64(u64::from(seed)),
        })
    }

    fn fresh_cells(model: &SynthesisModel, topology: Topology) -> Array2<Cell> {
        let full = Cell::full(model.catalog());
        Array2::from_elem((topology.height, topology.width), full)
    }

    /// Make every pattern possible again in every cell
    ///
    /// The random stream is left where it was, so the next run explores a
    /// different search. Use [`OutputGrid::reseed`] to replay a seed.
    pub fn initialize(&mut self) {
        self.cells = Self::fresh_cells(&self.model, self.topology);
    }

    /// Propagate from every cell that already holds a single pattern
    ///
    /// A fresh grid over a one-pattern catalog starts fully collapsed, so
    /// its adjacency has to be checked before the run can count as complete.
    ///
    /// # Errors
    ///
    /// Returns the cell that lost its last pattern
    pub fn settle(&mut self) -> std::result::Result<PropagationReport, Contradiction> {
        let seeds: Vec<[usize; 2]> = self
            .cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_collapsed())
            .map(|((row, col), _)| [row, col])
            .collect();
        self.propagate_with_order(&seeds, PropagationOrder::Fifo)
    }

    /// Restart the random stream from `seed`
    pub fn reseed(&mut self, seed: u32) {
        self.rng = XorShiftRng::seed_from_u64(u64::from(seed));
    }

    /// Lowest-entropy undetermined cell, ties broken at random
    pub fn select_min_entropy_cell(&mut self) -> Option<[usize; 2]> {
        select_min_entropy_cell(&self.cells, &mut self.rng)
    }

    /// Commit a cell to one of its patterns, drawn by frequency
    ///
    /// Returns the chosen pattern, or `None` if the position is outside the
    /// grid or has no pattern left.
    pub fn collapse(&mut self, coord: [usize; 2]) -> Option<usize> {
        let catalog = self.model.catalog();
        let cell = self.cells.get_mut(coord)?;
        let pattern = choose_pattern(cell.possible(), catalog, &mut self.rng)?;
        cell.collapse_to(pattern, catalog);
        Some(pattern)
    }

    /// Select the lowest-entropy cell and collapse it
    ///
    /// Returns `None` once every cell is collapsed.
    pub fn collapse_one(&mut self) -> Option<CollapseEvent> {
        let coord = self.select_min_entropy_cell()?;
        let pattern = self.collapse(coord)?;
        Some(CollapseEvent { coord, pattern })
    }

    /// Propagate the constraints of one cell in FIFO order
    ///
    /// # Errors
    ///
    /// Returns the cell that lost its last pattern
    pub fn propagate_from(
        &mut self,
        coord: [usize; 2],
    ) -> std::result::Result<PropagationReport, Contradiction> {
        self.propagate_with_order(&[coord], PropagationOrder::Fifo)
    }

    /// Propagate from several cells with an explicit queue order
    ///
    /// # Errors
    ///
    /// Returns the cell that lost its last pattern
    pub fn propagate_with_order(
        &mut self,
        seeds: &[[usize; 2]],
        order: PropagationOrder,
    ) -> std::result::Result<PropagationReport, Contradiction> {
        propagate(
            &mut self.cells,
            self.topology,
            seeds,
            self.model.catalog(),
            self.model.rules(),
            order,
        )
    }

    /// Intersect one cell's possibility set with `allowed`
    ///
    /// Returns whether the set shrank. Does not propagate.
    pub fn restrict(&mut self, coord: [usize; 2], allowed: &PatternBitset) -> bool {
        let catalog = self.model.catalog();
        self.cells
            .get_mut(coord)
            .is_some_and(|cell| cell.restrict(allowed, catalog))
    }

    /// Whether every cell holds exactly one pattern
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Whether any cell has no pattern left
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(Cell::is_contradiction)
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.topology.width
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.topology.height
    }

    /// Dimensions and edge behaviour
    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Cell at `[row, col]`
    pub fn cell(&self, coord: [usize; 2]) -> Option<&Cell> {
        self.cells.get(coord)
    }

    /// All cells indexed by `(row, col)`
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Shared catalog and rules
    pub const fn model(&self) -> &Arc<SynthesisModel> {
        &self.model
    }
}
