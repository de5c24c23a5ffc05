use crate::{
    algorithm::compatibility::CompatibilityTable,
    spatial::cell::Cell,
    spatial::direction::Direction,
    spatial::grid::Topology,
    spatial::tiles::PatternCatalog,
};
use ndarray::Array2;
use std::collections::VecDeque;
use std::fmt;

/// Order in which queued cells are revisited
///
/// Possibility sets only ever shrink, so every order reaches the same fixed
/// point; the order only changes how much work it takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PropagationOrder {
    /// Oldest queued cell first
    #[default]
    Fifo,
    /// Newest queued cell first
    Lifo,
}

/// Work done by one propagation pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Cells taken off the queue
    pub popped: usize,
    /// Times a neighbour's possibility set strictly shrank
    pub shrink_events: usize,
}

/// A cell whose possibility set became empty
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contradiction {
    /// Grid position as `[row, col]`
    pub coord: [usize; 2],
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contradiction at row {}, col {}",
            self.coord[0], self.coord[1]
        )
    }
}

/// Queue of cells whose neighbours still need re-checking
///
/// A cell already waiting is not queued twice: when it is popped its
/// current, smallest possibility set is what gets propagated.
#[derive(Debug)]
pub struct Worklist {
    queue: VecDeque<[usize; 2]>,
    queued: Vec<bool>,
    width: usize,
    order: PropagationOrder,
}

impl Worklist {
    /// Create an empty worklist for a grid
    pub fn new(topology: Topology, order: PropagationOrder) -> Self {
        Self {
            queue: VecDeque::new(),
            queued: vec![false; topology.width * topology.height],
            width: topology.width,
            order,
        }
    }

    /// Queue a cell unless it is already waiting
    pub fn push(&mut self, coord: [usize; 2]) {
        if let Some(flag) = self.queued.get_mut(coord[0] * self.width + coord[1]) {
            if !*flag {
                *flag = true;
                self.queue.push_back(coord);
            }
        }
    }

    /// Take the next cell according to the configured order
    pub fn pop(&mut self) -> Option<[usize; 2]> {
        let coord = match self.order {
            PropagationOrder::Fifo => self.queue.pop_front(),
            PropagationOrder::Lifo => self.queue.pop_back(),
        }?;
        if let Some(flag) = self.queued.get_mut(coord[0] * self.width + coord[1]) {
            *flag = false;
        }
        Some(coord)
    }

    /// Check if no cell is waiting
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of waiting cells
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Remove possibilities that no longer have support until nothing changes
///
/// Each popped cell restricts its four neighbours to the union of patterns
/// its own remaining patterns allow in that direction. A neighbour that
/// shrinks is queued in turn. The pass stops at the first neighbour left
/// with no pattern at all.
///
/// # Errors
///
/// Returns the first [`Contradiction`] found; cells touched before it keep
/// their reduced sets.
pub fn propagate(
    cells: &mut Array2<Cell>,
    topology: Topology,
    seeds: &[[usize; 2]],
    catalog: &PatternCatalog,
    rules: &CompatibilityTable,
    order: PropagationOrder,
) -> Result<PropagationReport, Contradiction> {
    let mut worklist = Worklist::new(topology, order);
    for &seed in seeds {
        worklist.push(seed);
    }

    let mut report = PropagationReport::default();
    while let Some(coord) = worklist.pop() {
        report.popped += 1;
        let Some(possible) = cells.get(coord).map(|cell| cell.possible().clone()) else {
            continue;
        };

        for direction in Direction::ALL {
            let Some(neighbor_coord) = topology.neighbor(coord, direction) else {
                continue;
            };
            let allowed = rules.allowed_neighbors(&possible, direction);
            let Some(neighbor) = cells.get_mut(neighbor_coord) else {
                continue;
            };

            if neighbor.restrict(&allowed, catalog) {
                report.shrink_events += 1;
                if neighbor.is_contradiction() {
                    return Err(Contradiction {
                        coord: neighbor_coord,
                    });
                }
                worklist.push(neighbor_coord);
            }
        }
    }

    Ok(report)
}
