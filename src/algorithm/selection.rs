use crate::{
    algorithm::bitset::PatternBitset,
    io::configuration::ENTROPY_EPSILON,
    math::probability::weighted_index,
    spatial::cell::Cell,
    spatial::tiles::PatternCatalog,
};
use ndarray::Array2;
use rand::Rng;

/// Find the undetermined cell with the lowest entropy
///
/// Collapsed cells and contradictions are skipped. Cells whose entropy lies
/// within [`ENTROPY_EPSILON`] of the minimum are tied, and one of them is
/// drawn uniformly so no corner of the grid is favoured. Returns `None` when
/// every cell is collapsed.
pub fn select_min_entropy_cell<R: Rng + ?Sized>(
    cells: &Array2<Cell>,
    rng: &mut R,
) -> Option<[usize; 2]> {
    let mut min_entropy = f64::INFINITY;
    let mut tied: Vec<[usize; 2]> = Vec::new();

    for ((row, col), cell) in cells.indexed_iter() {
        if cell.is_collapsed() || cell.is_contradiction() {
            continue;
        }
        let entropy = cell.entropy();
        if entropy < min_entropy - ENTROPY_EPSILON {
            min_entropy = entropy;
            tied.clear();
            tied.push([row, col]);
        } else if (entropy - min_entropy).abs() <= ENTROPY_EPSILON {
            tied.push([row, col]);
        }
    }

    match tied.len() {
        0 => None,
        1 => tied.first().copied(),
        len => tied.get(rng.random_range(0..len)).copied(),
    }
}

/// Draw one possible pattern with probability proportional to its frequency
pub fn choose_pattern<R: Rng + ?Sized>(
    possible: &PatternBitset,
    catalog: &PatternCatalog,
    rng: &mut R,
) -> Option<usize> {
    let candidates = possible.to_vec();
    if candidates.len() <= 1 {
        return candidates.first().copied();
    }

    let weights: Vec<f64> = candidates
        .iter()
        .map(|&index| catalog.get(index).map_or(0.0, |pattern| pattern.weight()))
        .collect();
    let index = weighted_index(&weights, rng.random::<f64>());
    candidates.get(index).copied()
}
