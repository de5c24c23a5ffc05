//! Spatial data structures of the output
//!
//! This module contains spatial-related functionality including:
//! - Pattern extraction from exemplars
//! - Cells and their cached entropy sums
//! - The output grid and its neighbourhood topology

/// Superposition state of one output cell
pub mod cell;
/// The four cardinal neighbour directions
pub mod direction;
/// Output grid, topology and random stream
pub mod grid;
/// Pattern extraction, deduplication and orientation transforms
pub mod tiles;

pub use grid::OutputGrid;
