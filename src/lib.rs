//! Overlapping wave function collapse texture synthesis
//!
//! Every N×N window of a small exemplar image becomes a pattern. An output
//! grid starts with every pattern possible in every cell; the engine then
//! repeatedly collapses the lowest-entropy cell and propagates the adjacency
//! constraints until the grid is complete or a contradiction is reached.

#![forbid(unsafe_code)]

/// Adjacency rules, propagation, selection and the steppable engine
pub mod algorithm;
/// Exemplar loading and colour labelling
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Entropy and probability helpers
pub mod math;
/// Cells, output grid and pattern extraction
pub mod spatial;

pub use algorithm::executor::{Engine, EngineConfig, EngineState, StepOutcome};
pub use io::error::{Result, SynthesisError};
pub use io::render::Surface;
