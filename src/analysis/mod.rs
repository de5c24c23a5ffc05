//! Exemplar preprocessing ahead of pattern extraction

/// Exemplar image loading and colour labelling
pub mod patterns;

pub use patterns::Exemplar;
