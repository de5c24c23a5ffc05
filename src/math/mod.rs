//! Mathematical utilities for the engine

/// Weighted Shannon entropy of possibility sets
pub mod entropy;
/// Weighted sampling over discrete distributions
pub mod probability;
