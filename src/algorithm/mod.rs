/// Fixed-capacity bitsets of pattern indices
pub mod bitset;
/// Pairwise adjacency rules between patterns
pub mod compatibility;
/// Steppable engine and its lifecycle states
pub mod executor;
/// Shared pattern catalog plus rules
pub mod model;
/// Constraint propagation to a fixed point
pub mod propagation;
/// Minimum-entropy cell selection and weighted pattern choice
pub mod selection;
