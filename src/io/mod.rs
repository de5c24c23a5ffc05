//! Input/output: errors, configuration, exemplars, rendering and the CLI

/// Command-line argument parsing and the frame-by-frame driver
pub mod cli;
/// Engine constants and runtime defaults
pub mod configuration;
/// Error types for construction and file operations
pub mod error;
/// Exemplars compiled into the binary
pub mod exemplars;
/// PNG export
pub mod image;
/// Logger that prints around the progress bar
pub mod logging;
/// Progress bar for synthesis runs
pub mod progress;
/// Surfaces and weighted-average cell colours
pub mod render;
/// Frame capture and GIF export
pub mod visualization;
