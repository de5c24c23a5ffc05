//! Engine constants and runtime configuration defaults

/// Side length of the square patterns extracted from exemplars
pub const PATTERN_SIZE: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension in cells
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Maximum width or height of a rendered image in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

/// Largest pattern side length accepted by extraction
pub const MAX_PATTERN_SIZE: usize = 8;

/// Bundled exemplar used when no selector is given
pub const DEFAULT_EXEMPLAR: &str = "flowers";

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u32 = 42;

/// Default output width in cells
pub const DEFAULT_WIDTH: usize = 48;

/// Default output height in cells
pub const DEFAULT_HEIGHT: usize = 48;

/// Default side length of one rendered cell in pixels
pub const DEFAULT_CELL_PIXELS: u32 = 8;

/// Engine steps taken per rendered frame by the driver
pub const DEFAULT_STEPS_PER_FRAME: usize = 4;

/// Resets the driver performs after contradictions before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

/// How long a finished image is held before the animation moves on
pub const FINISHED_DELAY_MS: u32 = 5_000;

/// Colour painted for cells whose possibility set has become empty
pub const CONTRADICTION_COLOUR: [u8; 4] = [255, 0, 0, 255];

/// Tolerance under which two entropies count as tied
pub const ENTROPY_EPSILON: f64 = 1e-9;

// Output settings
/// Suffix added to output filenames when no output path is given
pub const OUTPUT_SUFFIX: &str = "_wfc";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
