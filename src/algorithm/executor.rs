use crate::{
    algorithm::model::SynthesisModel,
    algorithm::propagation::Contradiction,
    analysis::Exemplar,
    io::configuration::{MAX_GRID_DIMENSION, PATTERN_SIZE},
    io::error::{Result, SynthesisError, invalid_parameter},
    io::exemplars::load_bundled,
    io::render::{Surface, draw_grid, render_grid},
    spatial::grid::{CollapseEvent, OutputGrid, Wrap},
};
use image::RgbaImage;
use log::debug;
use std::sync::Arc;

/// Parameters fixed at engine construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Output width in cells
    pub width: usize,
    /// Output height in cells
    pub height: usize,
    /// Seed of the random stream
    pub seed: u32,
    /// Side length of extracted patterns
    pub pattern_size: usize,
    /// Whether to add the 90°, 180° and 270° rotations of each window
    pub include_rotations: bool,
    /// Whether to add the mirror image of each (rotated) window
    pub include_reflections: bool,
    /// Whether the output wraps at its edges
    pub wrap: Wrap,
}

impl EngineConfig {
    /// Configuration with default pattern size, all orientations and wrapping
    pub const fn new(width: usize, height: usize, seed: u32) -> Self {
        Self {
            width,
            height,
            seed,
            pattern_size: PATTERN_SIZE,
            include_rotations: true,
            include_reflections: true,
            wrap: Wrap::Both,
        }
    }

    /// Toggle rotations and reflections together
    #[must_use]
    pub const fn with_symmetry(mut self, enabled: bool) -> Self {
        self.include_rotations = enabled;
        self.include_reflections = enabled;
        self
    }

    /// Toggle rotated pattern variants
    #[must_use]
    pub const fn with_rotations(mut self, enabled: bool) -> Self {
        self.include_rotations = enabled;
        self
    }

    /// Toggle mirrored pattern variants
    #[must_use]
    pub const fn with_reflections(mut self, enabled: bool) -> Self {
        self.include_reflections = enabled;
        self
    }

    /// Set the pattern side length
    #[must_use]
    pub const fn with_pattern_size(mut self, pattern_size: usize) -> Self {
        self.pattern_size = pattern_size;
        self
    }

    /// Set the output edge behaviour
    #[must_use]
    pub const fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Check the grid dimensions and pattern size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`], or if the pattern size is zero
    pub fn validate(&self) -> Result<()> {
        if self.pattern_size == 0 {
            return Err(invalid_parameter("pattern_size", &0, &"must be positive"));
        }
        if self.width == 0
            || self.height == 0
            || self.width > MAX_GRID_DIMENSION
            || self.height > MAX_GRID_DIMENSION
        {
            return Err(SynthesisError::InvalidGridSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Lifecycle of one synthesis run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Cells remain to be collapsed
    Running,
    /// Every cell holds exactly one pattern
    Complete,
    /// Some cell ran out of patterns; only a reset continues
    Contradiction,
}

impl EngineState {
    /// The step result that reports this state
    pub const fn outcome(self) -> StepOutcome {
        match self {
            Self::Running => StepOutcome::StillRunning,
            Self::Complete => StepOutcome::Finished,
            Self::Contradiction => StepOutcome::Failed,
        }
    }
}

/// Result of a single [`Engine::step`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// More steps are needed
    StillRunning,
    /// The grid is fully collapsed
    Finished,
    /// A contradiction was found
    Failed,
}

impl StepOutcome {
    /// Whether the run has ended either way and wants a reset
    pub const fn is_done(self) -> bool {
        !matches!(self, Self::StillRunning)
    }
}

/// Steppable overlapping wave function collapse engine
///
/// The model (patterns and rules) is built once and survives resets; the
/// output grid and its cells are rebuilt on every reset. Not reentrant: the
/// driver calls [`Engine::step`] or [`Engine::tick`] once at a time.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    grid: OutputGrid,
    state: EngineState,
    steps: usize,
    last_collapse: Option<CollapseEvent>,
    unsettled: Option<Contradiction>,
}

impl Engine {
    /// Create an engine over one of the bundled exemplars
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selector names no bundled exemplar
    /// - The exemplar is smaller than the pattern size
    /// - The grid dimensions are invalid
    pub fn new(config: EngineConfig, selector: &str) -> Result<Self> {
        let exemplar = load_bundled(selector)?;
        Self::from_exemplar(config, &exemplar)
    }

    /// Create an engine over an arbitrary exemplar
    ///
    /// # Errors
    ///
    /// Returns an error if the exemplar is too small for the pattern size or
    /// the grid dimensions are invalid
    pub fn from_exemplar(config: EngineConfig, exemplar: &Exemplar) -> Result<Self> {
        config.validate()?;
        let model = SynthesisModel::from_exemplar(
            exemplar,
            config.pattern_size,
            config.include_rotations,
            config.include_reflections,
        )?;
        Self::from_model(config, Arc::new(model))
    }

    /// Create an engine sharing an already built model
    ///
    /// The model's catalog is used as is; `config.pattern_size` is replaced by
    /// the catalog's and the symmetry flags are kept only for reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid
    pub fn from_model(mut config: EngineConfig, model: Arc<SynthesisModel>) -> Result<Self> {
        config.pattern_size = model.catalog().pattern_size();
        config.validate()?;
        let mut grid =
            OutputGrid::new(model, config.width, config.height, config.wrap, config.seed)?;
        let unsettled = grid.settle().err();
        Ok(Self {
            config,
            grid,
            state: EngineState::Running,
            steps: 0,
            last_collapse: None,
            unsettled,
        })
    }

    /// Collapse one cell and propagate its constraints to a fixed point
    ///
    /// Does nothing once the run is complete or contradicted and reports
    /// that state again.
    pub fn step(&mut self) -> StepOutcome {
        if self.state != EngineState::Running {
            return self.state.outcome();
        }

        // Cells that started with one pattern already broke their own rules
        if let Some(contradiction) = self.unsettled.take() {
            debug!("{contradiction} before the first step");
            self.finish(EngineState::Contradiction);
            return self.state.outcome();
        }

        let Some(event) = self.grid.collapse_one() else {
            if self.grid.has_contradiction() {
                self.finish(EngineState::Contradiction);
            } else {
                self.finish(EngineState::Complete);
            }
            return self.state.outcome();
        };
        self.steps += 1;
        self.last_collapse = Some(event);

        match self.grid.propagate_from(event.coord) {
            Err(contradiction) => {
                debug!("{contradiction} after {} steps", self.steps);
                self.finish(EngineState::Contradiction);
            }
            Ok(_) if self.grid.is_fully_collapsed() => self.finish(EngineState::Complete),
            Ok(_) => {}
        }
        self.state.outcome()
    }

    fn finish(&mut self, state: EngineState) {
        if state == EngineState::Complete {
            debug!("grid complete after {} steps", self.steps);
        }
        self.state = state;
    }

    /// Step once and draw the current state onto a surface
    ///
    /// Returns `true` exactly when this call ended the run, whether by
    /// completing the grid or by hitting a contradiction. The surface is
    /// drawn on every call.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S, width: u32, height: u32) -> bool {
        let was_running = self.state == EngineState::Running;
        let outcome = self.step();
        self.draw(surface, width, height);
        was_running && outcome.is_done()
    }

    /// Start a fresh run on the same model
    ///
    /// Every cell gets the full catalog back. The random stream continues
    /// from where it stopped, so a run that hit a contradiction is not
    /// replayed. Safe to call at any point between steps.
    pub fn reset(&mut self) {
        self.grid.initialize();
        self.unsettled = self.grid.settle().err();
        self.state = EngineState::Running;
        self.steps = 0;
        self.last_collapse = None;
        debug!("engine reset");
    }

    /// Restart the random stream from `seed`, then reset
    ///
    /// Reseeding with the construction seed replays the first run exactly.
    pub fn reseed(&mut self, seed: u32) {
        self.config.seed = seed;
        self.grid.reseed(seed);
        self.reset();
    }

    /// Paint the grid onto a surface of the given pixel size
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, width: u32, height: u32) {
        draw_grid(&self.grid, surface, width, height);
    }

    /// Render the grid with square cells of `cell_pixels` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the image would be too large (see [`render_grid`])
    pub fn render(&self, cell_pixels: u32) -> Result<RgbaImage> {
        render_grid(&self.grid, cell_pixels)
    }

    /// Current lifecycle state
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Output grid of the current run
    pub const fn grid(&self) -> &OutputGrid {
        &self.grid
    }

    /// Mutable output grid, for seeding constraints before stepping
    pub const fn grid_mut(&mut self) -> &mut OutputGrid {
        &mut self.grid
    }

    /// Shared catalog and rules
    pub const fn model(&self) -> &Arc<SynthesisModel> {
        self.grid.model()
    }

    /// Construction parameters
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Collapses performed since the last reset
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Most recent collapse of the current run
    pub const fn last_collapse(&self) -> Option<CollapseEvent> {
        self.last_collapse
    }
}
