//! Command-line driver that runs the engine frame by frame

use crate::algorithm::executor::{Engine, EngineConfig, EngineState};
use crate::analysis::Exemplar;
use crate::io::configuration::{
    DEFAULT_CELL_PIXELS, DEFAULT_EXEMPLAR, DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED,
    DEFAULT_STEPS_PER_FRAME, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX, PATTERN_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::exemplars::{is_bundled, load_bundled};
use crate::io::image::export_png;
use crate::io::logging::{ProgressLogger, level_for};
use crate::io::progress::SynthesisProgress;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use image::RgbaImage;
use log::{LevelFilter, info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Synthesize textures with overlapping wave function collapse"
)]
/// Command-line arguments for the synthesis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Bundled exemplar name (flowers, bricks, maze, lake) or path to a PNG
    #[arg(short, long, default_value = DEFAULT_EXEMPLAR)]
    pub exemplar: String,

    /// Output width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Output height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Side length of one rendered cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Disable rotated and mirrored pattern variants
    #[arg(long)]
    pub no_rotate: bool,

    /// Side length of extracted patterns
    #[arg(short = 'n', long, default_value_t = PATTERN_SIZE)]
    pub pattern_size: usize,

    /// Engine steps per rendered frame
    #[arg(long, default_value_t = DEFAULT_STEPS_PER_FRAME)]
    pub steps_per_frame: usize,

    /// Attempts before giving up on contradictions
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Output PNG path (defaults to <exemplar>_wfc.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write an animated GIF of the final attempt
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every reset and terminal step
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the flags
    pub const fn log_level(&self) -> LevelFilter {
        level_for(self.quiet, self.verbose)
    }

    /// Engine parameters selected by the flags
    pub const fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.width, self.height, self.seed)
            .with_symmetry(!self.no_rotate)
            .with_pattern_size(self.pattern_size)
    }

    /// Load the exemplar named by `--exemplar`
    ///
    /// Bundled names win over files of the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is neither a bundled name nor a
    /// readable image file
    pub fn load_exemplar(&self) -> Result<Exemplar> {
        let path = Path::new(&self.exemplar);
        if !is_bundled(&self.exemplar) && path.is_file() {
            Exemplar::from_png_file(path)
        } else {
            load_bundled(&self.exemplar)
        }
    }

    /// Where the final PNG is written
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let path = Path::new(&self.exemplar);
        let stem = path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        match path.parent() {
            Some(parent) if !is_bundled(&self.exemplar) => parent.join(output_name),
            _ => PathBuf::from(output_name),
        }
    }

    /// Where the animated GIF is written, next to the PNG
    pub fn visualization_path(&self) -> PathBuf {
        let output_path = self.output_path();
        let stem = output_path.file_stem().unwrap_or_default();
        let viz_name = format!("{}_visualization.gif", stem.to_string_lossy());

        if let Some(parent) = output_path.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}

/// Outcome of a driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Attempts started, including the last one
    pub attempts: usize,
    /// Whether the last attempt completed without contradiction
    pub completed: bool,
    /// Collapses performed in the last attempt
    pub steps: usize,
    /// PNG written
    pub output: PathBuf,
    /// GIF written, if requested
    pub visualization: Option<PathBuf>,
}

/// Runs the engine until it completes or runs out of attempts
///
/// Each frame advances the engine by `--steps-per-frame` steps and redraws
/// the frame buffer. A contradiction resets the engine with the random stream
/// continuing, so every attempt explores a different search.
pub struct Synthesizer {
    cli: Cli,
    engine: Engine,
    frame: RgbaImage,
    progress: SynthesisProgress,
    capture: Option<VisualizationCapture>,
    logger: Option<&'static ProgressLogger>,
}

impl Synthesizer {
    /// Load the exemplar and build the engine
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `--steps-per-frame`, `--max-attempts` or `--cell-pixels` is zero
    /// - The rendered frame would be too large
    /// - The exemplar cannot be loaded
    /// - Engine construction fails
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.steps_per_frame == 0 {
            return Err(invalid_parameter("steps_per_frame", &0, &"must be positive"));
        }
        if cli.max_attempts == 0 {
            return Err(invalid_parameter("max_attempts", &0, &"must be positive"));
        }
        if cli.cell_pixels == 0 {
            return Err(invalid_parameter("cell_pixels", &0, &"must be positive"));
        }

        let exemplar = cli.load_exemplar()?;
        let engine = Engine::from_exemplar(cli.engine_config(), &exemplar)?;
        let frame = engine.render(cli.cell_pixels)?;
        let progress = SynthesisProgress::new(
            engine.grid().topology().cell_count(),
            cli.max_attempts,
            cli.should_show_progress(),
        );
        let capture = cli.visualize.then(VisualizationCapture::new);

        Ok(Self {
            cli,
            engine,
            frame,
            progress,
            capture,
            logger: None,
        })
    }

    /// Print log lines around the progress bar while running
    #[must_use]
    pub const fn with_logger(mut self, logger: &'static ProgressLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Run to completion and write the outputs
    ///
    /// Giving up after `--max-attempts` contradictions is not an error: the
    /// last frame is written anyway, with contradicted cells marked.
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG or GIF cannot be written
    pub fn run(&mut self) -> Result<RunSummary> {
        if let Some(logger) = self.logger {
            logger.attach(self.progress.bar().clone());
        }

        let mut attempts = 1;
        let completed = loop {
            let ended = self.advance_frame();
            self.progress.update(self.engine.grid().collapsed_count());
            if let Some(capture) = self.capture.as_mut() {
                capture.record_frame(self.frame.clone());
            }
            if !ended {
                continue;
            }

            if self.engine.state() == EngineState::Complete {
                break true;
            }
            self.progress.contradiction();
            if attempts >= self.cli.max_attempts {
                warn!("giving up after {attempts} attempts");
                break false;
            }
            attempts += 1;
            self.engine.reset();
            self.progress.start_attempt(attempts);
            if let Some(capture) = self.capture.as_mut() {
                capture.restart();
            }
        };

        if completed {
            self.progress.finish("done");
        } else {
            self.progress.finish("failed");
        }
        let summary = self.write_outputs(attempts, completed);
        self.progress.clear();
        if let Some(logger) = self.logger {
            logger.detach();
        }
        summary
    }

    // Runs at most `steps_per_frame` steps; only the last one draws unless the
    // run ends early. Returns whether the run ended during this frame.
    fn advance_frame(&mut self) -> bool {
        let (width, height) = self.frame.dimensions();
        for _ in 1..self.cli.steps_per_frame {
            if self.engine.step().is_done() {
                self.engine.draw(&mut self.frame, width, height);
                return true;
            }
        }
        self.engine.tick(&mut self.frame, width, height)
    }

    fn write_outputs(&self, attempts: usize, completed: bool) -> Result<RunSummary> {
        let output = self.cli.output_path();
        export_png(&self.frame, &output)?;
        info!("wrote {}", output.display());

        let visualization = match &self.capture {
            Some(capture) => {
                let path = self.cli.visualization_path();
                capture.export_gif(&path, GIF_FRAME_DELAY_MS)?;
                info!("wrote {} ({} frames)", path.display(), capture.frame_count());
                Some(path)
            }
            None => None,
        };

        Ok(RunSummary {
            attempts,
            completed,
            steps: self.engine.steps(),
            output,
            visualization,
        })
    }

    /// The engine being driven
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current frame buffer
    pub const fn frame(&self) -> &RgbaImage {
        &self.frame
    }
}
