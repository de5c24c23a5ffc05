//! Frame capture and GIF generation for watching a run unfold

use crate::io::configuration::{FINISHED_DELAY_MS, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SynthesisError, invalid_parameter};
use crate::io::image::ensure_parent_dir;
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Captures rendered frames of the output grid
///
/// The driver records one frame per tick; only the attempt that finishes is
/// worth animating, so frames are cleared on every reset.
#[derive(Debug, Default)]
pub struct VisualizationCapture {
    frames: Vec<RgbaImage>,
    restarts: usize,
}

impl VisualizationCapture {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendered frame
    pub fn record_frame(&mut self, frame: RgbaImage) {
        self.frames.push(frame);
    }

    /// Drop captured frames when the engine starts over
    pub fn restart(&mut self) {
        self.frames.clear();
        self.restarts += 1;
    }

    /// Number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Resets seen since capture began
    pub const fn restarts(&self) -> usize {
        self.restarts
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// Delays below what viewers honour are raised to
    /// [`VIEWER_MIN_FRAME_DELAY_MS`] and the frames in between are dropped,
    /// so playback keeps its apparent speed. The last frame is held for
    /// [`FINISHED_DELAY_MS`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured or `frame_delay_ms` is zero
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif<P: AsRef<Path>>(&self, output_path: P, frame_delay_ms: u32) -> Result<()> {
        let output_path = output_path.as_ref();
        if self.frames.is_empty() {
            return Err(invalid_parameter("frames", &0, &"no frames captured"));
        }
        if frame_delay_ms == 0 {
            return Err(invalid_parameter("frame_delay_ms", &0, &"must be positive"));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms).max(1) as usize;

        let frames = self.select_frames(effective_delay_ms, skip_factor);

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| SynthesisError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SynthesisError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }

    fn select_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        let last_index = self.frames.len().saturating_sub(1);

        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .enumerate()
            .filter(|(index, _)| index % skip_factor == 0 || *index == last_index)
            .map(|(_, image)| Frame::from_parts(image.clone(), 0, 0, delay))
            .collect();

        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                last.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(FINISHED_DELAY_MS, 1),
            ));
        }
        frames
    }
}
