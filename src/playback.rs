//! Frame-by-frame driving of the pipeline for video-like sources.
//!
//! The core holds no timer or thread. [`run_frames`] plays the role of the
//! external scheduler: it pulls a frame, processes it, hands the surface to a
//! sink and repeats until the source reports the end. Stopping is simply not
//! pulling another frame.
use crate::image::io::{load_rgba_image, save_png};
use crate::image::PixelBuffer;
use crate::pipeline::{FrameProcessor, HalftoneFrame};
use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplier of decoded RGBA frames. `Ok(None)` ends playback.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<PixelBuffer>, String>;
}

/// Consumer of rendered frames.
pub trait FrameSink {
    fn accept(&mut self, index: usize, frame: &HalftoneFrame) -> Result<(), String>;
}

/// Counters reported when playback stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSummary {
    pub frames_read: usize,
    pub frames_rendered: usize,
    pub frames_rejected: usize,
}

/// Play `source` through `processor` into `sink` until the source ends or
/// `max_frames` frames have been read.
///
/// A frame rejected by the pipeline is skipped (the sink keeps whatever it
/// last received); source and sink errors abort playback.
pub fn run_frames<S, K>(
    processor: &mut FrameProcessor,
    source: &mut S,
    sink: &mut K,
    max_frames: Option<usize>,
) -> Result<PlaybackSummary, String>
where
    S: FrameSource + ?Sized,
    K: FrameSink + ?Sized,
{
    let mut rng = rand::rng();
    run_frames_with_rng(processor, source, sink, max_frames, &mut rng)
}

pub fn run_frames_with_rng<S, K, R>(
    processor: &mut FrameProcessor,
    source: &mut S,
    sink: &mut K,
    max_frames: Option<usize>,
    rng: &mut R,
) -> Result<PlaybackSummary, String>
where
    S: FrameSource + ?Sized,
    K: FrameSink + ?Sized,
    R: Rng,
{
    let mut summary = PlaybackSummary::default();
    while max_frames.map_or(true, |max| summary.frames_read < max) {
        let Some(buffer) = source.next_frame()? else {
            debug!("run_frames: source ended after {} frames", summary.frames_read);
            break;
        };
        let index = summary.frames_read;
        summary.frames_read += 1;
        match processor.process_with_rng(&buffer, rng) {
            Ok(frame) => {
                sink.accept(index, frame)?;
                summary.frames_rendered += 1;
            }
            Err(err) => {
                warn!("run_frames: skipping frame {index}: {err}");
                summary.frames_rejected += 1;
            }
        }
    }
    info!(
        "run_frames: read={} rendered={} rejected={}",
        summary.frames_read, summary.frames_rendered, summary.frames_rejected
    );
    Ok(summary)
}

/// Frames decoded from the image files of a directory, in file-name order.
pub struct ImageSequence {
    paths: std::vec::IntoIter<PathBuf>,
}

impl ImageSequence {
    const EXTENSIONS: [&'static str; 3] = ["png", "jpg", "jpeg"];

    pub fn open(dir: &Path) -> Result<Self, String> {
        let entries = fs::read_dir(dir)
            .map_err(|e| format!("Failed to read frame dir {}: {e}", dir.display()))?;
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| format!("Failed to read frame dir {}: {e}", dir.display()))?
                .path();
            let is_frame = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    Self::EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                });
            if is_frame {
                paths.push(path);
            }
        }
        paths.sort();
        debug!("ImageSequence: {} frames in {}", paths.len(), dir.display());
        Ok(Self {
            paths: paths.into_iter(),
        })
    }

    pub fn remaining(&self) -> usize {
        self.paths.len()
    }
}

impl FrameSource for ImageSequence {
    fn next_frame(&mut self) -> Result<Option<PixelBuffer>, String> {
        self.paths
            .next()
            .map(|path| load_rgba_image(&path))
            .transpose()
    }
}

/// Writes each rendered surface as `<prefix>_<index>.png` into a directory.
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}_{index:05}.png", self.prefix))
    }
}

impl FrameSink for PngSequenceSink {
    fn accept(&mut self, index: usize, frame: &HalftoneFrame) -> Result<(), String> {
        save_png(&frame.surface, &self.frame_path(index))
    }
}

/// Collects rendered surfaces in memory.
impl FrameSink for Vec<PixelBuffer> {
    fn accept(&mut self, _index: usize, frame: &HalftoneFrame) -> Result<(), String> {
        self.push(frame.surface.clone());
        Ok(())
    }
}

/// Any iterator of buffers is a frame source.
pub struct IterSource<I>(pub I);

impl<I: Iterator<Item = PixelBuffer>> FrameSource for IterSource<I> {
    fn next_frame(&mut self) -> Result<Option<PixelBuffer>, String> {
        Ok(self.0.next())
    }
}
