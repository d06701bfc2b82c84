//! Dialogue playback pipeline
//!
//! Connects the locator to its collaborators: a frame source (screen
//! capture), an OCR engine, the dialogue/voice-line catalog and an audio
//! sink. All four are trait seams; this crate ships no capture, OCR or
//! playback backends of its own.

pub mod runner;

pub use runner::{DialogueWatcher, WatcherState};

use crate::frame::OwnedFrame;
use crate::geometry::Rect;
use image::RgbImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by pipeline collaborators
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("capture failed: {0}")]
    Capture(String),
    #[error("ocr failed: {0}")]
    Ocr(String),
    #[error("playback failed: {0}")]
    Playback(String),
    #[error("watcher already running")]
    AlreadyRunning,
}

/// Produces frames from a capture target
pub trait FrameSource: Send {
    /// Capture one frame
    fn capture(&mut self) -> Result<OwnedFrame, PipelineError>;
}

/// Extracts text from a cropped textbox image
pub trait TextExtractor: Send {
    fn extract_text(&mut self, region: &RgbImage) -> Result<String, PipelineError>;
}

/// A voice line resolved from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceLine {
    pub speaker: String,
    pub audio_path: PathBuf,
}

/// Maps normalized dialogue text to voice lines
pub trait DialogueCatalog: Send {
    fn lookup(&self, normalized_text: &str) -> Option<VoiceLine>;
}

/// Plays resolved audio files
pub trait AudioSink: Send {
    fn play(&mut self, path: &Path) -> Result<(), PipelineError>;
}

/// Event emitted when a dialogue line is recognized and resolved
#[derive(Debug, Clone)]
pub struct DialogueEvent {
    /// Normalized recognized text
    pub text: String,
    /// Speaker from the catalog
    pub speaker: String,
    /// Audio file that was handed to the sink
    pub audio_path: PathBuf,
    /// Where the textbox was found in the frame
    pub region: Rect,
}

/// Normalize recognized text before catalog lookup
///
/// OCR output is noisy around casing, spacing and stray punctuation; catalog
/// keys are stored in this same normalized form. Lowercases, strips
/// everything except letters, digits and spaces, and collapses whitespace
/// runs.
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else if ch.is_whitespace() {
            pending_space = true;
        }
        // Punctuation drops out entirely
    }
    out
}
