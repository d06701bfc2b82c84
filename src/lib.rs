//! GameWatcher textbox locator
//!
//! Finds a game's dialogue box in captured frames by recognizing its colored
//! border, so recognized dialogue can be matched to pre-generated voice
//! lines and played back. The locator runs many times per second against
//! full-resolution frames; a position cache keeps repeated detections on
//! near-static screens cheap.
//!
//! Detection parameters are per-game data ([`profiles`]), never inferred.
//! Screen capture, OCR, the voice-line catalog and audio playback are
//! collaborators behind the trait seams in [`pipeline`].

pub mod config;
pub mod frame;
pub mod geometry;
pub mod locator;
pub mod pipeline;
pub mod profiles;

// Re-export commonly used types
pub use config::{DetectionConfig, SearchArea};
pub use frame::{OwnedFrame, PixelSource, Rgb};
pub use geometry::Rect;
pub use locator::{ScanPath, TextboxLocator};
pub use pipeline::{DialogueEvent, DialogueWatcher, VoiceLine, WatcherState};
pub use profiles::{GameProfile, ProfileRegistry};
