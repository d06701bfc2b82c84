//! Dialogue textbox locator
//!
//! Finds the rectangular dialogue box in a captured game frame by its
//! colored border. The locator caches the last known position and scans the
//! cached neighborhood first; dialogue boxes sit still across consecutive
//! frames, so the cheap proximity scan handles the common case and a
//! targeted full scan only runs when the cache cannot be trusted.
//!
//! One locator instance per tracked surface. `detect` never fails: every
//! bounds or pixel-access problem is a local miss, and the caller's frame
//! loop continues unconditionally.
//!
//! # Example
//!
//! ```ignore
//! use gamewatcher_locator::{DetectionConfig, TextboxLocator};
//!
//! let config = DetectionConfig::new(vec![[66, 66, 231]]);
//! let mut locator = TextboxLocator::new(config);
//! if let Some(region) = locator.detect(&frame) {
//!     // crop `region` and hand it to OCR
//! }
//! ```

pub mod color;
pub mod scan;
pub mod trace;

pub use color::is_border_color;
pub use scan::scan_region;
pub use trace::trace_rectangle;

use crate::config::{DetectionConfig, FULL_SCAN_PADDING};
use crate::frame::PixelSource;
use crate::geometry::Rect;

/// Which scan strategy produced the last `detect` outcome
///
/// Instrumentation for tests and diagnostics; carries no detection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPath {
    /// Neighborhood of the cached rectangle
    Proximity,
    /// Targeted full scan of the configured search area
    Full,
}

/// Cache-aware textbox locator
///
/// Holds the last known rectangle and a consecutive-failure counter. Both
/// are private to the detection protocol and only mutated inside `detect`.
pub struct TextboxLocator {
    config: DetectionConfig,
    cached: Option<Rect>,
    failures: u32,
    last_path: Option<ScanPath>,
}

impl TextboxLocator {
    /// Create a locator with empty cache state
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            config,
            cached: None,
            failures: 0,
            last_path: None,
        }
    }

    /// The configuration this locator was built with
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Whether a cached rectangle is currently held
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Scan strategy that settled the most recent `detect` call
    pub fn last_scan_path(&self) -> Option<ScanPath> {
        self.last_path
    }

    /// Locate the dialogue box in a frame
    ///
    /// Runs to completion on the calling thread, reads the frame only for
    /// the duration of the call and always returns: a rectangle satisfying
    /// the configured size/aspect constraints, or `None`.
    pub fn detect(&mut self, frame: &dyn PixelSource) -> Option<Rect> {
        // Cheap path: rescan the cached neighborhood
        if let Some(cached) = self.cached {
            let region = cached.expand(self.config.cache_margin);
            if let Some(hit) = scan_region(frame, region, &self.config) {
                self.cached = Some(hit);
                self.failures = 0;
                self.last_path = Some(ScanPath::Proximity);
                return Some(hit);
            }

            self.failures += 1;
            log::trace!("proximity scan miss {} near {:?}", self.failures, cached);
            if self.failures >= self.config.max_consecutive_failures {
                log::debug!(
                    "evicting cached textbox {:?} after {} consecutive misses",
                    cached,
                    self.failures
                );
                self.cached = None;
                self.failures = 0;
            }
        }

        // Targeted full scan over the configured search area
        let region = self
            .config
            .search_area
            .resolve(frame.width(), frame.height())
            .expand(FULL_SCAN_PADDING);
        self.last_path = Some(ScanPath::Full);

        match scan_region(frame, region, &self.config) {
            Some(hit) => {
                log::debug!("textbox located at {:?} by full scan", hit);
                self.cached = Some(hit);
                self.failures = 0;
                Some(hit)
            }
            // A stale cache that survived the failure threshold stays put;
            // only the threshold evicts it
            None => None,
        }
    }
}
