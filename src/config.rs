//! Detection configuration
//!
//! Per-game parameters for the textbox locator, normally loaded as part of a
//! game profile. All fields are plain data; the locator treats the config as
//! immutable after construction. Degenerate values (for example a zero-area
//! search region) never error, they simply produce scans that cannot hit.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

// Empirically tuned scan constants. These came out of hand-tuning against
// real captures; treat them as part of the detection behavior, not knobs.

/// Two candidates overlapping at least this share of the smaller one's area
/// are considered the same box.
pub const DUPLICATE_OVERLAP_RATIO: f64 = 0.7;

/// Points sampled along each edge when validating border continuity.
pub const EDGE_SAMPLE_COUNT: u32 = 20;

/// Share of edge samples that must match the border color.
pub const EDGE_PASS_RATIO: f64 = 0.5;

/// Pixels added on each side of the configured search area for a full scan,
/// so boxes sitting right on the region boundary still trace completely.
pub const FULL_SCAN_PADDING: u32 = 20;

/// Smallest sampling stride the scanner will use.
pub const MIN_SCAN_STRIDE: u32 = 4;

/// The stride grows with the region so the grid stays near this many samples
/// per axis on large regions.
pub const SCAN_STRIDE_DIVISOR: u32 = 128;

/// Search region expressed as percentages (0-100) of the frame dimensions
///
/// Resolved against the actual frame size on every call, so one profile works
/// across capture resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchArea {
    pub x_pct: f32,
    pub y_pct: f32,
    pub width_pct: f32,
    pub height_pct: f32,
}

impl SearchArea {
    /// The whole frame
    pub fn full() -> Self {
        Self {
            x_pct: 0.0,
            y_pct: 0.0,
            width_pct: 100.0,
            height_pct: 100.0,
        }
    }

    /// Resolve to pixel coordinates against a frame of the given size
    ///
    /// The result may be empty or extend past the frame; the scanner
    /// intersects with the frame bounds before sampling.
    pub fn resolve(&self, frame_width: u32, frame_height: u32) -> Rect {
        let x = pct_of(self.x_pct, frame_width);
        let y = pct_of(self.y_pct, frame_height);
        let width = pct_of(self.width_pct, frame_width);
        let height = pct_of(self.height_pct, frame_height);
        Rect::new(x, y, width, height)
    }
}

impl Default for SearchArea {
    fn default() -> Self {
        Self::full()
    }
}

fn pct_of(pct: f32, total: u32) -> u32 {
    let pct = pct.clamp(0.0, 100.0);
    (total as f64 * pct as f64 / 100.0).round() as u32
}

/// Static detection parameters for one game's dialogue box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Region of the frame the full scan is restricted to
    #[serde(default)]
    pub search_area: SearchArea,

    /// Reference RGB colors treated as the box border
    pub palette: Vec<[u8; 3]>,

    /// Per-channel absolute difference allowed against every palette color
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,

    /// Traced rectangles outside these bounds are rejected
    #[serde(default = "default_min_width")]
    pub min_width: u32,
    #[serde(default = "default_min_height")]
    pub min_height: u32,
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    #[serde(default = "default_max_height")]
    pub max_height: u32,

    /// Reject rectangles where height >= width
    #[serde(default = "default_require_landscape")]
    pub require_landscape: bool,

    /// Pixels added on each side when proximity-scanning around the cached box
    #[serde(default = "default_cache_margin")]
    pub cache_margin: u32,

    /// Consecutive proximity-scan misses at which the cached box is evicted
    #[serde(default = "default_max_failures")]
    pub max_consecutive_failures: u32,
}

fn default_tolerance() -> u8 {
    30
}

fn default_min_width() -> u32 {
    200
}

fn default_min_height() -> u32 {
    80
}

fn default_max_width() -> u32 {
    4096
}

fn default_max_height() -> u32 {
    2160
}

fn default_require_landscape() -> bool {
    true
}

fn default_cache_margin() -> u32 {
    40
}

fn default_max_failures() -> u32 {
    3
}

impl DetectionConfig {
    /// Create a config for the given palette with default bounds
    pub fn new(palette: Vec<[u8; 3]>) -> Self {
        Self {
            search_area: SearchArea::default(),
            palette,
            tolerance: default_tolerance(),
            min_width: default_min_width(),
            min_height: default_min_height(),
            max_width: default_max_width(),
            max_height: default_max_height(),
            require_landscape: default_require_landscape(),
            cache_margin: default_cache_margin(),
            max_consecutive_failures: default_max_failures(),
        }
    }

    /// Check a traced rectangle against the size and aspect constraints
    pub fn size_ok(&self, rect: &Rect) -> bool {
        if rect.width < self.min_width || rect.width > self.max_width {
            return false;
        }
        if rect.height < self.min_height || rect.height > self.max_height {
            return false;
        }
        if self.require_landscape && rect.height >= rect.width {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_toml_defaults() {
        let config: DetectionConfig = toml::from_str(
            r#"
            palette = [[66, 66, 231]]
        "#,
        )
        .unwrap();

        assert_eq!(config.palette, vec![[66, 66, 231]]);
        assert_eq!(config.tolerance, 30);
        assert_eq!(config.min_width, 200);
        assert!(config.require_landscape);
        assert_eq!(config.cache_margin, 40);
        assert_eq!(config.max_consecutive_failures, 3);
        assert_eq!(config.search_area, SearchArea::full());
    }

    #[test]
    fn test_config_toml_full() {
        let config: DetectionConfig = toml::from_str(
            r#"
            palette = [[66, 66, 231], [40, 40, 200]]
            tolerance = 12
            min_width = 300
            max_width = 1500
            require_landscape = false
            cache_margin = 25
            max_consecutive_failures = 5

            [search_area]
            x_pct = 10.0
            y_pct = 60.0
            width_pct = 80.0
            height_pct = 35.0
        "#,
        )
        .unwrap();

        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.tolerance, 12);
        assert_eq!(config.min_width, 300);
        assert!(!config.require_landscape);
        assert_eq!(config.search_area.y_pct, 60.0);
    }

    #[test]
    fn test_search_area_resolve() {
        let area = SearchArea {
            x_pct: 10.0,
            y_pct: 50.0,
            width_pct: 80.0,
            height_pct: 40.0,
        };
        let rect = area.resolve(1920, 1080);
        assert_eq!(rect, Rect::new(192, 540, 1536, 432));
    }

    #[test]
    fn test_search_area_resolve_depends_on_frame() {
        let area = SearchArea::full();
        assert_eq!(area.resolve(1280, 720), Rect::new(0, 0, 1280, 720));
        assert_eq!(area.resolve(1920, 1080), Rect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn test_degenerate_search_area_is_empty() {
        let area = SearchArea {
            x_pct: 50.0,
            y_pct: 50.0,
            width_pct: 0.0,
            height_pct: 0.0,
        };
        assert!(area.resolve(1920, 1080).is_empty());
    }

    #[test]
    fn test_search_area_clamps_percentages() {
        let area = SearchArea {
            x_pct: -20.0,
            y_pct: 0.0,
            width_pct: 250.0,
            height_pct: 100.0,
        };
        let rect = area.resolve(100, 100);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.width, 100);
    }

    #[test]
    fn test_size_ok() {
        let config = DetectionConfig::new(vec![[66, 66, 231]]);

        assert!(config.size_ok(&Rect::new(0, 0, 700, 300)));
        // Below minimum width
        assert!(!config.size_ok(&Rect::new(0, 0, 150, 300)));
        // Portrait rejected when landscape required
        assert!(!config.size_ok(&Rect::new(0, 0, 300, 300)));
        assert!(!config.size_ok(&Rect::new(0, 0, 250, 400)));
    }

    #[test]
    fn test_size_ok_landscape_optional() {
        let mut config = DetectionConfig::new(vec![[66, 66, 231]]);
        config.require_landscape = false;
        config.min_width = 100;
        config.min_height = 100;

        assert!(config.size_ok(&Rect::new(0, 0, 200, 200)));
    }
}
