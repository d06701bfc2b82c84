//! Integer rectangle type used throughout the locator
//!
//! Rectangles are plain values in pixel-buffer coordinates; equality and
//! overlap comparisons are by geometry only.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column to the right of the rectangle
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// First row below the rectangle
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Area in pixels
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersection with another rectangle, or None when disjoint
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Overlap ratio: intersection area divided by the smaller rectangle's area
    ///
    /// Returns 0.0 for disjoint rectangles. Used to decide whether two traced
    /// candidates are duplicates of the same on-screen box.
    pub fn overlap_ratio(&self, other: &Rect) -> f64 {
        let overlap = match self.intersect(other) {
            Some(i) => i.area(),
            None => return 0.0,
        };
        let smaller = self.area().min(other.area());
        if smaller == 0 {
            return 0.0;
        }
        overlap as f64 / smaller as f64
    }

    /// Expand uniformly by `margin` pixels on each side, saturating at the origin
    ///
    /// The result is not clamped on the far side; callers intersect with the
    /// frame bounds before scanning.
    pub fn expand(&self, margin: u32) -> Rect {
        let x = self.x.saturating_sub(margin);
        let y = self.y.saturating_sub(margin);
        // Growth on the near side may be cut short by the origin
        let grow_left = self.x - x;
        let grow_top = self.y - y;
        Rect::new(
            x,
            y,
            self.width.saturating_add(grow_left).saturating_add(margin),
            self.height.saturating_add(grow_top).saturating_add(margin),
        )
    }
}
