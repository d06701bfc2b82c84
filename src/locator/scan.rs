//! Region scanning
//!
//! Samples a bounded area of the frame on a stride grid, traces every color
//! hit, deduplicates overlapping candidates and picks the best one. Both
//! scan modes (targeted full scan, cache-proximity scan) run through here
//! with different region sources.

use crate::config::{
    DetectionConfig, DUPLICATE_OVERLAP_RATIO, MIN_SCAN_STRIDE, SCAN_STRIDE_DIVISOR,
};
use crate::frame::PixelSource;
use crate::geometry::Rect;

use super::color::is_border_color;
use super::trace::trace_rectangle;

/// Scan a region of the frame for a dialogue box border
///
/// The region is intersected with the frame bounds first; an empty
/// intersection is an immediate miss. Candidates overlapping an earlier one
/// at [`DUPLICATE_OVERLAP_RATIO`] or more of the smaller area are dropped as
/// duplicates. Of the survivors the largest area wins, first found on ties.
pub fn scan_region(
    frame: &dyn PixelSource,
    region: Rect,
    config: &DetectionConfig,
) -> Option<Rect> {
    let bounds = Rect::new(0, 0, frame.width(), frame.height());
    let region = region.intersect(&bounds)?;

    let stride = scan_stride(&region);
    log::trace!(
        "scanning {}x{} region at ({}, {}) with stride {}",
        region.width,
        region.height,
        region.x,
        region.y,
        stride
    );

    let mut candidates: Vec<Rect> = Vec::new();

    let mut y = region.y;
    while y < region.bottom() {
        let mut x = region.x;
        while x < region.right() {
            let matched = frame
                .pixel(x, y)
                .map(|p| is_border_color(p, &config.palette, config.tolerance))
                .unwrap_or(false);

            if matched {
                if let Some(rect) = trace_rectangle(frame, x, y, config) {
                    let duplicate = candidates
                        .iter()
                        .any(|c| c.overlap_ratio(&rect) >= DUPLICATE_OVERLAP_RATIO);
                    if !duplicate {
                        candidates.push(rect);
                    }
                }
            }
            x += stride;
        }
        y += stride;
    }

    // Stable sort with area as the sole key keeps scan order among ties
    candidates.sort_by_key(|r| std::cmp::Reverse(r.area()));
    candidates.into_iter().next()
}

/// Sampling stride for a region: proportional to its longest side with a
/// fixed floor, bounding pixel reads on large regions
fn scan_stride(region: &Rect) -> u32 {
    (region.width.max(region.height) / SCAN_STRIDE_DIVISOR).max(MIN_SCAN_STRIDE)
}
