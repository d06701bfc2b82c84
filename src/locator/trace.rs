//! Rectangle tracing from a seed pixel
//!
//! A single-axis flood, not a connected-component search: from a seed
//! believed to sit on a border segment, walk the row for the horizontal
//! extent and a column for the vertical extent, then validate the resulting
//! rectangle. Cheap enough to run on every sampled color hit.

use crate::config::{DetectionConfig, EDGE_PASS_RATIO, EDGE_SAMPLE_COUNT};
use crate::frame::PixelSource;
use crate::geometry::Rect;

use super::color::is_border_color;

/// Trace the rectangle whose border the seed pixel lies on
///
/// The seed must itself match the border color. Horizontal extent comes from
/// walking the seed's row in both directions; vertical extent from walking
/// the column at the discovered left end; the horizontal extent is then
/// re-walked along the discovered top row. On an intact border this recovers
/// the full rectangle from a seed on any of the four segments: the column
/// walk lands on a vertical edge and spans the height, the top-row walk
/// spans the width.
///
/// Out-of-bounds reads end a walk in that direction. Returns None unless the
/// rectangle passes both the size/aspect check and the border-continuity
/// check.
pub fn trace_rectangle(
    frame: &dyn PixelSource,
    seed_x: u32,
    seed_y: u32,
    config: &DetectionConfig,
) -> Option<Rect> {
    let hit = |x: u32, y: u32| -> bool {
        frame
            .pixel(x, y)
            .map(|p| is_border_color(p, &config.palette, config.tolerance))
            .unwrap_or(false)
    };

    if !hit(seed_x, seed_y) {
        return None;
    }

    let (mut left, _right) = walk_row(&hit, seed_x, seed_y);
    let (top, bottom) = walk_column(&hit, left, seed_y);
    // Refine along the top edge; for a bottom-segment seed this follows the
    // top border found by the column walk
    let (l2, right) = walk_row(&hit, left, top);
    left = left.min(l2);

    let rect = Rect::new(left, top, right - left + 1, bottom - top + 1);

    if !config.size_ok(&rect) {
        return None;
    }
    if !border_intact(&hit, &rect) {
        return None;
    }
    Some(rect)
}

/// Walk left and right along a row while pixels keep matching
fn walk_row(hit: &dyn Fn(u32, u32) -> bool, x: u32, y: u32) -> (u32, u32) {
    let mut left = x;
    while left > 0 && hit(left - 1, y) {
        left -= 1;
    }
    let mut right = x;
    while right < u32::MAX && hit(right + 1, y) {
        right += 1;
    }
    (left, right)
}

/// Walk up and down along a column while pixels keep matching
fn walk_column(hit: &dyn Fn(u32, u32) -> bool, x: u32, y: u32) -> (u32, u32) {
    let mut top = y;
    while top > 0 && hit(x, top - 1) {
        top -= 1;
    }
    let mut bottom = y;
    while bottom < u32::MAX && hit(x, bottom + 1) {
        bottom += 1;
    }
    (top, bottom)
}

/// Border continuity check
///
/// Samples evenly spaced points along each of the four edges and requires at
/// least half of each edge's samples to match. Edges shorter than the sample
/// count are skipped.
fn border_intact(hit: &dyn Fn(u32, u32) -> bool, rect: &Rect) -> bool {
    let x1 = rect.x + rect.width - 1;
    let y1 = rect.y + rect.height - 1;

    edge_ok(hit, rect.width, |i| (rect.x + i, rect.y))
        && edge_ok(hit, rect.width, |i| (rect.x + i, y1))
        && edge_ok(hit, rect.height, |i| (rect.x, rect.y + i))
        && edge_ok(hit, rect.height, |i| (x1, rect.y + i))
}

fn edge_ok(
    hit: &dyn Fn(u32, u32) -> bool,
    edge_len: u32,
    point_at: impl Fn(u32) -> (u32, u32),
) -> bool {
    if edge_len < EDGE_SAMPLE_COUNT {
        return true;
    }
    let mut matched = 0u32;
    for i in 0..EDGE_SAMPLE_COUNT {
        // Interpolate in u64; i * (edge_len - 1) can overflow u32 on edges
        // near the u32 limit
        let offset = (i as u64 * (edge_len as u64 - 1) / (EDGE_SAMPLE_COUNT as u64 - 1)) as u32;
        let (x, y) = point_at(offset);
        if hit(x, y) {
            matched += 1;
        }
    }
    matched as f64 >= EDGE_SAMPLE_COUNT as f64 * EDGE_PASS_RATIO
}
