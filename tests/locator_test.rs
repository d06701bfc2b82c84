//! End-to-end locator scenarios on full-resolution synthetic frames.

mod common;

use common::{frame_with_box, init_logs};
use gamewatcher_locator::{DetectionConfig, OwnedFrame, Rect, ScanPath, TextboxLocator};

// Thick enough that the full-frame sampling grid (stride 15 at 1920px)
// cannot step over the border.
const THICKNESS: u32 = 16;

fn scenario_config() -> DetectionConfig {
    DetectionConfig::new(vec![[66, 66, 231]])
}

#[test]
fn detects_dialogue_box_on_full_hd_frame() {
    init_logs();

    // Solid dark-blue border from (400,100) to (1100,400), black background
    let target = Rect::new(400, 100, 700, 300);
    let frame = frame_with_box(1920, 1080, target, THICKNESS);

    let mut locator = TextboxLocator::new(scenario_config());
    let found = locator.detect(&frame).expect("dialogue box not found");

    assert_eq!(found, target);
    assert!(found.width >= 200 && found.height >= 80);
    assert!(found.width > found.height);
    assert!(locator.is_cached());
    assert_eq!(locator.last_scan_path(), Some(ScanPath::Full));
}

#[test]
fn repeated_detection_is_deterministic_from_empty_state() {
    init_logs();

    let target = Rect::new(400, 100, 700, 300);
    let frame = frame_with_box(1920, 1080, target, THICKNESS);

    let first = TextboxLocator::new(scenario_config()).detect(&frame);
    let second = TextboxLocator::new(scenario_config()).detect(&frame);
    let third = TextboxLocator::new(scenario_config()).detect(&frame);

    assert_eq!(first, Some(target));
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn unchanged_frame_is_resolved_by_the_proximity_path() {
    init_logs();

    let target = Rect::new(400, 100, 700, 300);
    let frame = frame_with_box(1920, 1080, target, THICKNESS);

    let mut locator = TextboxLocator::new(scenario_config());
    assert_eq!(locator.detect(&frame), Some(target));

    // Same buffer again: the cached neighborhood must settle it without the
    // full-frame path
    assert_eq!(locator.detect(&frame), Some(target));
    assert_eq!(locator.last_scan_path(), Some(ScanPath::Proximity));
}

#[test]
fn failure_threshold_evicts_and_full_scan_repopulates() {
    init_logs();

    let target = Rect::new(400, 100, 700, 300);
    let frame = frame_with_box(1920, 1080, target, THICKNESS);
    let empty = OwnedFrame::blank(1920, 1080);

    // Default threshold is 3 consecutive proximity misses
    let config = scenario_config();
    assert_eq!(config.max_consecutive_failures, 3);

    let mut locator = TextboxLocator::new(config);
    assert_eq!(locator.detect(&frame), Some(target));

    // Two misses: stale cache is still trusted
    assert_eq!(locator.detect(&empty), None);
    assert!(locator.is_cached());
    assert_eq!(locator.detect(&empty), None);
    assert!(locator.is_cached());

    // Third miss reaches the threshold; cache state resets to empty
    assert_eq!(locator.detect(&empty), None);
    assert!(!locator.is_cached());

    // A later full-scan hit repopulates the cache
    assert_eq!(locator.detect(&frame), Some(target));
    assert!(locator.is_cached());
    assert_eq!(locator.last_scan_path(), Some(ScanPath::Full));
}

#[test]
fn undersized_box_is_never_returned() {
    init_logs();

    let mut config = scenario_config();
    config.min_width = 200;

    // Border quality is perfect, width is 150: must be rejected
    let small = Rect::new(400, 100, 150, 90);
    let frame = frame_with_box(1920, 1080, small, 8);

    assert_eq!(TextboxLocator::new(config).detect(&frame), None);
}

#[test]
fn larger_of_two_separate_boxes_wins() {
    init_logs();

    let small = Rect::new(100, 100, 300, 150);
    let large = Rect::new(900, 500, 700, 300);
    let mut frame = frame_with_box(1920, 1080, small, THICKNESS);
    common::draw_border(&mut frame, large, THICKNESS);

    let mut locator = TextboxLocator::new(scenario_config());
    assert_eq!(locator.detect(&frame), Some(large));
}

#[test]
fn landscape_constraint_rejects_tall_boxes() {
    init_logs();

    // Tall portrait box with an intact border
    let portrait = Rect::new(700, 100, 300, 700);
    let frame = frame_with_box(1920, 1080, portrait, THICKNESS);

    assert_eq!(TextboxLocator::new(scenario_config()).detect(&frame), None);

    let mut permissive = scenario_config();
    permissive.require_landscape = false;
    assert_eq!(
        TextboxLocator::new(permissive).detect(&frame),
        Some(portrait)
    );
}
