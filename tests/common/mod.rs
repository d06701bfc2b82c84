//! Shared helpers for integration tests: synthetic frames with drawn
//! dialogue-box borders.

use gamewatcher_locator::{OwnedFrame, Rect, Rgb};

/// The dark-blue border color used across the test scenarios
pub const BORDER: Rgb = Rgb {
    r: 66,
    g: 66,
    b: 231,
};

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Draw a hollow rectangular border of the given thickness inside `rect`
pub fn draw_border(frame: &mut OwnedFrame, rect: Rect, thickness: u32) {
    for t in 0..thickness {
        let x1 = rect.x + rect.width - 1 - t;
        let y1 = rect.y + rect.height - 1 - t;
        for x in rect.x..rect.x + rect.width {
            frame.put_pixel(x, rect.y + t, BORDER);
            frame.put_pixel(x, y1, BORDER);
        }
        for y in rect.y..rect.y + rect.height {
            frame.put_pixel(rect.x + t, y, BORDER);
            frame.put_pixel(x1, y, BORDER);
        }
    }
}

/// A black frame with one bordered box drawn into it
pub fn frame_with_box(width: u32, height: u32, rect: Rect, thickness: u32) -> OwnedFrame {
    let mut frame = OwnedFrame::blank(width, height);
    draw_border(&mut frame, rect, thickness);
    frame
}
