//! Border color matching
//!
//! Pure predicates, no state. A pixel belongs to the border when it sits
//! within the per-channel tolerance of any palette color, or when it passes
//! the blue-dominance fallback that catches anti-aliased and
//! compression-smeared border pixels falling outside the explicit palette.

use crate::frame::Rgb;

/// Blue must exceed both red and green by at least this much for the
/// blue-dominance fallback.
pub const BLUE_DOMINANCE_MARGIN: i16 = 50;

/// Absolute floor the blue channel must clear for the fallback.
pub const BLUE_DOMINANCE_FLOOR: u8 = 120;

/// Check whether a pixel counts as a border pixel
///
/// Defined for every RGB triple; never errors.
pub fn is_border_color(pixel: Rgb, palette: &[[u8; 3]], tolerance: u8) -> bool {
    let t = tolerance as i16;
    for color in palette {
        let dr = (pixel.r as i16 - color[0] as i16).abs();
        let dg = (pixel.g as i16 - color[1] as i16).abs();
        let db = (pixel.b as i16 - color[2] as i16).abs();
        if dr <= t && dg <= t && db <= t {
            return true;
        }
    }
    is_blue_dominant(pixel)
}

/// Blue-dominance fallback for compressed border fringes
fn is_blue_dominant(pixel: Rgb) -> bool {
    pixel.b > BLUE_DOMINANCE_FLOOR
        && pixel.b as i16 - pixel.r as i16 >= BLUE_DOMINANCE_MARGIN
        && pixel.b as i16 - pixel.g as i16 >= BLUE_DOMINANCE_MARGIN
}
