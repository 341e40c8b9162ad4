//! Conversions between pixel frames and the normalized square `[-1, 1] x [-1, 1]`

use geo::Coord;

/// Width in pixels of the Robinson reference outline
///
/// The source artwork was authored at this native resolution. It is part of the
/// input contract, not a general default for other frames.
pub const SOURCE_FRAME_WIDTH: f64 = 2760.0;

/// Height in pixels of the Robinson reference outline
pub const SOURCE_FRAME_HEIGHT: f64 = 1398.3;

/// Map frame pixel coordinates to the normalized square
///
/// # Arguments
/// * `point` - Pixel coordinates inside the frame
/// * `width` - Frame width in pixels
/// * `height` - Frame height in pixels
#[inline(always)]
pub fn normalize(point: Coord<f64>, width: f64, height: f64) -> Coord<f64> {
    Coord {
        x: (point.x / width) * 2.0 - 1.0,
        y: (point.y / height) * 2.0 - 1.0,
    }
}

/// Map a normalized point back to pixel coordinates of a `width` x `height` frame
#[inline(always)]
pub fn denormalize(point: Coord<f64>, width: f64, height: f64) -> Coord<f64> {
    Coord {
        x: (point.x + 1.0) * (width / 2.0),
        y: (point.y + 1.0) * (height / 2.0),
    }
}

/// Normalize a point of the Robinson reference outline
#[inline(always)]
pub fn normalize_source(point: Coord<f64>) -> Coord<f64> {
    normalize(point, SOURCE_FRAME_WIDTH, SOURCE_FRAME_HEIGHT)
}
