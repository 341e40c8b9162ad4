//! Inverse Robinson mapping on the normalized square

use crate::{ProjectionTable, Result};
use geo::Coord;

/// Latitude of the pole, used to express latitude as a fraction of the vertical axis
pub const POLE_LATITUDE: f64 = 90.0;

/// Convert a Robinson point on the normalized square to its equirectangular equivalent
///
/// # Arguments
/// * `point` - Point in `[-1, 1] x [-1, 1]`, Robinson projected
///
/// # Returns
/// The equirectangular point: x divided by the parallel's length scale, y the
/// recovered latitude as a fraction of 90 degrees with the sign of the input.
#[inline]
pub fn unmap(point: Coord<f64>) -> Result<Coord<f64>> {
    let distance = point.y.abs().min(1.0);
    let hit = ProjectionTable::robinson().interpolate(distance)?;

    // No clamping on x
    let x = point.x / hit.length_scale;
    let y = if point.y < 0.0 {
        -hit.latitude / POLE_LATITUDE
    } else {
        hit.latitude / POLE_LATITUDE
    };

    Ok(Coord { x, y })
}
