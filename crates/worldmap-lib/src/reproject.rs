//! Point mapping from the Robinson reference frame to the output canvas

use crate::{Path, Projection, Result, RunConfig, frame, robinson};
use geo::Coord;

/// Paths with at least this many segments are remapped on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Maps points of the Robinson reference outline onto the output canvas
///
/// The mapping is chosen once from the [`RunConfig`]:
/// - Robinson output: normalize then denormalize, a pure rescale
/// - Equirectangular output: normalize, inverse Robinson, then denormalize
#[derive(Clone, Debug)]
pub struct Reprojector {
    config: RunConfig,
    out_width: f64,
    out_height: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Reprojector {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            out_width: f64::from(config.output.width),
            out_height: f64::from(config.output.height),
        }
    }

    /// Map a single point of the source frame to the output canvas
    #[inline]
    pub fn map_point(&self, point: Coord<f64>) -> Result<Coord<f64>> {
        let normalized = frame::normalize_source(point);
        let projected = match self.config.projection {
            Projection::Robinson => normalized,
            Projection::Equirectangular => robinson::unmap(normalized)?,
        };
        Ok(frame::denormalize(
            projected,
            self.out_width,
            self.out_height,
        ))
    }

    /// Remap every point of `path` onto the output canvas
    pub fn reproject(&self, path: &Path) -> Result<Path> {
        #[cfg(feature = "profiling")]
        profiling::scope!("reprojector::reproject");

        tracing::debug!(
            segments = path.len(),
            projection = %self.config.projection,
            output = %self.config.output,
            "Reprojecting path"
        );

        let out = if path.len() >= PARALLEL_THRESHOLD {
            path.try_transform_parallel(|p| self.map_point(p))?
        } else {
            path.try_transform(|p| self.map_point(p))?
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Some(bounds) = out.bounding_rect() {
                tracing::debug!(
                    "Reprojected bounds: ({:.2}, {:.2}) - ({:.2}, {:.2})",
                    bounds.min().x,
                    bounds.min().y,
                    bounds.max().x,
                    bounds.max().y
                );
            }
        }
        Ok(out)
    }
}
