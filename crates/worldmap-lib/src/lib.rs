//! World Map Library - Reprojection of Robinson World Outlines
//!
//! This library converts a vector outline of the Earth's landmass, authored in the
//! Robinson projection at a fixed reference resolution, into the same outline under
//! a different projection and output canvas size, ready to embed in an SVG document.
//!
//! # Architecture
//!
//! - **[`ProjectionTable`]**: Robinson calibration rows and piecewise-linear lookup
//! - **[`robinson`]**: Inverse Robinson mapping on the normalized square
//! - **[`frame`]**: Normalization between pixel frames and the normalized square
//! - **[`Reprojector`]**: Point mapping selected once per run from a [`RunConfig`]
//! - **[`Path`]** / **[`Segment`]**: Line and cubic primitives, remapped in place
//! - **[`path_data`]**: SVG path `d` attribute parsing and serialization
//! - **[`svg`]**: Minimal SVG document assembly
//!
//! # Example
//!
//! ```rust
//! use worldmap_lib::{Dimensions, Projection, Reprojector, RunConfig, path_data};
//!
//! # fn main() -> worldmap_lib::Result<()> {
//! let path = path_data::parse("M 0,0 L 2760,1398.3")?;
//! let config = RunConfig::new("1024x512".parse::<Dimensions>()?, Projection::Robinson);
//! let reprojected = Reprojector::new(config).reproject(&path)?;
//! assert_eq!(path_data::to_string(&reprojected, 3), "M 0,0 L 1024,512");
//! # Ok(())
//! # }
//! ```

mod config;
pub mod frame;
mod path;
pub mod path_data;
mod reproject;
pub mod robinson;
pub mod svg;
mod table;

// Public API exports
pub use config::{Dimensions, Projection, RunConfig};
pub use path::{CubicCurve, Path, Segment};
pub use reproject::{PARALLEL_THRESHOLD, Reprojector};
pub use table::{CalibrationRow, Interpolated, ProjectionTable};

/// Error types for the world map library
#[derive(Debug, thiserror::Error)]
pub enum WorldMapError {
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Path data error: {0}")]
    PathParse(String),

    #[error("Unsupported path primitive '{command}' in segment {index}")]
    UnsupportedPrimitive { command: char, index: usize },

    #[error("Internal consistency fault: {0}")]
    InternalConsistency(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorldMapError>;
