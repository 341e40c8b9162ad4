//! Run configuration: output canvas size and target projection

use crate::WorldMapError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output projection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Projection {
    /// Keep the Robinson shape, only rescale to the output canvas
    Robinson,
    /// Undo the Robinson projection so latitude and longitude are linear
    Equirectangular,
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Robinson => f.write_str("robinson"),
            Projection::Equirectangular => f.write_str("equirectangular"),
        }
    }
}

/// Output canvas size in pixels, parsed from `WxH`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting zero sizes
    pub fn new(width: u32, height: u32) -> Result<Self, WorldMapError> {
        if width == 0 || height == 0 {
            return Err(WorldMapError::InvalidDimensions(format!(
                "{width}x{height}: width and height must be positive"
            )));
        }
        Ok(Self { width, height })
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 512,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = WorldMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WorldMapError::InvalidDimensions(format!("'{s}', expected <W>x<H>"));

        let (width, height) = s.trim().split_once('x').ok_or_else(invalid)?;
        let width = width.parse::<u32>().map_err(|_| invalid())?;
        let height = height.parse::<u32>().map_err(|_| invalid())?;
        Self::new(width, height)
    }
}

/// Read-only configuration for a single reprojection run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunConfig {
    /// Output canvas size
    pub output: Dimensions,
    /// Target projection
    pub projection: Projection,
}

impl RunConfig {
    pub fn new(output: Dimensions, projection: Projection) -> Self {
        Self { output, projection }
    }
}
