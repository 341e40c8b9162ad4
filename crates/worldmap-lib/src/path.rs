//! Path primitives and structure-preserving point remapping
//!
//! A [`Path`] is an ordered list of [`Segment`]s. Remapping rewrites every point a
//! segment owns through the same function and never adds, drops or reorders
//! segments, so continuity between consecutive segments survives any consistent map.

use crate::Result;
use geo::{Coord, Line, Rect};
use rayon::prelude::*;
use smallvec::{SmallVec, smallvec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cubic Bézier curve
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubicCurve {
    pub start: Coord<f64>,
    pub control1: Coord<f64>,
    pub control2: Coord<f64>,
    pub end: Coord<f64>,
}

impl CubicCurve {
    pub fn new(
        start: Coord<f64>,
        control1: Coord<f64>,
        control2: Coord<f64>,
        end: Coord<f64>,
    ) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }
}

/// A single drawing primitive
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Segment {
    Line(Line<f64>),
    Cubic(CubicCurve),
}

impl Segment {
    /// First point of the segment
    #[inline]
    pub fn start(&self) -> Coord<f64> {
        match self {
            Segment::Line(line) => line.start,
            Segment::Cubic(curve) => curve.start,
        }
    }

    /// Last point of the segment
    #[inline]
    pub fn end(&self) -> Coord<f64> {
        match self {
            Segment::Line(line) => line.end,
            Segment::Cubic(curve) => curve.end,
        }
    }

    /// All points owned by this segment, in field order
    pub fn points(&self) -> SmallVec<[Coord<f64>; 4]> {
        match *self {
            Segment::Line(line) => smallvec![line.start, line.end],
            Segment::Cubic(c) => smallvec![c.start, c.control1, c.control2, c.end],
        }
    }

    /// Rewrite every point of the segment with `f`, keeping the variant
    #[inline]
    pub fn map_points<F>(&self, f: F) -> Segment
    where
        F: Fn(Coord<f64>) -> Coord<f64>,
    {
        match *self {
            Segment::Line(line) => Segment::Line(Line::new(f(line.start), f(line.end))),
            Segment::Cubic(c) => Segment::Cubic(CubicCurve::new(
                f(c.start),
                f(c.control1),
                f(c.control2),
                f(c.end),
            )),
        }
    }

    /// Fallible version of [`Segment::map_points`]
    #[inline]
    pub fn try_map_points<F>(&self, f: F) -> Result<Segment>
    where
        F: Fn(Coord<f64>) -> Result<Coord<f64>>,
    {
        Ok(match *self {
            Segment::Line(line) => Segment::Line(Line::new(f(line.start)?, f(line.end)?)),
            Segment::Cubic(c) => Segment::Cubic(CubicCurve::new(
                f(c.start)?,
                f(c.control1)?,
                f(c.control2)?,
                f(c.end)?,
            )),
        })
    }
}

impl From<Line<f64>> for Segment {
    fn from(line: Line<f64>) -> Self {
        Segment::Line(line)
    }
}

impl From<CubicCurve> for Segment {
    fn from(curve: CubicCurve) -> Self {
        Segment::Cubic(curve)
    }
}

/// An ordered sequence of segments
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    segments: Vec<Segment>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Path {
    /// Create a path from segments
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Append a segment
    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Bounding box over every point, control points included
    ///
    /// Returns `None` for an empty path.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        let mut points = self.segments.iter().flat_map(Segment::points);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Coord {
                    x: min.x.min(p.x),
                    y: min.y.min(p.y),
                },
                Coord {
                    x: max.x.max(p.x),
                    y: max.y.max(p.y),
                },
            )
        });
        Some(Rect::new(min, max))
    }

    /// Remap every point of every segment, preserving order, count and variants
    pub fn transform<F>(&self, f: F) -> Path
    where
        F: Fn(Coord<f64>) -> Coord<f64>,
    {
        #[cfg(feature = "profiling")]
        profiling::scope!("path::transform");

        Path {
            segments: self.segments.iter().map(|s| s.map_points(&f)).collect(),
        }
    }

    /// Remap with a fallible function, stopping at the first error
    pub fn try_transform<F>(&self, f: F) -> Result<Path>
    where
        F: Fn(Coord<f64>) -> Result<Coord<f64>>,
    {
        #[cfg(feature = "profiling")]
        profiling::scope!("path::try_transform");

        let segments = self
            .segments
            .iter()
            .map(|s| s.try_map_points(&f))
            .collect::<Result<Vec<_>>>()?;
        Ok(Path { segments })
    }

    /// Parallel version of [`Path::try_transform`]
    ///
    /// Segments are independent, so they are remapped across the rayon pool. The
    /// output order matches the input order.
    pub fn try_transform_parallel<F>(&self, f: F) -> Result<Path>
    where
        F: Fn(Coord<f64>) -> Result<Coord<f64>> + Sync + Send,
    {
        #[cfg(feature = "profiling")]
        profiling::scope!("path::try_transform_parallel");

        let segments = self
            .segments
            .par_iter()
            .map(|s| s.try_map_points(&f))
            .collect::<Result<Vec<_>>>()?;
        Ok(Path { segments })
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorldMapError;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    fn create_test_path() -> Path {
        let mut path = Path::default();
        path.push(Line::new(c(0.0, 0.0), c(10.0, 0.0)));
        path.push(CubicCurve::new(
            c(10.0, 0.0),
            c(12.0, 3.0),
            c(14.0, 7.0),
            c(10.0, 10.0),
        ));
        path.push(Line::new(c(10.0, 10.0), c(0.0, 0.0)));
        path
    }

    fn same_shape(a: &Path, b: &Path) -> bool {
        a.len() == b.len()
            && a.segments().iter().zip(b.segments()).all(|(x, y)| {
                std::mem::discriminant(x) == std::mem::discriminant(y)
                    && x.points().len() == y.points().len()
            })
    }

    #[test]
    fn test_identity_preserves_path() {
        let path = create_test_path();
        let out = path.transform(|p| p);
        assert_eq!(out, path);
    }

    #[test]
    fn test_transform_preserves_shape_and_continuity() {
        let path = create_test_path();
        let out = path.transform(|p| c(p.x * 2.0 + 1.0, p.y.sin()));

        assert!(same_shape(&path, &out));
        for pair in out.segments().windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        match out.segments()[1] {
            Segment::Cubic(curve) => {
                assert_eq!(curve.control1, c(25.0, 3.0_f64.sin()));
                assert_eq!(curve.control2, c(29.0, 7.0_f64.sin()));
            }
            other => panic!("expected cubic, got {other:?}"),
        }
    }

    #[test]
    fn test_every_point_is_mapped_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let path = create_test_path();
        let calls = AtomicUsize::new(0);
        path.transform(|p| {
            calls.fetch_add(1, Ordering::Relaxed);
            p
        });
        assert_eq!(calls.load(Ordering::Relaxed), 2 + 4 + 2);
    }

    #[test]
    fn test_try_transform_propagates_error() {
        let path = create_test_path();
        let result = path.try_transform(|p| {
            if p.x > 11.0 {
                Err(WorldMapError::InternalConsistency("boom".to_string()))
            } else {
                Ok(p)
            }
        });
        assert!(matches!(result, Err(WorldMapError::InternalConsistency(_))));

        let ok = path.try_transform(Ok).unwrap();
        assert_eq!(ok, path);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut path = Path::default();
        for i in 0..5000 {
            let x = i as f64;
            if i % 3 == 0 {
                path.push(CubicCurve::new(
                    c(x, 0.0),
                    c(x + 0.3, 1.0),
                    c(x + 0.6, -1.0),
                    c(x + 1.0, 0.0),
                ));
            } else {
                path.push(Line::new(c(x, 0.0), c(x + 1.0, 0.0)));
            }
        }
        let f = |p: Coord<f64>| c(p.x / 7.0, p.y * 3.0 - 1.0);

        assert_eq!(
            path.try_transform_parallel(|p| Ok(f(p))).unwrap(),
            path.transform(f)
        );
    }

    #[test]
    fn test_points_stay_inline() {
        let path = create_test_path();
        let counts: Vec<_> = path.segments().iter().map(|s| s.points().len()).collect();
        assert_eq!(counts, vec![2, 4, 2]);
        assert!(path.segments().iter().all(|s| !s.points().spilled()));
    }

    #[test]
    fn test_bounding_rect() {
        assert!(Path::default().bounding_rect().is_none());

        let rect = create_test_path().bounding_rect().unwrap();
        assert_eq!(rect.min(), c(0.0, 0.0));
        assert_eq!(rect.max(), c(14.0, 10.0));
    }
}
