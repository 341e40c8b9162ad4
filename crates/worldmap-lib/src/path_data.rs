//! SVG path data (`d` attribute) parsing and serialization
//!
//! Only straight lines and cubic curves are understood: `M`, `L`, `H`, `V`, `C`,
//! `S` and `Z`, in absolute and relative forms. Quadratic curves and elliptical
//! arcs are rejected instead of being approximated, so the reprojected outline
//! never silently loses a primitive.

use crate::{CubicCurve, Path, Result, Segment, WorldMapError};
use geo::{Coord, Line};
use std::fmt::{self, Write};
use svgtypes::{PathParser, PathSegment};

/// Decimal places used when writing coordinates
pub const DEFAULT_PRECISION: usize = 3;

const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

/// A comma may only separate two numbers
fn check_separators(data: &str) -> Result<()> {
    for (offset, _) in data.match_indices(',') {
        let next = data[offset + 1..]
            .bytes()
            .find(|b| !b.is_ascii_whitespace());
        if !matches!(next, Some(b'0'..=b'9' | b'.' | b'-' | b'+')) {
            return Err(WorldMapError::PathParse(format!(
                "misplaced ',' at offset {offset}"
            )));
        }
    }
    Ok(())
}

/// Resolve a possibly relative coordinate pair against the current point
fn resolve(index: usize, abs: bool, current: Coord<f64>, x: f64, y: f64) -> Result<Coord<f64>> {
    let point = if abs {
        Coord { x, y }
    } else {
        Coord {
            x: current.x + x,
            y: current.y + y,
        }
    };
    if point.x.is_finite() && point.y.is_finite() {
        Ok(point)
    } else {
        Err(WorldMapError::PathParse(format!(
            "segment {index}: coordinate out of range"
        )))
    }
}

fn unsupported(index: usize, abs: bool, command: char) -> WorldMapError {
    WorldMapError::UnsupportedPrimitive {
        command: if abs {
            command
        } else {
            command.to_ascii_lowercase()
        },
        index,
    }
}

/// Parse SVG path data into a [`Path`]
///
/// # Errors
/// * [`WorldMapError::UnsupportedPrimitive`] for quadratic curves and arcs
/// * [`WorldMapError::PathParse`] for anything that is not valid path data
pub fn parse(data: &str) -> Result<Path> {
    #[cfg(feature = "profiling")]
    profiling::scope!("path_data::parse");

    check_separators(data)?;

    let mut path = Path::default();
    let mut current = ORIGIN;
    let mut subpath_start = ORIGIN;
    // Second control point of the previous curve, for `S` reflection
    let mut last_control: Option<Coord<f64>> = None;

    for (index, segment) in PathParser::from(data).enumerate() {
        let segment = segment
            .map_err(|err| WorldMapError::PathParse(format!("segment {index}: {err}")))?;
        let mut control = None;

        match segment {
            PathSegment::MoveTo { abs, x, y } => {
                current = resolve(index, abs, current, x, y)?;
                subpath_start = current;
            }
            PathSegment::LineTo { abs, x, y } => {
                let end = resolve(index, abs, current, x, y)?;
                path.push(Line::new(current, end));
                current = end;
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let y = if abs { current.y } else { 0.0 };
                let end = resolve(index, abs, current, x, y)?;
                path.push(Line::new(current, end));
                current = end;
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let x = if abs { current.x } else { 0.0 };
                let end = resolve(index, abs, current, x, y)?;
                path.push(Line::new(current, end));
                current = end;
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let control1 = resolve(index, abs, current, x1, y1)?;
                let control2 = resolve(index, abs, current, x2, y2)?;
                let end = resolve(index, abs, current, x, y)?;
                path.push(CubicCurve::new(current, control1, control2, end));
                current = end;
                control = Some(control2);
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let control1 = match last_control {
                    Some(prev) => Coord {
                        x: 2.0 * current.x - prev.x,
                        y: 2.0 * current.y - prev.y,
                    },
                    None => current,
                };
                let control2 = resolve(index, abs, current, x2, y2)?;
                let end = resolve(index, abs, current, x, y)?;
                path.push(CubicCurve::new(current, control1, control2, end));
                current = end;
                control = Some(control2);
            }
            PathSegment::ClosePath { .. } => {
                if current != subpath_start {
                    path.push(Line::new(current, subpath_start));
                }
                current = subpath_start;
            }
            PathSegment::Quadratic { abs, .. } => return Err(unsupported(index, abs, 'Q')),
            PathSegment::SmoothQuadratic { abs, .. } => return Err(unsupported(index, abs, 'T')),
            PathSegment::EllipticalArc { abs, .. } => return Err(unsupported(index, abs, 'A')),
        }

        last_control = control;
    }

    tracing::trace!(segments = path.len(), "Parsed path data");
    Ok(path)
}

/// Format a coordinate with at most `precision` decimals, trailing zeros trimmed
pub fn format_number(value: f64, precision: usize) -> String {
    let mut s = format!("{value:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn write_coord<W: Write>(out: &mut W, p: Coord<f64>, precision: usize) -> fmt::Result {
    write!(
        out,
        "{},{}",
        format_number(p.x, precision),
        format_number(p.y, precision)
    )
}

/// Write `path` as absolute SVG path data
///
/// A moveto is emitted whenever a segment does not start where the previous one
/// ended. A segment that returns to its subpath start and ends the subpath is
/// followed by a closepath; when it is a line, the closepath replaces it.
pub fn write_path_data<W: Write>(out: &mut W, path: &Path, precision: usize) -> fmt::Result {
    let segments = path.segments();
    let mut current: Option<Coord<f64>> = None;
    let mut subpath_start = ORIGIN;

    for (i, segment) in segments.iter().enumerate() {
        if current != Some(segment.start()) {
            if current.is_some() {
                out.write_char(' ')?;
            }
            out.write_str("M ")?;
            write_coord(out, segment.start(), precision)?;
            subpath_start = segment.start();
        }

        let end = segment.end();
        let closes = end == subpath_start
            && segments
                .get(i + 1)
                .is_none_or(|next| next.start() != end);

        match segment {
            Segment::Line(line) if closes && line.start != line.end => {
                out.write_str(" Z")?;
            }
            Segment::Line(line) => {
                out.write_str(" L ")?;
                write_coord(out, line.end, precision)?;
            }
            Segment::Cubic(curve) => {
                out.write_str(" C ")?;
                write_coord(out, curve.control1, precision)?;
                out.write_char(' ')?;
                write_coord(out, curve.control2, precision)?;
                out.write_char(' ')?;
                write_coord(out, curve.end, precision)?;
                if closes {
                    out.write_str(" Z")?;
                }
            }
        }
        current = Some(end);
    }
    Ok(())
}

/// Serialize `path` to a path data string
pub fn to_string(path: &Path, precision: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_path_data(&mut out, path, precision);
    out
}
