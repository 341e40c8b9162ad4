//! Minimal SVG document assembly
//!
//! The document holds an optional full-canvas background rectangle (the sea) and a
//! single filled `<path>` (the land).

use crate::{Dimensions, Path, Result, path_data};
use std::fmt::{self, Write};

/// Fill colours of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgStyle {
    /// Fill of the land path
    pub land_color: String,
    /// Background fill; no background rectangle when `None`
    pub sea_color: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            land_color: "#ffffff".to_string(),
            sea_color: None,
        }
    }
}

/// Escape the five XML special characters for use in attribute values
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

fn write_document<W: Write>(
    out: &mut W,
    path: &Path,
    dimensions: Dimensions,
    style: &SvgStyle,
    precision: usize,
) -> fmt::Result {
    let Dimensions { width, height } = dimensions;

    writeln!(
        out,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
    )?;
    writeln!(
        out,
        r#"<svg id="svg2" xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" version="1.0">"#
    )?;

    if let Some(sea) = &style.sea_color {
        writeln!(
            out,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}" />"#,
            xml_escape(sea)
        )?;
    }

    write!(out, r#"<path fill="{}" d=""#, xml_escape(&style.land_color))?;
    path_data::write_path_data(out, path, precision)?;
    writeln!(out, r#""/>"#)?;
    writeln!(out, "</svg>")
}

/// Render `path` into a complete SVG document
///
/// Coordinates are written with `precision` decimals.
///
/// # Examples
///
/// ```
/// use worldmap_lib::{Dimensions, path_data, svg::{SvgStyle, to_svg}};
///
/// let path = path_data::parse("M 0,0 L 10,0 L 10,10 Z").unwrap();
/// let style = SvgStyle {
///     sea_color: Some("#003366".to_string()),
///     ..SvgStyle::default()
/// };
/// let svg = to_svg(&path, Dimensions::default(), &style, 3);
/// assert!(svg.contains(r#"width="1024" height="512""#));
/// assert!(svg.contains(r##"fill="#003366""##));
/// assert!(svg.contains(r#"d="M 0,0 L 10,0 L 10,10 Z""#));
/// ```
#[must_use]
pub fn to_svg(path: &Path, dimensions: Dimensions, style: &SvgStyle, precision: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_document(&mut out, path, dimensions, style, precision);
    out
}

/// Render `path` and write the document to `writer`
pub fn write_svg<W: std::io::Write>(
    writer: &mut W,
    path: &Path,
    dimensions: Dimensions,
    style: &SvgStyle,
    precision: usize,
) -> Result<()> {
    writer.write_all(to_svg(path, dimensions, style, precision).as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path {
        path_data::parse("M 0,0 L 10,0 L 10,10 L 0,10 Z").unwrap()
    }

    #[test]
    fn test_document_without_background() {
        let svg = to_svg(&square(), Dimensions::default(), &SvgStyle::default(), 3);

        assert!(svg.starts_with("<?xml version=\"1.0\""));
        assert!(svg.contains(r#"<svg id="svg2" xmlns="http://www.w3.org/2000/svg" width="1024" height="512" version="1.0">"#));
        assert!(!svg.contains("<rect"));
        assert!(svg.contains(r##"<path fill="#ffffff" d="M 0,0 L 10,0 L 10,10 L 0,10 Z"/>"##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_document_with_background() {
        let style = SvgStyle {
            land_color: "green".to_string(),
            sea_color: Some("blue".to_string()),
        };
        let dims = Dimensions::new(800, 400).unwrap();
        let svg = to_svg(&square(), dims, &style, 3);

        assert!(svg.contains(r#"width="800" height="400" version="1.0""#));
        assert!(svg.contains(r#"<rect x="0" y="0" width="800" height="400" fill="blue" />"#));
        assert!(svg.contains(r#"<path fill="green""#));
        // Background comes before the land
        assert!(svg.find("<rect").unwrap() < svg.find("<path").unwrap());
    }

    #[test]
    fn test_document_layout() {
        let style = SvgStyle {
            land_color: "#ffffff".to_string(),
            sea_color: Some("#000000".to_string()),
        };
        let svg = to_svg(&square(), Dimensions::new(4, 2).unwrap(), &style, 3);
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#,
                r#"<svg id="svg2" xmlns="http://www.w3.org/2000/svg" width="4" height="2" version="1.0">"#,
                r##"<rect x="0" y="0" width="4" height="2" fill="#000000" />"##,
                r##"<path fill="#ffffff" d="M 0,0 L 10,0 L 10,10 L 0,10 Z"/>"##,
                "</svg>",
            ]
        );
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_colors_are_escaped() {
        let style = SvgStyle {
            land_color: "\"><script>".to_string(),
            sea_color: None,
        };
        let svg = to_svg(&square(), Dimensions::default(), &style, 3);
        assert!(svg.contains("fill=\"&quot;&gt;&lt;script&gt;\""));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn test_write_svg_matches_to_svg() {
        let mut buffer = Vec::new();
        write_svg(
            &mut buffer,
            &square(),
            Dimensions::default(),
            &SvgStyle::default(),
            2,
        )
        .unwrap();
        let expected = to_svg(&square(), Dimensions::default(), &SvgStyle::default(), 2);
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }
}
