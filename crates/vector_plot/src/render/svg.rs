//! SVG backend
//!
//! Serializes a [`DisplayList`] into an SVG document. Screen coordinates are
//! already in pixels with the origin at the top-left, which matches SVG's
//! coordinate system directly.

use svg::node::element::{Line, Polygon, Text};
use svg::Document;

use crate::error::PlotError;
use crate::style::LineStyle;

use super::{DisplayList, ScreenItem};

/// Dash pattern used for [`LineStyle::Dashed`] strokes
const DASH_PATTERN: &str = "4,3";

/// Build an SVG document from a display list.
pub fn to_document(list: &DisplayList) -> Document {
    let viewport = list.viewport();
    let mut document = Document::new()
        .set("width", viewport.width)
        .set("height", viewport.height)
        .set("viewBox", (0.0, 0.0, viewport.width, viewport.height));

    for item in list.items() {
        match item {
            ScreenItem::Line(line) => {
                let mut node = Line::new()
                    .set("x1", line.start.x)
                    .set("y1", line.start.y)
                    .set("x2", line.end.x)
                    .set("y2", line.end.y)
                    .set("stroke", line.stroke.color.to_css())
                    .set("stroke-opacity", line.stroke.color.a)
                    .set("stroke-width", line.stroke.width);
                if line.stroke.style == LineStyle::Dashed {
                    node = node.set("stroke-dasharray", DASH_PATTERN);
                }
                document = document.add(node);
            }
            ScreenItem::Polygon(polygon) => {
                let points = polygon
                    .points
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                let mut node = Polygon::new()
                    .set("points", points)
                    .set("fill", polygon.fill.to_css())
                    .set("fill-opacity", polygon.fill.a);
                if let Some(outline) = &polygon.outline {
                    node = node
                        .set("stroke", outline.color.to_css())
                        .set("stroke-opacity", outline.color.a)
                        .set("stroke-width", outline.width);
                }
                document = document.add(node);
            }
            ScreenItem::Text(text) => {
                let node = Text::new(text.text.clone())
                    .set("x", text.position.x)
                    .set("y", text.position.y)
                    .set("font-size", text.size);
                document = document.add(node);
            }
        }
    }

    document
}

/// Write a display list to an SVG file.
pub fn write_svg(list: &DisplayList, path: &str) -> Result<(), PlotError> {
    svg::save(path, &to_document(list))?;
    log::info!("wrote {} items to {}", list.items().len(), path);
    Ok(())
}
