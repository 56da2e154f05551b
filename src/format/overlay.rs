//! SVG rendering of the canvas overlay.
//!
//! Committed shapes are drawn in list order so later ones sit on top. Each
//! shape carries its label above its anchor point. In-progress shapes are
//! drawn dashed in the active color.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::FormatError;
use crate::color_utils::rgba_css;
use crate::constants::overlay::{
    FILL_ALPHA, FILL_ALPHA_SELECTED, LABEL_FONT_SIZE, LABEL_OFFSET, PREVIEW_DASH,
    PREVIEW_FILL_ALPHA, PREVIEW_STROKE_WIDTH, STROKE_WIDTH, STROKE_WIDTH_SELECTED, VERTEX_RADIUS,
};
use crate::model::{Annotation, AnnotationShape, PaletteColor, Point};

/// Everything the overlay draws for one frame.
#[derive(Debug, Clone)]
pub struct OverlayScene<'a> {
    pub width: u32,
    pub height: u32,
    /// Annotations in list order with their selected flag
    pub annotations: Vec<(&'a Annotation, bool)>,
    /// Normalized box being dragged
    pub box_preview: Option<AnnotationShape>,
    /// Vertices of the polygon being drawn
    pub polygon_preview: &'a [Point],
    /// Active color; both previews are drawn in it
    pub preview_color: PaletteColor,
}

/// Render the scene as a standalone SVG document.
pub fn render_svg(scene: &OverlayScene<'_>) -> Result<String, FormatError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let width = scene.width.to_string();
    let height = scene.height.to_string();
    let view_box = format!("0 0 {} {}", scene.width, scene.height);
    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    svg.push_attribute(("viewBox", view_box.as_str()));
    writer
        .write_event(Event::Start(svg))
        .map_err(|e| FormatError::Xml(e.into()))?;

    for (ann, selected) in &scene.annotations {
        write_annotation(&mut writer, ann, *selected)?;
    }

    if let Some(shape) = &scene.box_preview {
        let color = scene.preview_color;
        write_shape(
            &mut writer,
            shape,
            &rgba_css(color.rgb(), PREVIEW_FILL_ALPHA),
            color.hex(),
            PREVIEW_STROKE_WIDTH,
            true,
        )?;
    }

    if !scene.polygon_preview.is_empty() {
        write_polygon_preview(&mut writer, scene.polygon_preview, scene.preview_color)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(|e| FormatError::Xml(e.into()))?;

    let result = writer.into_inner();
    String::from_utf8(result).map_err(|_| FormatError::invalid_format("Invalid UTF-8 in SVG"))
}

fn write_annotation<W: Write>(
    writer: &mut Writer<W>,
    ann: &Annotation,
    selected: bool,
) -> Result<(), FormatError> {
    let (alpha, stroke_width) = if selected {
        (FILL_ALPHA_SELECTED, STROKE_WIDTH_SELECTED)
    } else {
        (FILL_ALPHA, STROKE_WIDTH)
    };
    write_shape(
        writer,
        &ann.shape,
        &rgba_css(ann.color.rgb(), alpha),
        ann.color.hex(),
        stroke_width,
        false,
    )?;
    write_label(writer, ann)
}

fn write_shape<W: Write>(
    writer: &mut Writer<W>,
    shape: &AnnotationShape,
    fill: &str,
    stroke: &str,
    stroke_width: u32,
    dashed: bool,
) -> Result<(), FormatError> {
    let stroke_width = stroke_width.to_string();
    let mut elem = match shape {
        AnnotationShape::Box {
            x,
            y,
            width,
            height,
        } => {
            let mut rect = BytesStart::new("rect");
            rect.push_attribute(("x", x.to_string().as_str()));
            rect.push_attribute(("y", y.to_string().as_str()));
            rect.push_attribute(("width", width.to_string().as_str()));
            rect.push_attribute(("height", height.to_string().as_str()));
            rect
        }
        AnnotationShape::Polygon { points } => {
            let mut polygon = BytesStart::new("polygon");
            polygon.push_attribute(("points", points_attr(points).as_str()));
            polygon
        }
    };
    elem.push_attribute(("fill", fill));
    elem.push_attribute(("stroke", stroke));
    elem.push_attribute(("stroke-width", stroke_width.as_str()));
    if dashed {
        elem.push_attribute(("stroke-dasharray", PREVIEW_DASH));
    }
    writer
        .write_event(Event::Empty(elem))
        .map_err(|e| FormatError::Xml(e.into()))?;
    Ok(())
}

fn write_label<W: Write>(writer: &mut Writer<W>, ann: &Annotation) -> Result<(), FormatError> {
    let anchor = ann.shape.label_anchor();
    let x = anchor.x.to_string();
    let y = (anchor.y - LABEL_OFFSET).to_string();
    let font_size = LABEL_FONT_SIZE.to_string();

    let mut text = BytesStart::new("text");
    text.push_attribute(("x", x.as_str()));
    text.push_attribute(("y", y.as_str()));
    text.push_attribute(("fill", ann.color.hex()));
    text.push_attribute(("font-size", font_size.as_str()));
    text.push_attribute(("font-weight", "bold"));
    writer
        .write_event(Event::Start(text))
        .map_err(|e| FormatError::Xml(e.into()))?;
    writer
        .write_event(Event::Text(BytesText::new(&ann.label)))
        .map_err(|e| FormatError::Xml(e.into()))?;
    writer
        .write_event(Event::End(BytesEnd::new("text")))
        .map_err(|e| FormatError::Xml(e.into()))?;
    Ok(())
}

fn write_polygon_preview<W: Write>(
    writer: &mut Writer<W>,
    points: &[Point],
    color: PaletteColor,
) -> Result<(), FormatError> {
    let stroke_width = PREVIEW_STROKE_WIDTH.to_string();
    let mut line = BytesStart::new("polyline");
    line.push_attribute(("points", points_attr(points).as_str()));
    line.push_attribute(("fill", "none"));
    line.push_attribute(("stroke", color.hex()));
    line.push_attribute(("stroke-width", stroke_width.as_str()));
    line.push_attribute(("stroke-dasharray", PREVIEW_DASH));
    writer
        .write_event(Event::Empty(line))
        .map_err(|e| FormatError::Xml(e.into()))?;

    let radius = VERTEX_RADIUS.to_string();
    for p in points {
        let mut marker = BytesStart::new("circle");
        marker.push_attribute(("cx", p.x.to_string().as_str()));
        marker.push_attribute(("cy", p.y.to_string().as_str()));
        marker.push_attribute(("r", radius.as_str()));
        marker.push_attribute(("fill", "white"));
        marker.push_attribute(("stroke", color.hex()));
        writer
            .write_event(Event::Empty(marker))
            .map_err(|e| FormatError::Xml(e.into()))?;
    }
    Ok(())
}

/// "x1,y1 x2,y2 ..." as SVG expects.
fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(id: u32, label: &str, color: PaletteColor) -> Annotation {
        Annotation::new(
            id,
            AnnotationShape::Box {
                x: 10.0,
                y: 20.0,
                width: 90.0,
                height: 70.0,
            },
            label,
            color,
        )
    }

    fn empty_scene<'a>() -> OverlayScene<'a> {
        OverlayScene {
            width: 800,
            height: 600,
            annotations: Vec::new(),
            box_preview: None,
            polygon_preview: &[],
            preview_color: PaletteColor::Blue,
        }
    }

    #[test]
    fn test_empty_scene() {
        let svg = render_svg(&empty_scene()).expect("render");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="800""#));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(!svg.contains("<rect"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_selected_shape_is_emphasized() {
        let a = boxed(1, "泥岩", PaletteColor::Red);
        let b = boxed(2, "砾岩", PaletteColor::Blue);
        let scene = OverlayScene {
            annotations: vec![(&a, true), (&b, false)],
            ..empty_scene()
        };
        let svg = render_svg(&scene).expect("render");

        assert!(svg.contains(
            r##"fill="rgba(239, 68, 68, 0.35)" stroke="#ef4444" stroke-width="3""##
        ));
        assert!(svg.contains(
            r##"fill="rgba(59, 130, 246, 0.15)" stroke="#3b82f6" stroke-width="2""##
        ));
        // red drawn first, blue on top
        let red = svg.find("#ef4444").expect("red shape");
        let blue = svg.find("#3b82f6").expect("blue shape");
        assert!(red < blue);
    }

    #[test]
    fn test_label_sits_above_anchor() {
        let a = boxed(1, "泥岩", PaletteColor::Red);
        let scene = OverlayScene {
            annotations: vec![(&a, false)],
            ..empty_scene()
        };
        let svg = render_svg(&scene).expect("render");
        assert!(svg.contains(r#"<text x="10" y="15""#));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(">泥岩</text>"));
    }

    #[test]
    fn test_label_is_escaped() {
        let a = boxed(1, "<砂&泥>", PaletteColor::Red);
        let scene = OverlayScene {
            annotations: vec![(&a, false)],
            ..empty_scene()
        };
        let svg = render_svg(&scene).expect("render");
        assert!(svg.contains("&lt;砂&amp;泥&gt;"));
    }

    #[test]
    fn test_previews_are_dashed() {
        let points = [Point::new(0.0, 0.0), Point::new(30.0, 5.0)];
        let scene = OverlayScene {
            box_preview: Some(AnnotationShape::Box {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0,
            }),
            polygon_preview: &points,
            preview_color: PaletteColor::Emerald,
            ..empty_scene()
        };
        let svg = render_svg(&scene).expect("render");

        assert!(svg.contains(r#"fill="rgba(16, 185, 129, 0.1)""#));
        assert!(svg.contains(r##"<polyline points="0,0 30,5" fill="none" stroke="#10b981""##));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches(r#"stroke-dasharray="4""#).count(), 2);
    }

    #[test]
    fn test_points_attr() {
        let pts = [Point::new(1.5, 2.0), Point::new(3.0, 4.25)];
        assert_eq!(points_attr(&pts), "1.5,2 3,4.25");
        assert_eq!(points_attr(&[]), "");
    }
}
