//! Annotation tool types and data structures.

use serde::{Deserialize, Serialize};

use super::PaletteColor;

/// Unique identifier for an annotation.
pub type AnnotationId = u32;

/// Width and height must both exceed this for a dragged box to be kept.
pub const MIN_BOX_SIZE: f32 = 5.0;

/// Minimum number of vertices required for a valid polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Label given to every newly drawn box.
pub const DEFAULT_BOX_LABEL: &str = "标注区域";

/// Label given to every newly drawn polygon.
pub const DEFAULT_POLYGON_LABEL: &str = "多边形区域";

/// A 2D point in canvas-local image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Annotation tools available in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationTool {
    /// Selection tool for selecting existing annotations
    #[default]
    Select,
    /// Rectangle drawing tool
    Box,
    /// Click-by-click polygon tool, double-click to finish
    Polygon,
    /// Click an annotation to delete it
    Eraser,
}

impl AnnotationTool {
    /// Get the display name for this tool.
    pub fn name(&self) -> &'static str {
        match self {
            AnnotationTool::Select => "Select",
            AnnotationTool::Box => "Box",
            AnnotationTool::Polygon => "Polygon",
            AnnotationTool::Eraser => "Eraser",
        }
    }

    /// Get all available annotation tools.
    pub fn all() -> &'static [AnnotationTool] {
        &[
            AnnotationTool::Select,
            AnnotationTool::Box,
            AnnotationTool::Polygon,
            AnnotationTool::Eraser,
        ]
    }

    /// Check if this tool draws new shapes.
    pub fn is_drawing_tool(&self) -> bool {
        matches!(self, AnnotationTool::Box | AnnotationTool::Polygon)
    }

    /// CSS cursor shown over the canvas while this tool is active.
    pub fn cursor(&self) -> &'static str {
        match self {
            AnnotationTool::Select => "default",
            AnnotationTool::Box | AnnotationTool::Polygon => "crosshair",
            AnnotationTool::Eraser => "not-allowed",
        }
    }
}

/// Shape data for an annotation (in canvas coordinates).
///
/// Serialized with a `kind` discriminator next to the geometry fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnnotationShape {
    /// Axis-aligned box defined by top-left corner and non-negative size.
    Box {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Implicitly closed polygon; the last point connects back to the first.
    Polygon { points: Vec<Point> },
}

impl AnnotationShape {
    /// Create a normalized box from an anchor and a signed extent.
    ///
    /// A negative width or height moves the origin left/up by that amount.
    /// Returns None unless both sides exceed [`MIN_BOX_SIZE`].
    pub fn box_from_extent(anchor: Point, width: f32, height: f32) -> Option<Self> {
        if width.abs() > MIN_BOX_SIZE && height.abs() > MIN_BOX_SIZE {
            Some(Self::normalized_box(anchor, width, height))
        } else {
            None
        }
    }

    /// Normalize a signed extent into a box without applying any threshold.
    pub fn normalized_box(anchor: Point, width: f32, height: f32) -> Self {
        let x = if width < 0.0 { anchor.x + width } else { anchor.x };
        let y = if height < 0.0 { anchor.y + height } else { anchor.y };
        AnnotationShape::Box {
            x,
            y,
            width: width.abs(),
            height: height.abs(),
        }
    }

    /// Create a polygon from collected vertices.
    /// Returns None if there are fewer than [`MIN_POLYGON_VERTICES`].
    pub fn polygon_from_points(points: Vec<Point>) -> Option<Self> {
        if points.len() >= MIN_POLYGON_VERTICES {
            Some(AnnotationShape::Polygon { points })
        } else {
            None
        }
    }

    /// Lowercase name of the shape variant, matching the serialized `kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            AnnotationShape::Box { .. } => "box",
            AnnotationShape::Polygon { .. } => "polygon",
        }
    }

    /// Where the label text is anchored: box origin or first polygon vertex.
    pub fn label_anchor(&self) -> Point {
        match self {
            AnnotationShape::Box { x, y, .. } => Point::new(*x, *y),
            AnnotationShape::Polygon { points } => points.first().copied().unwrap_or_default(),
        }
    }

    /// Check if a point is inside this shape.
    pub fn contains_point(&self, p: &Point) -> bool {
        match self {
            AnnotationShape::Box {
                x,
                y,
                width,
                height,
            } => p.x >= *x && p.x <= x + width && p.y >= *y && p.y <= y + height,
            AnnotationShape::Polygon { points } => {
                // Even-odd ray casting over the implicitly closed ring
                if points.len() < MIN_POLYGON_VERTICES {
                    return false;
                }
                let mut inside = false;
                let mut j = points.len() - 1;
                for i in 0..points.len() {
                    let (pi, pj) = (points[i], points[j]);
                    if ((pi.y > p.y) != (pj.y > p.y))
                        && (p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x)
                    {
                        inside = !inside;
                    }
                    j = i;
                }
                inside
            }
        }
    }
}

/// A committed annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique identifier, stable for the annotation's lifetime.
    pub id: AnnotationId,
    /// Free-text label.
    pub label: String,
    /// Fill and stroke color.
    pub color: PaletteColor,
    /// The shape geometry.
    #[serde(flatten)]
    pub shape: AnnotationShape,
}

impl Annotation {
    /// Create a new annotation.
    pub fn new(
        id: AnnotationId,
        shape: AnnotationShape,
        label: impl Into<String>,
        color: PaletteColor,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            color,
            shape,
        }
    }
}

/// A finished shape produced by an editor, not yet given an id.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDraft {
    pub shape: AnnotationShape,
    pub label: String,
    pub color: PaletteColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> AnnotationShape {
        AnnotationShape::Polygon {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ],
        }
    }

    #[test]
    fn test_box_from_positive_extent() {
        let shape = AnnotationShape::box_from_extent(Point::new(10.0, 10.0), 90.0, 70.0);
        assert_eq!(
            shape,
            Some(AnnotationShape::Box {
                x: 10.0,
                y: 10.0,
                width: 90.0,
                height: 70.0
            })
        );
    }

    #[test]
    fn test_box_from_negative_extent_shifts_origin() {
        let shape = AnnotationShape::box_from_extent(Point::new(100.0, 80.0), -90.0, -70.0);
        assert_eq!(
            shape,
            Some(AnnotationShape::Box {
                x: 10.0,
                y: 10.0,
                width: 90.0,
                height: 70.0
            })
        );
    }

    #[test]
    fn test_box_threshold_is_strict() {
        let anchor = Point::new(0.0, 0.0);
        assert!(AnnotationShape::box_from_extent(anchor, 5.0, 50.0).is_none());
        assert!(AnnotationShape::box_from_extent(anchor, 50.0, -5.0).is_none());
        assert!(AnnotationShape::box_from_extent(anchor, 5.5, 5.5).is_some());
    }

    #[test]
    fn test_polygon_requires_three_points() {
        let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(AnnotationShape::polygon_from_points(two).is_none());

        let three = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        assert!(AnnotationShape::polygon_from_points(three).is_some());
    }

    #[test]
    fn test_box_contains_is_inclusive() {
        let shape = AnnotationShape::Box {
            x: 10.0,
            y: 10.0,
            width: 100.0,
            height: 100.0,
        };
        assert!(shape.contains_point(&Point::new(50.0, 50.0)));
        assert!(shape.contains_point(&Point::new(10.0, 110.0)));
        assert!(!shape.contains_point(&Point::new(5.0, 50.0)));
    }

    #[test]
    fn test_polygon_contains() {
        let shape = square();
        assert!(shape.contains_point(&Point::new(50.0, 50.0)));
        assert!(!shape.contains_point(&Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_concave_polygon_contains() {
        // U shape: the notch between the arms is outside
        let shape = AnnotationShape::Polygon {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(30.0, 0.0),
                Point::new(30.0, 60.0),
                Point::new(60.0, 60.0),
                Point::new(60.0, 0.0),
                Point::new(90.0, 0.0),
                Point::new(90.0, 90.0),
                Point::new(0.0, 90.0),
            ],
        };
        assert!(shape.contains_point(&Point::new(15.0, 30.0)));
        assert!(!shape.contains_point(&Point::new(45.0, 30.0)));
        assert!(shape.contains_point(&Point::new(45.0, 75.0)));
    }

    #[test]
    fn test_label_anchor() {
        assert_eq!(square().label_anchor(), Point::new(0.0, 0.0));
        let b = AnnotationShape::Box {
            x: 3.0,
            y: 4.0,
            width: 10.0,
            height: 10.0,
        };
        assert_eq!(b.label_anchor(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_annotation_json_has_kind_tag() {
        let ann = Annotation::new(
            7,
            AnnotationShape::Box {
                x: 10.0,
                y: 10.0,
                width: 90.0,
                height: 70.0,
            },
            DEFAULT_BOX_LABEL,
            PaletteColor::Blue,
        );
        let value = serde_json::to_value(&ann).expect("serialize");
        assert_eq!(value["kind"], "box");
        assert_eq!(value["color"], "#3b82f6");
        assert_eq!(value["label"], "标注区域");
        assert_eq!(value["width"], 90.0);

        let back: Annotation = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, ann);
    }

    #[test]
    fn test_tool_cursor_and_drawing_flag() {
        assert_eq!(AnnotationTool::Eraser.cursor(), "not-allowed");
        assert_eq!(AnnotationTool::Select.cursor(), "default");
        assert_eq!(AnnotationTool::Polygon.cursor(), "crosshair");
        assert!(AnnotationTool::Box.is_drawing_tool());
        assert!(!AnnotationTool::Eraser.is_drawing_tool());
        assert_eq!(AnnotationTool::default(), AnnotationTool::Select);
    }
}
