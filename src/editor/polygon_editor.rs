//! Click-by-click polygon editor.

use crate::model::{
    AnnotationShape, DEFAULT_POLYGON_LABEL, MIN_POLYGON_VERTICES, PaletteColor, Point,
    ShapeDraft,
};

/// Pointer input relevant to polygon drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolygonEvent {
    /// Single click; appends a vertex.
    Click(Point),
    /// Double click; finishes the polygon in `color` if it has enough vertices.
    DoubleClick { color: PaletteColor },
    /// Drawing abandoned (tool switch, image change).
    Cancel,
}

/// Polygon editor state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PolygonEditor {
    /// No vertices collected.
    #[default]
    Idle,
    /// Collecting vertices in click order.
    Collecting { points: Vec<Point> },
}

impl PolygonEditor {
    /// Vertices collected so far.
    pub fn points(&self) -> &[Point] {
        match self {
            PolygonEditor::Idle => &[],
            PolygonEditor::Collecting { points } => points,
        }
    }

    /// Apply an event, returning the next state and a draft when a polygon
    /// was committed.
    pub fn transition(self, event: PolygonEvent) -> (Self, Option<ShapeDraft>) {
        match (self, event) {
            (PolygonEditor::Idle, PolygonEvent::Click(p)) => {
                (PolygonEditor::Collecting { points: vec![p] }, None)
            }
            (PolygonEditor::Collecting { mut points }, PolygonEvent::Click(p)) => {
                points.push(p);
                (PolygonEditor::Collecting { points }, None)
            }
            (PolygonEditor::Collecting { points }, PolygonEvent::DoubleClick { color }) => {
                if points.len() < MIN_POLYGON_VERTICES {
                    log::debug!(
                        "Polygon: double-click with {} vertices, need {}",
                        points.len(),
                        MIN_POLYGON_VERTICES
                    );
                    return (PolygonEditor::Collecting { points }, None);
                }
                let draft = AnnotationShape::polygon_from_points(points).map(|shape| ShapeDraft {
                    shape,
                    label: DEFAULT_POLYGON_LABEL.to_string(),
                    color,
                });
                (PolygonEditor::Idle, draft)
            }
            (PolygonEditor::Idle, PolygonEvent::DoubleClick { .. }) => (PolygonEditor::Idle, None),
            (_, PolygonEvent::Cancel) => (PolygonEditor::Idle, None),
        }
    }
}
