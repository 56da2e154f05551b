//! Canvas pointer routing.
//!
//! Pointer events arrive in client coordinates. They are shifted into canvas
//! space and dispatched on the active tool.

use serde::{Deserialize, Serialize};

use super::WorkspaceSession;
use crate::editor::{BoxEvent, PolygonEvent};
use crate::model::{AnnotationTool, Point};

/// Kind of pointer event delivered to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// Pointer left the canvas
    Leave,
    Click,
    DoubleClick,
}

impl WorkspaceSession {
    /// Record where the canvas sits in client space.
    pub fn set_canvas_origin(&mut self, left: f32, top: f32) {
        self.canvas_origin = Point::new(left, top);
    }

    /// Convert a client-space position to canvas coordinates.
    pub fn to_canvas(&self, client: Point) -> Point {
        Point::new(client.x - self.canvas_origin.x, client.y - self.canvas_origin.y)
    }

    /// Handle a pointer event at a client-space position.
    pub fn handle_pointer(&mut self, kind: PointerKind, client: Point) {
        let pos = self.to_canvas(client);
        log::trace!(
            "Pointer: tool={:?}, kind={:?}, pos=({:.1}, {:.1})",
            self.tool,
            kind,
            pos.x,
            pos.y
        );

        match self.tool {
            AnnotationTool::Select => {
                if kind == PointerKind::Click {
                    self.handle_select_click(pos);
                }
            }
            AnnotationTool::Box => self.handle_box_pointer(kind, pos),
            AnnotationTool::Polygon => self.handle_polygon_pointer(kind, pos),
            AnnotationTool::Eraser => {
                if kind == PointerKind::Click {
                    self.handle_eraser_click(pos);
                }
            }
        }
    }

    /// Click on a shape selects it; click on empty canvas deselects.
    fn handle_select_click(&mut self, pos: Point) {
        match self.store.hit_test(&pos) {
            Some(id) => self.set_selection(Some(id)),
            None => {
                if self.store.selected().is_some() {
                    log::debug!("Empty canvas clicked, selection cleared");
                }
                self.set_selection(None);
            }
        }
    }

    /// Click on a shape deletes it; empty canvas does nothing.
    fn handle_eraser_click(&mut self, pos: Point) {
        if let Some(id) = self.store.hit_test(&pos) {
            if let Some(removed) = self.store.remove(id) {
                log::info!(
                    "Erased annotation {} (total: {})",
                    removed.id,
                    self.store.len()
                );
            }
        }
    }

    fn handle_box_pointer(&mut self, kind: PointerKind, pos: Point) {
        let event = match kind {
            PointerKind::Down => {
                if self.image.is_none() {
                    log::debug!("Box: no image loaded, ignoring press");
                    return;
                }
                log::debug!("Box: started at ({:.1}, {:.1})", pos.x, pos.y);
                BoxEvent::Press {
                    at: pos,
                    color: self.active_color,
                }
            }
            PointerKind::Move => BoxEvent::Move(pos),
            PointerKind::Up => BoxEvent::Release(pos),
            PointerKind::Leave => BoxEvent::Leave,
            PointerKind::Click | PointerKind::DoubleClick => return,
        };

        let (next, draft) = self.box_editor.transition(event);
        self.box_editor = next;
        if let Some(draft) = draft {
            self.commit(draft);
        }
    }

    fn handle_polygon_pointer(&mut self, kind: PointerKind, pos: Point) {
        let event = match kind {
            PointerKind::Click => {
                if self.image.is_none() {
                    log::debug!("Polygon: no image loaded, ignoring click");
                    return;
                }
                if let Some(id) = self.store.hit_test(&pos) {
                    log::debug!("Polygon: click landed on annotation {}, no vertex added", id);
                    return;
                }
                PolygonEvent::Click(pos)
            }
            PointerKind::DoubleClick => PolygonEvent::DoubleClick {
                color: self.active_color,
            },
            PointerKind::Down | PointerKind::Move | PointerKind::Up | PointerKind::Leave => return,
        };

        let (next, draft) = std::mem::take(&mut self.polygon_editor).transition(event);
        self.polygon_editor = next;
        match draft {
            Some(draft) => self.commit(draft),
            None => log::debug!(
                "Polygon: {} vertices collected",
                self.polygon_editor.points().len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LoadedImage, png_bytes};

    fn session_with_image() -> WorkspaceSession {
        let mut session = WorkspaceSession::new();
        let image = LoadedImage::from_bytes("slice.png", &png_bytes(8, 8)).expect("decode");
        session.load_image(image);
        session
    }

    #[test]
    fn test_client_to_canvas_offset() {
        let mut session = WorkspaceSession::new();
        session.set_canvas_origin(100.0, 40.0);
        assert_eq!(session.to_canvas(Point::new(110.0, 50.0)), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_box_drag_uses_canvas_coordinates() {
        let mut session = session_with_image();
        session.set_canvas_origin(200.0, 100.0);
        session.set_tool(AnnotationTool::Box);

        session.handle_pointer(PointerKind::Down, Point::new(210.0, 110.0));
        session.handle_pointer(PointerKind::Move, Point::new(300.0, 180.0));
        session.handle_pointer(PointerKind::Up, Point::new(300.0, 180.0));

        let ann = session.selected_annotation().expect("box selected");
        assert_eq!(ann.shape.label_anchor(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_press_without_image_does_not_start() {
        let mut session = WorkspaceSession::new();
        session.set_tool(AnnotationTool::Box);
        session.handle_pointer(PointerKind::Down, Point::new(0.0, 0.0));
        assert!(!session.is_dragging_box());
        session.handle_pointer(PointerKind::Move, Point::new(50.0, 50.0));
        session.handle_pointer(PointerKind::Up, Point::new(50.0, 50.0));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_polygon_click_without_image_is_ignored() {
        let mut session = WorkspaceSession::new();
        session.set_tool(AnnotationTool::Polygon);
        session.handle_pointer(PointerKind::Click, Point::new(5.0, 5.0));
        assert!(session.polygon_in_progress().is_empty());
    }

    #[test]
    fn test_box_tool_ignores_clicks() {
        let mut session = session_with_image();
        session.set_tool(AnnotationTool::Box);
        session.handle_pointer(PointerKind::Click, Point::new(5.0, 5.0));
        session.handle_pointer(PointerKind::DoubleClick, Point::new(5.0, 5.0));
        assert!(session.store().is_empty());
        assert!(!session.is_dragging_box());
    }

    #[test]
    fn test_eraser_on_empty_canvas_is_noop() {
        let mut session = session_with_image();
        session.set_tool(AnnotationTool::Box);
        session.handle_pointer(PointerKind::Down, Point::new(0.0, 0.0));
        session.handle_pointer(PointerKind::Up, Point::new(20.0, 20.0));
        assert_eq!(session.store().len(), 1);

        session.set_tool(AnnotationTool::Eraser);
        session.handle_pointer(PointerKind::Click, Point::new(100.0, 100.0));
        assert_eq!(session.store().len(), 1);
    }
}
