//! Scenario tests for the workspace session.
//!
//! These drive a session through messages the way the canvas, list and
//! property panel would, and check what the user would see afterwards.


use crate::message::Message;
use crate::model::{AnnotationTool, Point};
use crate::state::{LoadedImage, png_bytes};
use crate::workspace::{PointerKind, WorkspaceSession};

/// A session with a small generated image loaded.
fn session_with_image(name: &str) -> WorkspaceSession {
    let mut session = WorkspaceSession::new();
    session.load_image(LoadedImage::from_bytes(name, &png_bytes(32, 24)).expect("decode"));
    session
}

fn pointer(session: &mut WorkspaceSession, kind: PointerKind, x: f32, y: f32) {
    session.update(Message::Pointer { kind, x, y });
}

fn drag_box(session: &mut WorkspaceSession, from: Point, to: Point) {
    session.update(Message::SelectTool {
        tool: AnnotationTool::Box,
    });
    pointer(session, PointerKind::Down, from.x, from.y);
    pointer(session, PointerKind::Move, to.x, to.y);
    pointer(session, PointerKind::Up, to.x, to.y);
}

fn draw_polygon(session: &mut WorkspaceSession, points: &[Point]) {
    session.update(Message::SelectTool {
        tool: AnnotationTool::Polygon,
    });
    for p in points {
        pointer(session, PointerKind::Click, p.x, p.y);
    }
    pointer(session, PointerKind::DoubleClick, 0.0, 0.0);
}
