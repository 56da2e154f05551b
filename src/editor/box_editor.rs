//! Drag-to-draw box editor.

use crate::model::{AnnotationShape, DEFAULT_BOX_LABEL, PaletteColor, Point, ShapeDraft};

/// Pointer input relevant to box drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxEvent {
    /// Pointer pressed; starts a drag tagged with `color`.
    Press { at: Point, color: PaletteColor },
    /// Pointer moved while held.
    Move(Point),
    /// Pointer released at a position.
    Release(Point),
    /// Pointer left the canvas; finishes with the last known extent.
    Leave,
    /// Drawing abandoned (tool switch, image change).
    Cancel,
}

/// Box editor state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoxEditor {
    /// Not currently drawing.
    #[default]
    Idle,
    /// Dragging out a box. `width`/`height` are signed and follow the
    /// drag direction.
    Dragging {
        anchor: Point,
        width: f32,
        height: f32,
        color: PaletteColor,
    },
}

impl BoxEditor {
    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, BoxEditor::Dragging { .. })
    }

    /// Apply an event, returning the next state and a draft when a box was
    /// committed.
    pub fn transition(self, event: BoxEvent) -> (Self, Option<ShapeDraft>) {
        match (self, event) {
            (_, BoxEvent::Press { at, color }) => (
                BoxEditor::Dragging {
                    anchor: at,
                    width: 0.0,
                    height: 0.0,
                    color,
                },
                None,
            ),
            (BoxEditor::Dragging { anchor, color, .. }, BoxEvent::Move(p)) => (
                BoxEditor::Dragging {
                    anchor,
                    width: p.x - anchor.x,
                    height: p.y - anchor.y,
                    color,
                },
                None,
            ),
            (BoxEditor::Dragging { anchor, color, .. }, BoxEvent::Release(p)) => {
                (BoxEditor::Idle, commit(anchor, p.x - anchor.x, p.y - anchor.y, color))
            }
            (
                BoxEditor::Dragging {
                    anchor,
                    width,
                    height,
                    color,
                },
                BoxEvent::Leave,
            ) => (BoxEditor::Idle, commit(anchor, width, height, color)),
            (_, BoxEvent::Cancel) => (BoxEditor::Idle, None),
            (BoxEditor::Idle, event @ (BoxEvent::Move(_) | BoxEvent::Release(_) | BoxEvent::Leave)) => {
                log::trace!("Box: {:?} while idle ignored", event);
                (BoxEditor::Idle, None)
            }
        }
    }

    /// The in-progress rectangle, normalized for display, with its color.
    pub fn preview(&self) -> Option<(AnnotationShape, PaletteColor)> {
        match *self {
            BoxEditor::Idle => None,
            BoxEditor::Dragging {
                anchor,
                width,
                height,
                color,
            } => Some((AnnotationShape::normalized_box(anchor, width, height), color)),
        }
    }
}

fn commit(anchor: Point, width: f32, height: f32, color: PaletteColor) -> Option<ShapeDraft> {
    match AnnotationShape::box_from_extent(anchor, width, height) {
        Some(shape) => Some(ShapeDraft {
            shape,
            label: DEFAULT_BOX_LABEL.to_string(),
            color,
        }),
        None => {
            log::debug!(
                "Box: discarded {:.1}x{:.1} drag below threshold",
                width.abs(),
                height.abs()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(from: Point, to: Point) -> Option<ShapeDraft> {
        let (state, _) = BoxEditor::Idle.transition(BoxEvent::Press {
            at: from,
            color: PaletteColor::Blue,
        });
        let (state, _) = state.transition(BoxEvent::Move(to));
        let (state, draft) = state.transition(BoxEvent::Release(to));
        assert_eq!(state, BoxEditor::Idle);
        draft
    }

    fn assert_box(draft: &ShapeDraft, x: f32, y: f32, width: f32, height: f32) {
        assert_eq!(
            draft.shape,
            AnnotationShape::Box {
                x,
                y,
                width,
                height
            }
        );
    }

    #[test]
    fn test_press_starts_zero_size_drag() {
        let (state, draft) = BoxEditor::Idle.transition(BoxEvent::Press {
            at: Point::new(4.0, 2.0),
            color: PaletteColor::Red,
        });
        assert!(draft.is_none());
        assert_eq!(
            state,
            BoxEditor::Dragging {
                anchor: Point::new(4.0, 2.0),
                width: 0.0,
                height: 0.0,
                color: PaletteColor::Red,
            }
        );
    }

    #[test]
    fn test_move_keeps_signed_extent() {
        let (state, _) = BoxEditor::Idle.transition(BoxEvent::Press {
            at: Point::new(50.0, 50.0),
            color: PaletteColor::Blue,
        });
        let (state, _) = state.transition(BoxEvent::Move(Point::new(20.0, 70.0)));
        match state {
            BoxEditor::Dragging { width, height, .. } => {
                assert_eq!(width, -30.0);
                assert_eq!(height, 20.0);
            }
            BoxEditor::Idle => panic!("expected dragging state"),
        }
    }

    #[test]
    fn test_drag_in_every_direction_normalizes() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(100.0, 80.0);
        let forward = drag(a, b).expect("forward drag");
        let backward = drag(b, a).expect("backward drag");
        assert_box(&forward, 10.0, 10.0, 90.0, 70.0);
        assert_box(&backward, 10.0, 10.0, 90.0, 70.0);

        let mixed = drag(Point::new(100.0, 10.0), Point::new(10.0, 80.0)).expect("mixed");
        assert_box(&mixed, 10.0, 10.0, 90.0, 70.0);
    }

    #[test]
    fn test_commit_carries_label_and_press_color() {
        let draft = drag(Point::new(0.0, 0.0), Point::new(20.0, 20.0)).expect("box");
        assert_eq!(draft.label, "标注区域");
        assert_eq!(draft.color, PaletteColor::Blue);
    }

    #[test]
    fn test_small_drag_is_discarded() {
        assert!(drag(Point::new(0.0, 0.0), Point::new(5.0, 40.0)).is_none());
        assert!(drag(Point::new(0.0, 0.0), Point::new(40.0, 5.0)).is_none());
        assert!(drag(Point::new(0.0, 0.0), Point::new(0.0, 0.0)).is_none());
        assert!(drag(Point::new(0.0, 0.0), Point::new(6.0, 6.0)).is_some());
    }

    #[test]
    fn test_leave_commits_last_extent() {
        let (state, _) = BoxEditor::Idle.transition(BoxEvent::Press {
            at: Point::new(0.0, 0.0),
            color: PaletteColor::Cyan,
        });
        let (state, _) = state.transition(BoxEvent::Move(Point::new(30.0, 40.0)));
        let (state, draft) = state.transition(BoxEvent::Leave);
        assert_eq!(state, BoxEditor::Idle);
        assert_box(&draft.expect("committed"), 0.0, 0.0, 30.0, 40.0);
    }

    #[test]
    fn test_cancel_discards() {
        let (state, _) = BoxEditor::Idle.transition(BoxEvent::Press {
            at: Point::new(0.0, 0.0),
            color: PaletteColor::Blue,
        });
        let (state, _) = state.transition(BoxEvent::Move(Point::new(300.0, 300.0)));
        let (state, draft) = state.transition(BoxEvent::Cancel);
        assert_eq!(state, BoxEditor::Idle);
        assert!(draft.is_none());
    }

    #[test]
    fn test_idle_ignores_move_and_release() {
        let (state, draft) = BoxEditor::Idle.transition(BoxEvent::Move(Point::new(1.0, 1.0)));
        assert_eq!(state, BoxEditor::Idle);
        assert!(draft.is_none());
        let (state, draft) = state.transition(BoxEvent::Release(Point::new(90.0, 90.0)));
        assert_eq!(state, BoxEditor::Idle);
        assert!(draft.is_none());
    }

    #[test]
    fn test_preview_is_normalized() {
        let (state, _) = BoxEditor::Idle.transition(BoxEvent::Press {
            at: Point::new(50.0, 50.0),
            color: PaletteColor::Pink,
        });
        let (state, _) = state.transition(BoxEvent::Move(Point::new(40.0, 45.0)));
        let (shape, color) = state.preview().expect("preview");
        assert_eq!(color, PaletteColor::Pink);
        assert_eq!(
            shape,
            AnnotationShape::Box {
                x: 40.0,
                y: 45.0,
                width: 10.0,
                height: 5.0
            }
        );
    }
}
