//! Shape editors.
//!
//! Each editor is a small state machine driven by pointer events. A
//! transition consumes the current state and returns the next one together
//! with an optional [`ShapeDraft`](crate::model::ShapeDraft) when a shape was
//! committed. Editors know nothing about the store or the UI.

mod box_editor;
mod polygon_editor;

pub use box_editor::{BoxEditor, BoxEvent};
pub use polygon_editor::{PolygonEditor, PolygonEvent};
