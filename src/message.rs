//! Workspace message types.
//!
//! Every user action is a message in the Elm architecture style. Messages
//! deserialize from JSON so sessions can be scripted and replayed.

use serde::{Deserialize, Serialize};

use crate::model::{AnnotationId, AnnotationTool, PaletteColor};
use crate::workspace::PointerKind;

/// Messages that can be sent to update a workspace session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Message {
    // Toolbar
    /// Annotation tool selected
    SelectTool { tool: AnnotationTool },
    /// Hotkey pressed
    KeyPressed { key: char },
    /// Toolbar color swatch picked
    PickToolbarColor { color: PaletteColor },

    // Canvas
    /// Canvas moved within the client area
    SetCanvasOrigin { left: f32, top: f32 },
    /// Pointer event in client coordinates
    Pointer { kind: PointerKind, x: f32, y: f32 },

    // Annotation list
    /// List row clicked
    SelectFromList { id: AnnotationId },
    /// AI-assist suggestion accepted
    ApplySuggestion,

    // Property panel
    /// Label text changed
    EditLabel { text: String },
    /// Preset tag picked
    ApplyPreset { tag: String },
    /// Preset category header clicked
    ExpandPresetCategory { category: String },
    /// Palette color picked
    PickColor { color: PaletteColor },
    /// Delete button pressed
    DeleteSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let json = r##"[
            {"action": "select_tool", "tool": "box"},
            {"action": "pointer", "kind": "down", "x": 10, "y": 10},
            {"action": "pointer", "kind": "double_click", "x": 1.5, "y": 2},
            {"action": "pick_color", "color": "#ec4899"},
            {"action": "edit_label", "text": "泥岩"},
            {"action": "key_pressed", "key": "p"},
            {"action": "delete_selected"}
        ]"##;
        let messages: Vec<Message> = serde_json::from_str(json).expect("parse");
        assert_eq!(
            messages,
            vec![
                Message::SelectTool {
                    tool: AnnotationTool::Box
                },
                Message::Pointer {
                    kind: PointerKind::Down,
                    x: 10.0,
                    y: 10.0
                },
                Message::Pointer {
                    kind: PointerKind::DoubleClick,
                    x: 1.5,
                    y: 2.0
                },
                Message::PickColor {
                    color: PaletteColor::Pink
                },
                Message::EditLabel {
                    text: "泥岩".to_string()
                },
                Message::KeyPressed { key: 'p' },
                Message::DeleteSelected,
            ]
        );
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result: Result<Message, _> = serde_json::from_str(r#"{"action": "undo"}"#);
        assert!(result.is_err());
    }
}
