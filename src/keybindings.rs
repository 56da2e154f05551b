//! Customizable tool hotkeys.
//!
//! Keys are single characters and match case-insensitively.

use serde::{Deserialize, Serialize};

use crate::model::AnnotationTool;

/// Hotkey configuration for the annotation tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Hotkey for Select tool
    pub tool_select: char,
    /// Hotkey for Box tool
    pub tool_box: char,
    /// Hotkey for Polygon tool
    pub tool_polygon: char,
    /// Hotkey for Eraser tool
    pub tool_eraser: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            // V select, R rectangle, P pen/polygon, E eraser
            tool_select: 'v',
            tool_box: 'r',
            tool_polygon: 'p',
            tool_eraser: 'e',
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tool that corresponds to a key press, if any.
    pub fn tool_for_key(&self, key: char) -> Option<AnnotationTool> {
        AnnotationTool::all()
            .iter()
            .copied()
            .find(|tool| same_key(self.key_for_tool(*tool), key))
    }

    /// Get the hotkey for a specific tool.
    pub fn key_for_tool(&self, tool: AnnotationTool) -> char {
        match tool {
            AnnotationTool::Select => self.tool_select,
            AnnotationTool::Box => self.tool_box,
            AnnotationTool::Polygon => self.tool_polygon,
            AnnotationTool::Eraser => self.tool_eraser,
        }
    }

    /// Find a tool other than `tool` that already uses `key`.
    pub fn find_conflict(&self, key: char, tool: AnnotationTool) -> Option<AnnotationTool> {
        AnnotationTool::all()
            .iter()
            .copied()
            .filter(|t| *t != tool)
            .find(|t| same_key(self.key_for_tool(*t), key))
    }
}

fn same_key(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}
