//! Property panel for the selected annotation.
//!
//! The panel edits the selection only. With nothing selected it shows a
//! prompt instead of controls.

use super::WorkspaceSession;
use crate::model::{
    ASSIST_SUGGESTION, AnnotationId, PaletteColor, category_index, default_presets,
};
use crate::state::AnnotationPatch;

/// Prompt shown when nothing is selected.
pub const PLACEHOLDER_PROMPT: &str =
    "请在画布中选择一个标注以编辑属性，或在左侧选择工具开始绘制。";

/// Which preset category is open. Exactly one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresetAccordion {
    expanded: usize,
}

impl PresetAccordion {
    /// Open the category at `index`. Out-of-range indices are ignored.
    /// Returns true if the open category changed.
    pub fn expand(&mut self, index: usize) -> bool {
        if index >= default_presets().len() || index == self.expanded {
            return false;
        }
        self.expanded = index;
        true
    }

    pub fn expanded_index(&self) -> usize {
        self.expanded
    }

    /// Name of the open category.
    pub fn expanded_category(&self) -> Option<&'static str> {
        default_presets().get(self.expanded).map(|c| c.name)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == index
    }
}

/// What the panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Placeholder(&'static str),
    Editing(SelectionEditor),
}

/// Controls for the selected annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEditor {
    pub id: AnnotationId,
    /// "box" or "polygon"
    pub kind: &'static str,
    pub label: String,
    pub color: PaletteColor,
    pub presets: Vec<PresetGroupView>,
    pub swatches: Vec<Swatch>,
}

/// One accordion section. Collapsed sections carry no tags.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetGroupView {
    pub name: &'static str,
    pub expanded: bool,
    pub tags: Vec<PresetTagView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresetTagView {
    pub tag: &'static str,
    /// Tag equals the current label
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub color: PaletteColor,
    pub selected: bool,
}

impl WorkspaceSession {
    pub fn presets(&self) -> &PresetAccordion {
        &self.presets
    }

    /// Build the panel for the current selection.
    pub fn panel(&self) -> PanelView {
        let Some(ann) = self.store.selected_annotation() else {
            return PanelView::Placeholder(PLACEHOLDER_PROMPT);
        };

        let presets = default_presets()
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let expanded = self.presets.is_expanded(i);
                let tags = if expanded {
                    category
                        .tags
                        .iter()
                        .copied()
                        .map(|tag| PresetTagView {
                            tag,
                            active: ann.label == tag,
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                PresetGroupView {
                    name: category.name,
                    expanded,
                    tags,
                }
            })
            .collect();

        let swatches = PaletteColor::all()
            .iter()
            .map(|color| Swatch {
                color: *color,
                selected: *color == ann.color,
            })
            .collect();

        PanelView::Editing(SelectionEditor {
            id: ann.id,
            kind: ann.shape.kind(),
            label: ann.label.clone(),
            color: ann.color,
            presets,
            swatches,
        })
    }

    /// Replace the selected annotation's label. Called on every keystroke.
    pub fn edit_label(&mut self, text: String) {
        let Some(id) = self.store.selected() else {
            log::debug!("Label edit without selection ignored");
            return;
        };
        if let Some(ann) = self.store.update(id, AnnotationPatch::Label(text)) {
            log::trace!("Annotation {} label: '{}'", ann.id, ann.label);
        }
    }

    /// Overwrite the selected label with a preset tag.
    pub fn apply_preset(&mut self, tag: &str) {
        if crate::model::category_of(tag).is_none() {
            log::debug!("Applying tag '{}' that is not in the catalog", tag);
        }
        self.edit_label(tag.to_string());
    }

    /// Open a preset category by name. Returns true if it changed.
    pub fn expand_preset_category(&mut self, name: &str) -> bool {
        match category_index(name) {
            Some(index) => self.presets.expand(index),
            None => {
                log::warn!("Unknown preset category '{}'", name);
                false
            }
        }
    }

    /// Recolor the selection from the panel palette. The color also
    /// becomes the color for new shapes.
    pub fn pick_color(&mut self, color: PaletteColor) {
        let Some(id) = self.store.selected() else {
            log::debug!("Panel color pick without selection ignored");
            return;
        };
        if let Some(ann) = self.store.update(id, AnnotationPatch::Color(color)) {
            log::debug!("Annotation {} color: {}", ann.id, color.name());
        }
        self.active_color = color;
    }

    /// Pick a color from the toolbar. Recolors the selection if there is one.
    pub fn pick_toolbar_color(&mut self, color: PaletteColor) {
        self.active_color = color;
        if let Some(id) = self.store.selected() {
            self.store.update(id, AnnotationPatch::Color(color));
        }
        log::debug!("Active color: {}", color.name());
    }

    /// Delete the selected annotation.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.store.selected() else {
            return;
        };
        if let Some(removed) = self.store.remove(id) {
            log::info!(
                "Deleted annotation {} '{}' (total: {})",
                removed.id,
                removed.label,
                self.store.len()
            );
        }
    }

    /// Apply the AI-assist suggestion. Not backed by anything yet.
    pub fn apply_suggestion(&mut self) {
        log::info!(
            "Suggestion '{}' ({:.0}%) acknowledged, no changes applied",
            ASSIST_SUGGESTION.preset,
            ASSIST_SUGGESTION.confidence * 100.0
        );
    }
}
