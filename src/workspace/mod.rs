//! The annotation workspace session.
//!
//! A [`WorkspaceSession`] holds everything one open workspace needs: the
//! loaded image, the annotation store, the active tool and color, and the
//! shape editors' transient state. Sessions share nothing, so several can be
//! open side by side.
//!
//! Pointer routing lives in `router`, the property panel in `panel`.

mod panel;
mod router;

#[cfg(test)]
mod tests;

pub use panel::{
    PLACEHOLDER_PROMPT, PanelView, PresetAccordion, PresetGroupView, PresetTagView,
    SelectionEditor, Swatch,
};
pub use router::PointerKind;

use crate::config::AppConfig;
use crate::editor::{BoxEditor, BoxEvent, PolygonEditor, PolygonEvent};
use crate::format::{OverlayScene, SubmitPayload};
use crate::keybindings::KeyBindings;
use crate::message::Message;
use crate::model::{
    Annotation, AnnotationId, AnnotationTool, PaletteColor, Point, ShapeDraft, TaskRecord,
    TaskSource,
};
use crate::state::{AnnotationStore, LoadedImage};

/// One row of the annotation list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: AnnotationId,
    pub label: String,
    pub color: PaletteColor,
    /// 1-based position in the list
    pub ordinal: usize,
    pub selected: bool,
}

/// State of one open annotation workspace.
#[derive(Debug, Default)]
pub struct WorkspaceSession {
    /// Task that opened this workspace, if any
    task: Option<TaskRecord>,
    image: Option<LoadedImage>,
    tool: AnnotationTool,
    /// Color the next new shape gets; follows the selection
    active_color: PaletteColor,
    store: AnnotationStore,
    box_editor: BoxEditor,
    polygon_editor: PolygonEditor,
    presets: PresetAccordion,
    /// Client-space position of the canvas' top-left corner
    canvas_origin: Point,
    keybindings: KeyBindings,
}

impl WorkspaceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session using configured hotkeys and initial color.
    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            active_color: config.preferences.initial_color,
            keybindings: config.keybindings.clone(),
            ..Self::default()
        }
    }

    /// Open the workspace for a task from the queue.
    /// Returns None if the source has no task with that ID.
    pub fn open_task(source: &dyn TaskSource, task_id: &str, config: &AppConfig) -> Option<Self> {
        let task = source.find(task_id)?;
        log::info!(
            "Opening workspace for task #{} ({}, {})",
            task.id,
            task.dataset_name,
            task.annotator
        );
        Some(Self {
            task: Some(task.clone()),
            ..Self::with_config(config)
        })
    }

    /// Leave the workspace. Transient drawing state is discarded and the
    /// image released; nothing is saved.
    pub fn close(self) {
        log::info!(
            "Leaving workspace ({} annotations discarded)",
            self.store.len()
        );
    }

    pub fn task(&self) -> Option<&TaskRecord> {
        self.task.as_ref()
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    /// Replace the current image. All annotations of the previous image and
    /// any shape in progress are dropped.
    pub fn load_image(&mut self, image: LoadedImage) {
        if let Some(previous) = &self.image {
            log::info!(
                "Replacing image '{}' with '{}', clearing {} annotations",
                previous.name(),
                image.name(),
                self.store.len()
            );
        }
        self.cancel_drawing();
        self.store.clear();
        self.image = Some(image);
    }

    pub fn tool(&self) -> AnnotationTool {
        self.tool
    }

    /// CSS cursor for the canvas under the active tool.
    pub fn cursor(&self) -> &'static str {
        self.tool.cursor()
    }

    /// Switch the active tool. Any selection and shape in progress are
    /// dropped; choosing the tool that is already active changes nothing.
    pub fn set_tool(&mut self, tool: AnnotationTool) {
        if tool == self.tool {
            log::debug!("Tool {} already active", tool.name());
            return;
        }
        log::info!("Tool: {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
        self.store.select(None);
        self.cancel_drawing();
    }

    /// Handle a hotkey. Returns true if the key switched tools.
    pub fn handle_key(&mut self, key: char) -> bool {
        match self.keybindings.tool_for_key(key) {
            Some(tool) => {
                self.set_tool(tool);
                true
            }
            None => {
                log::trace!("Unbound key '{}'", key);
                false
            }
        }
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    pub fn active_color(&self) -> PaletteColor {
        self.active_color
    }

    /// Read-only view of the annotation store.
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn selected(&self) -> Option<AnnotationId> {
        self.store.selected()
    }

    pub fn selected_annotation(&self) -> Option<&Annotation> {
        self.store.selected_annotation()
    }

    /// Select an annotation from the list. The tool switches to Select
    /// first so the selection survives the switch.
    pub fn select_from_list(&mut self, id: AnnotationId) {
        if self.store.find(id).is_none() {
            log::warn!("List selection of unknown annotation {}", id);
            return;
        }
        self.set_tool(AnnotationTool::Select);
        self.set_selection(Some(id));
    }

    /// Vertices of the polygon being drawn.
    pub fn polygon_in_progress(&self) -> &[Point] {
        self.polygon_editor.points()
    }

    /// Check if a box is being dragged out.
    pub fn is_dragging_box(&self) -> bool {
        self.box_editor.is_dragging()
    }

    /// Rows for the annotation list, in list order.
    pub fn list_rows(&self) -> Vec<ListRow> {
        let selected = self.store.selected();
        self.store
            .iter()
            .enumerate()
            .map(|(i, ann)| ListRow {
                id: ann.id,
                label: ann.label.clone(),
                color: ann.color,
                ordinal: i + 1,
                selected: selected == Some(ann.id),
            })
            .collect()
    }

    /// Everything the canvas overlay draws.
    pub fn overlay_scene(&self) -> OverlayScene<'_> {
        let (width, height) = self
            .image
            .as_ref()
            .map(|img| (img.width(), img.height()))
            .unwrap_or((
                crate::constants::canvas::PLACEHOLDER_WIDTH,
                crate::constants::canvas::PLACEHOLDER_HEIGHT,
            ));
        let selected = self.store.selected();

        OverlayScene {
            width,
            height,
            annotations: self
                .store
                .iter()
                .map(|ann| (ann, selected == Some(ann.id)))
                .collect(),
            box_preview: self.box_editor.preview().map(|(shape, _)| shape),
            polygon_preview: self.polygon_editor.points(),
            preview_color: self.active_color,
        }
    }

    /// Build the submit payload for the current image.
    /// Returns None when no image is loaded.
    pub fn submit_payload(&self) -> Option<SubmitPayload> {
        let image = self.image.as_ref()?;
        Some(SubmitPayload::new(image.name(), self.store.iter().cloned().collect()))
    }

    /// Process a user action.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SelectTool { tool } => self.set_tool(tool),
            Message::KeyPressed { key } => {
                self.handle_key(key);
            }
            Message::SetCanvasOrigin { left, top } => self.set_canvas_origin(left, top),
            Message::Pointer { kind, x, y } => self.handle_pointer(kind, Point::new(x, y)),
            Message::SelectFromList { id } => self.select_from_list(id),
            Message::EditLabel { text } => self.edit_label(text),
            Message::ApplyPreset { tag } => self.apply_preset(&tag),
            Message::ExpandPresetCategory { category } => {
                self.expand_preset_category(&category);
            }
            Message::PickColor { color } => self.pick_color(color),
            Message::PickToolbarColor { color } => self.pick_toolbar_color(color),
            Message::DeleteSelected => self.delete_selected(),
            Message::ApplySuggestion => self.apply_suggestion(),
        }
    }

    /// Set the selection and pull the active color from the selected
    /// annotation.
    fn set_selection(&mut self, id: Option<AnnotationId>) {
        if !self.store.select(id) {
            log::warn!("Refused selection of unknown annotation {:?}", id);
            return;
        }
        if let Some(ann) = self.store.selected_annotation() {
            self.active_color = ann.color;
            log::debug!("Selected annotation {} ({})", ann.id, ann.label);
        }
    }

    /// Store a finished shape and select it.
    fn commit(&mut self, draft: ShapeDraft) {
        let kind = draft.shape.kind();
        let id = self.store.add(draft);
        log::info!(
            "Created {} annotation {} (total: {})",
            kind,
            id,
            self.store.len()
        );
        self.set_selection(Some(id));
    }

    fn cancel_drawing(&mut self) {
        if self.box_editor.is_dragging() || !self.polygon_editor.points().is_empty() {
            log::debug!("Discarding shape in progress");
        }
        self.box_editor = self.box_editor.transition(BoxEvent::Cancel).0;
        self.polygon_editor = std::mem::take(&mut self.polygon_editor)
            .transition(PolygonEvent::Cancel)
            .0;
    }
}
