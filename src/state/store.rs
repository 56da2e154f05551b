//! Ordered annotation storage for the current image.

use crate::model::{Annotation, AnnotationId, PaletteColor, Point, ShapeDraft};

/// A field-level edit of an existing annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationPatch {
    /// Replace the label.
    Label(String),
    /// Replace the color.
    Color(PaletteColor),
}

/// Storage for annotations on a single image.
///
/// Insertion order is list order and z-order: later annotations are drawn
/// on top and win hit tests. The store also owns the selection so a
/// selected ID can never outlive its annotation.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
    /// Counter for generating unique annotation IDs. Never rewinds.
    next_id: AnnotationId,
    selected_id: Option<AnnotationId>,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self {
            annotations: Vec::new(),
            next_id: 1,
            selected_id: None,
        }
    }

    /// Commit a draft as a new annotation and return its ID.
    pub fn add(&mut self, draft: ShapeDraft) -> AnnotationId {
        let id = self.next_id;
        self.next_id += 1;
        self.annotations
            .push(Annotation::new(id, draft.shape, draft.label, draft.color));
        id
    }

    /// Remove an annotation by ID, clearing the selection if it pointed there.
    pub fn remove(&mut self, id: AnnotationId) -> Option<Annotation> {
        let index = self.index_of(id)?;
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        Some(self.annotations.remove(index))
    }

    /// Apply a patch. Returns the updated annotation, or None if the ID is
    /// unknown (the store is left untouched).
    pub fn update(&mut self, id: AnnotationId, patch: AnnotationPatch) -> Option<&Annotation> {
        let Some(ann) = self.annotations.iter_mut().find(|a| a.id == id) else {
            log::warn!("Update of unknown annotation {} ignored", id);
            return None;
        };
        match patch {
            AnnotationPatch::Label(label) => ann.label = label,
            AnnotationPatch::Color(color) => ann.color = color,
        }
        Some(&*ann)
    }

    /// Get an annotation by ID.
    pub fn find(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// Position of an annotation in list order.
    pub fn index_of(&self, id: AnnotationId) -> Option<usize> {
        self.annotations.iter().position(|a| a.id == id)
    }

    /// Iterate annotations in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    /// Get the number of annotations.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Check if there are no annotations.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Clear all annotations and the selection. IDs keep counting up.
    pub fn clear(&mut self) {
        self.annotations.clear();
        self.selected_id = None;
    }

    /// Select an annotation, or clear the selection with `None`.
    ///
    /// Selecting an unknown ID is refused and leaves the selection as it was.
    /// Returns whether the requested selection is now in effect.
    pub fn select(&mut self, id: Option<AnnotationId>) -> bool {
        match id {
            Some(id) if self.find(id).is_none() => false,
            _ => {
                self.selected_id = id;
                true
            }
        }
    }

    /// Get the selected annotation ID.
    pub fn selected(&self) -> Option<AnnotationId> {
        self.selected_id
    }

    /// Get the selected annotation.
    pub fn selected_annotation(&self) -> Option<&Annotation> {
        self.selected_id.and_then(|id| self.find(id))
    }

    /// Find the topmost annotation containing a point.
    pub fn hit_test(&self, point: &Point) -> Option<AnnotationId> {
        self.annotations
            .iter()
            .rev()
            .find(|ann| ann.shape.contains_point(point))
            .map(|ann| ann.id)
    }
}
