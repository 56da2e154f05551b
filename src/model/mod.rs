//! Data models for the annotation workspace.

mod annotation;
mod palette;
mod preset;
mod task;

pub use annotation::{
    Annotation, AnnotationId, AnnotationShape, AnnotationTool, DEFAULT_BOX_LABEL,
    DEFAULT_POLYGON_LABEL, MIN_BOX_SIZE, MIN_POLYGON_VERTICES, Point, ShapeDraft,
};
pub use palette::PaletteColor;
pub use preset::{
    ASSIST_SUGGESTION, AssistSuggestion, PresetCategory, category_index, category_of,
    default_presets,
};
pub use task::{StaticTaskSource, TaskRecord, TaskSource, TaskStatus, TaskType};
