//! Global constants for the annotation workspace

/// Canvas sizing
pub mod canvas {
    /// Canvas width when no image is loaded
    pub const PLACEHOLDER_WIDTH: u32 = 800;

    /// Canvas height when no image is loaded
    pub const PLACEHOLDER_HEIGHT: u32 = 600;
}

/// Overlay drawing
pub mod overlay {
    /// Fill opacity of the selected shape
    pub const FILL_ALPHA_SELECTED: f32 = 0.35;

    /// Fill opacity of unselected shapes
    pub const FILL_ALPHA: f32 = 0.15;

    /// Fill opacity of the box being dragged
    pub const PREVIEW_FILL_ALPHA: f32 = 0.1;

    pub const STROKE_WIDTH_SELECTED: u32 = 3;
    pub const STROKE_WIDTH: u32 = 2;
    pub const PREVIEW_STROKE_WIDTH: u32 = 2;

    /// Dash pattern for in-progress shapes
    pub const PREVIEW_DASH: &str = "4";

    pub const LABEL_FONT_SIZE: u32 = 14;

    /// Labels sit this far above the shape's anchor point
    pub const LABEL_OFFSET: f32 = 5.0;

    /// Radius of in-progress polygon vertex markers
    pub const VERTEX_RADIUS: f32 = 3.0;
}
