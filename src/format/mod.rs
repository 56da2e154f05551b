//! Workspace output.
//!
//! Two artifacts leave the workspace:
//!
//! - **Submit payload**: JSON `{imageId, annotations}` for the current image
//! - **SVG overlay**: the canvas overlay as it would be drawn, for previews
//!   and exports
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geoannot::format::render_svg;
//!
//! let svg = render_svg(&session.overlay_scene())?;
//! let json = session.submit_payload().map(|p| p.to_json()).transpose()?;
//! ```

mod error;
mod overlay;
mod payload;

pub use error::FormatError;
pub use overlay::{OverlayScene, render_svg};
pub use payload::SubmitPayload;
