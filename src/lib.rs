//! GeoAnnot - Geoscience Image Annotation Workspace
//!
//! The interaction core of an annotation workspace: draw boxes and polygons
//! over a loaded image, select and erase them, and edit each annotation's
//! label and color from a property panel kept in sync with the annotation
//! list.
//!
//! A [`WorkspaceSession`] owns all of it and is driven by [`Message`]s.

pub mod color_utils;
pub mod config;
pub mod constants;
pub mod editor;
pub mod format;
pub mod keybindings;
pub mod message;
pub mod model;
pub mod state;
pub mod workspace;

pub use config::{AppConfig, ConfigError};
pub use format::{FormatError, SubmitPayload, render_svg};
pub use message::Message;
pub use state::{ImageError, LoadedImage};
pub use workspace::WorkspaceSession;
