//! Workspace state: the annotation store and the loaded image.

mod loaded_image;
mod store;

pub use loaded_image::{IMAGE_EXTENSIONS, ImageError, LoadedImage, is_image_filename};
pub use store::{AnnotationPatch, AnnotationStore};

#[cfg(test)]
pub(crate) use loaded_image::tests::png_bytes;
