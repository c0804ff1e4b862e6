//! Image gallery state
//!
//! An ordered set of locally-held images: at most 8, at least 3 required
//! before submission, with a preview cursor that clamps to the last
//! image when the previewed one is removed.

use shared::models::ImageFile;

/// Maximum images per listing
pub const MAX_IMAGES: usize = 8;
/// Minimum images required to submit
pub const MIN_IMAGES: usize = 3;

/// Ordered local image set with a preview cursor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageGallery {
    images: Vec<ImageFile>,
    preview: usize,
}

impl ImageGallery {
    /// Append images, keeping existing order and truncating the combined
    /// set to [`MAX_IMAGES`]
    pub fn add_images(&mut self, files: impl IntoIterator<Item = ImageFile>) {
        self.images.extend(files);
        self.images.truncate(MAX_IMAGES);
    }

    /// Remove an image by position
    ///
    /// Out-of-range indexes are ignored. If the preview cursor falls off
    /// the end it shifts to the new last image.
    pub fn remove(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        self.images.remove(index);
        if self.preview >= self.images.len() {
            self.preview = self.images.len().saturating_sub(1);
        }
    }

    /// Move the preview cursor to an existing image
    pub fn select_preview(&mut self, index: usize) {
        if index < self.images.len() {
            self.preview = index;
        }
    }

    /// Cycle the preview cursor forward
    pub fn next_preview(&mut self) {
        if !self.images.is_empty() {
            self.preview = (self.preview + 1) % self.images.len();
        }
    }

    /// Cycle the preview cursor backward
    pub fn prev_preview(&mut self) {
        if !self.images.is_empty() {
            self.preview = (self.preview + self.images.len() - 1) % self.images.len();
        }
    }

    pub fn preview_index(&self) -> usize {
        self.preview
    }

    pub fn images(&self) -> &[ImageFile] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether enough images are present to submit
    pub fn has_minimum(&self) -> bool {
        self.images.len() >= MIN_IMAGES
    }
}
