//! Photo bubble layout: context, model and the cached engine.

use super::cache::{LayoutCacheConfig, SharedLayoutCache};
use crate::model::geometry::{canonical_bits, same_float};
use crate::model::{Point, Rect, Size};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Every input of a photo layout computation.
///
/// `photo_size` is already the bucketed display size chosen by the style,
/// not the source image size.
#[derive(Debug, Clone, Copy)]
pub struct PhotoLayoutContext {
    /// Display size of the photo.
    pub photo_size: Size,
    /// Size of the placeholder icon.
    pub placeholder_size: Size,
    /// Width of the bubble tail.
    pub tail_width: f32,
    /// Direction of the bubble.
    pub is_incoming: bool,
    /// Width offered by the list.
    pub preferred_max_layout_width: f32,
}

impl PartialEq for PhotoLayoutContext {
    fn eq(&self, other: &Self) -> bool {
        self.photo_size == other.photo_size
            && self.placeholder_size == other.placeholder_size
            && same_float(self.tail_width, other.tail_width)
            && self.is_incoming == other.is_incoming
            && same_float(
                self.preferred_max_layout_width,
                other.preferred_max_layout_width,
            )
    }
}

impl Eq for PhotoLayoutContext {}

impl Hash for PhotoLayoutContext {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.photo_size.hash(state);
        self.placeholder_size.hash(state);
        canonical_bits(self.tail_width).hash(state);
        self.is_incoming.hash(state);
        canonical_bits(self.preferred_max_layout_width).hash(state);
    }
}

/// Computed photo bubble geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoLayoutModel {
    /// Content size of the bubble, equal to the photo size.
    pub size: Size,
    /// Frame of the image.
    pub photo_frame: Rect,
    /// Bounds of the placeholder icon; it is positioned by `visual_center`.
    pub placeholder_frame: Rect,
    /// Optical center of the visible, untailed part of the photo.
    ///
    /// The tail crops a few points on one side, so the geometric center is
    /// shifted by half the tail width away from it: right for incoming
    /// bubbles, left for outgoing ones.
    pub visual_center: Point,
}

impl PhotoLayoutModel {
    /// Derive the frames from `context`.
    pub fn compute(context: &PhotoLayoutContext) -> Self {
        let photo_size = context.photo_size.clamped();
        let photo_frame = Rect::from_size(photo_size);
        let placeholder_frame = Rect::from_size(context.placeholder_size.clamped());
        let direction = if context.is_incoming { 1.0 } else { -1.0 };
        let offset_x = 0.5 * context.tail_width * direction;
        Self {
            size: photo_size,
            photo_frame,
            placeholder_frame,
            visual_center: photo_frame.center().offset_by(offset_x, 0.0),
        }
    }
}

/// Photo layout with its own cache.
pub struct PhotoLayoutEngine {
    cache: SharedLayoutCache<PhotoLayoutContext, PhotoLayoutModel>,
}

impl PhotoLayoutEngine {
    /// Create an engine.
    pub fn new(cache: &LayoutCacheConfig) -> Self {
        Self {
            cache: SharedLayoutCache::from_config("photo", cache),
        }
    }

    /// Cached layout for `context`.
    pub fn layout(&self, context: PhotoLayoutContext) -> Arc<PhotoLayoutModel> {
        self.cache.get_or_compute(context, PhotoLayoutModel::compute)
    }

    /// The engine's cache.
    pub fn cache(&self) -> &SharedLayoutCache<PhotoLayoutContext, PhotoLayoutModel> {
        &self.cache
    }
}

impl Default for PhotoLayoutEngine {
    fn default() -> Self {
        Self::new(&LayoutCacheConfig::default())
    }
}
