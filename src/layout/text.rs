//! Text bubble layout: context, model and the cached engine.

use super::cache::{LayoutCacheConfig, SharedLayoutCache};
use crate::measure::TextMeasurer;
use crate::model::geometry::{canonical_bits, same_float};
use crate::model::{DisplayScale, EdgeInsets, Rect, Size};
use crate::style::FontDescriptor;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Every input of a text layout computation.
///
/// # Equality Semantics
/// Two contexts are equal when every field is equal, floats compared by
/// canonical bit pattern. Equal contexts hash identically.
#[derive(Debug, Clone)]
pub struct TextLayoutContext {
    /// Message body.
    pub text: String,
    /// Body font.
    pub font: FontDescriptor,
    /// Style insets. Carried in the key, applied by the composer.
    pub text_insets: EdgeInsets,
    /// Width the text wraps to.
    pub preferred_max_layout_width: f32,
    /// Pixel grid the measured size is rounded to.
    pub display_scale: DisplayScale,
}

impl PartialEq for TextLayoutContext {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.font == other.font
            && self.text_insets == other.text_insets
            && same_float(
                self.preferred_max_layout_width,
                other.preferred_max_layout_width,
            )
            && self.display_scale == other.display_scale
    }
}

impl Eq for TextLayoutContext {}

impl Hash for TextLayoutContext {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.font.hash(state);
        self.text_insets.hash(state);
        canonical_bits(self.preferred_max_layout_width).hash(state);
        self.display_scale.hash(state);
    }
}

/// Computed text bubble geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayoutModel {
    /// Content size of the bubble.
    pub size: Size,
    /// Frame of the text, at the origin.
    pub text_frame: Rect,
    /// Frame of the bubble content, equal to the text frame.
    pub bubble_frame: Rect,
}

impl TextLayoutModel {
    /// Measure `context.text` and derive the frames.
    ///
    /// The measured size is clamped to be non-negative and rounded up to the
    /// display scale. No inset is applied here.
    pub fn compute(context: &TextLayoutContext, measurer: &dyn TextMeasurer) -> Self {
        let max_width = context.preferred_max_layout_width.max(0.0);
        let measured = measurer.measure(&context.text, &context.font, max_width);
        let size = measured.clamped().rounded(context.display_scale);
        let bubble_frame = Rect::from_size(size);
        Self {
            size,
            text_frame: bubble_frame,
            bubble_frame,
        }
    }
}

/// Text layout with its own cache.
///
/// One engine per text style; the cache is never shared with other message
/// kinds.
pub struct TextLayoutEngine<M> {
    measurer: M,
    display_scale: DisplayScale,
    cache: SharedLayoutCache<TextLayoutContext, TextLayoutModel>,
}

impl<M: TextMeasurer> TextLayoutEngine<M> {
    /// Create an engine around a measurer.
    pub fn new(measurer: M, display_scale: DisplayScale, cache: &LayoutCacheConfig) -> Self {
        Self {
            measurer,
            display_scale,
            cache: SharedLayoutCache::from_config("text", cache),
        }
    }

    /// The text engine in use.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Pixel grid of this engine.
    pub fn display_scale(&self) -> DisplayScale {
        self.display_scale
    }

    /// Build the context for a sizing request.
    pub fn context(
        &self,
        text: &str,
        font: &FontDescriptor,
        text_insets: EdgeInsets,
        preferred_max_layout_width: f32,
    ) -> TextLayoutContext {
        TextLayoutContext {
            text: text.to_string(),
            font: font.clone(),
            text_insets,
            preferred_max_layout_width,
            display_scale: self.display_scale,
        }
    }

    /// Cached layout for `context`.
    pub fn layout(&self, context: TextLayoutContext) -> Arc<TextLayoutModel> {
        self.cache
            .get_or_compute(context, |ctx| TextLayoutModel::compute(ctx, &self.measurer))
    }

    /// Size of a run of text without going through the cache.
    ///
    /// Used for decorations such as the sender name, which are cheap and
    /// short-lived compared to message bodies.
    pub fn measure_uncached(&self, text: &str, font: &FontDescriptor, max_width: f32) -> Size {
        self.measurer
            .measure(text, font, max_width.max(0.0))
            .clamped()
            .rounded(self.display_scale)
    }

    /// The engine's cache.
    pub fn cache(&self) -> &SharedLayoutCache<TextLayoutContext, TextLayoutModel> {
        &self.cache
    }
}
