//! Measurement capabilities used by the layout core.
//!
//! Two seams live here:
//!
//! - [`TextMeasurer`] - the text engine. Given a string, a font and a maximum
//!   width with unbounded height it returns the minimal bounding size of the
//!   wrapped text. This is the expensive call the layout caches exist for.
//! - [`Measure`] - anything the bubble composer can stack. The composer never
//!   sees widgets, only this capability.

pub mod grid;

pub use grid::GridTextEngine;

use crate::model::Size;
use crate::style::FontDescriptor;

/// Text measurement engine.
///
/// Implementations must be pure: identical inputs on an identically
/// configured engine return identical sizes. The returned size carries no
/// padding; callers apply insets.
pub trait TextMeasurer {
    /// Bounding size of `text` set in `font`, wrapped to `max_width`.
    ///
    /// Empty text measures as the engine's own empty-content size, which is
    /// not special-cased by callers.
    fn measure(&self, text: &str, font: &FontDescriptor, max_width: f32) -> Size;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &FontDescriptor, max_width: f32) -> Size {
        (**self).measure(text, font, max_width)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for std::sync::Arc<T> {
    fn measure(&self, text: &str, font: &FontDescriptor, max_width: f32) -> Size {
        (**self).measure(text, font, max_width)
    }
}

/// A region the composer can measure against a maximum width.
pub trait Measure {
    /// Size of the region when given at most `max_width` points.
    fn measure(&self, max_width: f32) -> Size;
}

/// A pre-measured region ignores the width it is offered.
impl Measure for Size {
    fn measure(&self, _max_width: f32) -> Size {
        *self
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn measure(&self, max_width: f32) -> Size {
        (**self).measure(max_width)
    }
}
