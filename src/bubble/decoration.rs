//! Sender name shown above the bubble content.

use crate::layout::TextLayoutEngine;
use crate::measure::{Measure, TextMeasurer};
use crate::model::Size;
use crate::style::SenderNameText;

/// Top decoration carrying the sender's name.
///
/// Measured with the bubble's text engine but outside its cache.
pub struct SenderNameDecoration<'a, M> {
    text: SenderNameText,
    engine: &'a TextLayoutEngine<M>,
}

impl<'a, M: TextMeasurer> SenderNameDecoration<'a, M> {
    /// Wrap the resolved sender name.
    pub fn new(text: SenderNameText, engine: &'a TextLayoutEngine<M>) -> Self {
        Self { text, engine }
    }

    /// Attributed name as resolved by the style.
    pub fn text(&self) -> &SenderNameText {
        &self.text
    }
}

impl<M: TextMeasurer> Measure for SenderNameDecoration<'_, M> {
    fn measure(&self, max_width: f32) -> Size {
        self.engine
            .measure_uncached(&self.text.text, &self.text.font, max_width)
    }
}
