//! Text bubble content.

use super::BubbleContent;
use crate::layout::{TextLayoutEngine, TextLayoutModel};
use crate::measure::TextMeasurer;
use crate::model::{MessageViewModel, Size, TextMessageViewModel};
use crate::style::{Color, FontDescriptor, TextBubbleStyle};
use std::sync::Arc;

/// Body text of a text bubble, sized through the shared text engine.
pub struct TextBubbleContent<S: ?Sized, M> {
    view_model: TextMessageViewModel,
    style: Arc<S>,
    engine: Arc<TextLayoutEngine<M>>,
}

impl<S: TextBubbleStyle + ?Sized, M: TextMeasurer> TextBubbleContent<S, M> {
    /// Create content for `view_model`.
    pub fn new(
        view_model: TextMessageViewModel,
        style: Arc<S>,
        engine: Arc<TextLayoutEngine<M>>,
    ) -> Self {
        Self {
            view_model,
            style,
            engine,
        }
    }

    /// The message being shown.
    pub fn view_model(&self) -> &TextMessageViewModel {
        &self.view_model
    }

    /// Cached layout of the body for `max_width`.
    pub fn layout(&self, max_width: f32, is_selected: bool) -> Arc<TextLayoutModel> {
        let message = &self.view_model.message;
        let font = self.style.font(is_selected);
        let insets = self.style.content_insets(message.is_incoming, is_selected);
        let context = self
            .engine
            .context(&self.view_model.text, &font, insets, max_width);
        self.engine.layout(context)
    }

    /// Body font for the selection state.
    pub fn font(&self, is_selected: bool) -> FontDescriptor {
        self.style.font(is_selected)
    }

    /// Body text color for the selection state.
    pub fn text_color(&self, is_selected: bool) -> Color {
        self.style
            .text_color(self.view_model.message.is_incoming, is_selected)
    }
}

impl<S: TextBubbleStyle + ?Sized, M: TextMeasurer> BubbleContent for TextBubbleContent<S, M> {
    type Style = S;

    fn message(&self) -> &MessageViewModel {
        &self.view_model.message
    }

    fn style(&self) -> &S {
        &self.style
    }

    fn content_size(&self, max_width: f32, is_selected: bool) -> Size {
        self.layout(max_width, is_selected).size
    }
}
